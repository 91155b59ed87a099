aoc_solver::script_main!(aoc_solutions::my_solutions::year_2024::day_01::Solver, 1);
