aoc_solver::script_main!(aoc_solutions::my_solutions::year_2024::day_11::Solver, 1);
