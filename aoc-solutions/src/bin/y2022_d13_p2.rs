aoc_solver::script_main!(aoc_solutions::my_solutions::year_2022::day_13::Solver, 2);
