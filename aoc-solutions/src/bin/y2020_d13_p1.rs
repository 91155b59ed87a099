aoc_solver::script_main!(aoc_solutions::my_solutions::year_2020::day_13::Solver, 1);
