aoc_solver::script_main!(aoc_solutions::my_solutions::year_2016::day_14::Solver, 2);
