aoc_solver::script_main!(aoc_solutions::my_solutions::year_2021::day_07::Solver, 2);
