aoc_solver::script_main!(aoc_solutions::my_solutions::year_2019::day_12::Solver, 1);
