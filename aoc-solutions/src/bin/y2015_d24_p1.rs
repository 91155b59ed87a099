aoc_solver::script_main!(aoc_solutions::my_solutions::year_2015::day_24::Solver, 1);
