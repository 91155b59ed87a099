aoc_solver::script_main!(aoc_solutions::my_solutions::year_2015::day_05::Solver, 1);
