//! The `(year, day) → solver` catalogue used by the developer runner

use crate::my_solutions::*;
use aoc_solver::{RegistrationError, RegistryBuilder, SolverRegistry};

/// Every puzzle in this crate, keyed by year and day.
pub fn catalogue() -> Result<SolverRegistry, RegistrationError> {
    Ok(RegistryBuilder::new()
        .register_solver::<year_2015::day_01::Solver>(2015, 1)?
        .register_solver::<year_2015::day_02::Solver>(2015, 2)?
        .register_solver::<year_2015::day_03::Solver>(2015, 3)?
        .register_solver::<year_2015::day_04::Solver>(2015, 4)?
        .register_solver::<year_2015::day_05::Solver>(2015, 5)?
        .register_solver::<year_2015::day_09::Solver>(2015, 9)?
        .register_solver::<year_2015::day_13::Solver>(2015, 13)?
        .register_solver::<year_2015::day_17::Solver>(2015, 17)?
        .register_solver::<year_2015::day_24::Solver>(2015, 24)?
        .register_solver::<year_2015::day_25::Solver>(2015, 25)?
        .register_solver::<year_2016::day_01::Solver>(2016, 1)?
        .register_solver::<year_2016::day_03::Solver>(2016, 3)?
        .register_solver::<year_2016::day_05::Solver>(2016, 5)?
        .register_solver::<year_2016::day_06::Solver>(2016, 6)?
        .register_solver::<year_2016::day_12::Solver>(2016, 12)?
        .register_solver::<year_2016::day_14::Solver>(2016, 14)?
        .register_solver::<year_2016::day_15::Solver>(2016, 15)?
        .register_solver::<year_2016::day_16::Solver>(2016, 16)?
        .register_solver::<year_2016::day_19::Solver>(2016, 19)?
        .register_solver::<year_2016::day_20::Solver>(2016, 20)?
        .register_solver::<year_2016::day_23::Solver>(2016, 23)?
        .register_solver::<year_2016::day_25::Solver>(2016, 25)?
        .register_solver::<year_2017::day_01::Solver>(2017, 1)?
        .register_solver::<year_2017::day_02::Solver>(2017, 2)?
        .register_solver::<year_2017::day_07::Solver>(2017, 7)?
        .register_solver::<year_2017::day_12::Solver>(2017, 12)?
        .register_solver::<year_2017::day_17::Solver>(2017, 17)?
        .register_solver::<year_2017::day_23::Solver>(2017, 23)?
        .register_solver::<year_2018::day_01::Solver>(2018, 1)?
        .register_solver::<year_2018::day_02::Solver>(2018, 2)?
        .register_solver::<year_2018::day_09::Solver>(2018, 9)?
        .register_solver::<year_2018::day_14::Solver>(2018, 14)?
        .register_solver::<year_2018::day_23::Solver>(2018, 23)?
        .register_solver::<year_2019::day_01::Solver>(2019, 1)?
        .register_solver::<year_2019::day_12::Solver>(2019, 12)?
        .register_solver::<year_2020::day_01::Solver>(2020, 1)?
        .register_solver::<year_2020::day_10::Solver>(2020, 10)?
        .register_solver::<year_2020::day_13::Solver>(2020, 13)?
        .register_solver::<year_2020::day_25::Solver>(2020, 25)?
        .register_solver::<year_2021::day_01::Solver>(2021, 1)?
        .register_solver::<year_2021::day_06::Solver>(2021, 6)?
        .register_solver::<year_2021::day_07::Solver>(2021, 7)?
        .register_solver::<year_2021::day_12::Solver>(2021, 12)?
        .register_solver::<year_2022::day_01::Solver>(2022, 1)?
        .register_solver::<year_2022::day_06::Solver>(2022, 6)?
        .register_solver::<year_2022::day_13::Solver>(2022, 13)?
        .register_solver::<year_2022::day_20::Solver>(2022, 20)?
        .register_solver::<year_2022::day_25::Solver>(2022, 25)?
        .register_solver::<year_2023::day_01::Solver>(2023, 1)?
        .register_solver::<year_2023::day_06::Solver>(2023, 6)?
        .register_solver::<year_2023::day_08::Solver>(2023, 8)?
        .register_solver::<year_2023::day_09::Solver>(2023, 9)?
        .register_solver::<year_2023::day_12::Solver>(2023, 12)?
        .register_solver::<year_2024::day_01::Solver>(2024, 1)?
        .register_solver::<year_2024::day_02::Solver>(2024, 2)?
        .register_solver::<year_2024::day_11::Solver>(2024, 11)?
        .register_solver::<year_2024::day_19::Solver>(2024, 19)?
        .register_solver::<year_2025::day_01::Solver>(2025, 1)?
        .register_solver::<year_2025::day_05::Solver>(2025, 5)?
        .register_solver::<year_2025::day_11::Solver>(2025, 11)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_PART: [(u16, u8); 4] = [(2015, 25), (2016, 25), (2020, 25), (2022, 25)];

    #[test]
    fn test_every_puzzle_registered() {
        let registry = catalogue().unwrap();
        assert_eq!(registry.len(), 60);
        assert_eq!(registry.iter_info().filter(|i| i.year == 2016).count(), 12);
        for info in registry.iter_info() {
            let expected = if SINGLE_PART.contains(&(info.year, info.day)) { 1 } else { 2 };
            assert_eq!(info.parts, expected, "{}/{:02}", info.year, info.day);
        }
    }

    #[test]
    fn test_solve_through_registry() {
        let registry = catalogue().unwrap();
        let mut solver = registry.create_solver(2015, 1, "()())").unwrap();
        assert_eq!(solver.solve(2).unwrap().answer, "5");
        assert!(!registry.contains(2015, 22));
    }
}
