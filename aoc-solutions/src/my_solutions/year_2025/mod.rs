pub mod day_01;
pub mod day_05;
pub mod day_11;
