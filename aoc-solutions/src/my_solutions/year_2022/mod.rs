pub mod day_01;
pub mod day_06;
pub mod day_13;
pub mod day_20;
pub mod day_25;
