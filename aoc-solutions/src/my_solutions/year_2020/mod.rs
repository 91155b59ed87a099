pub mod day_01;
pub mod day_10;
pub mod day_13;
pub mod day_25;
