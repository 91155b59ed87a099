pub mod day_01;
pub mod day_06;
pub mod day_07;
pub mod day_12;
