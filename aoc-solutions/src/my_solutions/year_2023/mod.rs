pub mod day_01;
pub mod day_06;
pub mod day_08;
pub mod day_09;
pub mod day_12;
