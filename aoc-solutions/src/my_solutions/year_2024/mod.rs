pub mod day_01;
pub mod day_02;
pub mod day_11;
pub mod day_19;
