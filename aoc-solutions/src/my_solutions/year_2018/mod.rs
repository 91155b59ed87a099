pub mod day_01;
pub mod day_02;
pub mod day_09;
pub mod day_14;
pub mod day_23;
