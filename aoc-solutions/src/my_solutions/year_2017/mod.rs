pub mod day_01;
pub mod day_02;
pub mod day_07;
pub mod day_12;
pub mod day_17;
pub mod day_23;
