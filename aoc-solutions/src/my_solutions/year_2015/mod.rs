pub mod day_01;
pub mod day_02;
pub mod day_03;
pub mod day_04;
pub mod day_05;
pub mod day_09;
pub mod day_13;
pub mod day_17;
pub mod day_24;
pub mod day_25;
