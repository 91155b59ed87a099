pub mod day_01;
pub mod day_03;
pub mod day_05;
pub mod day_06;
pub mod day_12;
pub mod day_14;
pub mod day_15;
pub mod day_16;
pub mod day_19;
pub mod day_20;
pub mod day_23;
pub mod day_25;
