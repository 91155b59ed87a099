//! Kernels shared by the puzzle solutions

pub mod dp_cache;
pub mod geometry;
pub mod graph;
pub mod hash;
pub mod input;
pub mod interval;
pub mod machine;
pub mod numeric;
pub mod ring;
pub mod seq;
