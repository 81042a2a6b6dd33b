pub mod basic;
pub mod intersection;
pub mod multithreaded;
pub mod render;
pub mod whitted;
