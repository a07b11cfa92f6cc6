pub mod math;
pub mod pool;
pub mod rng;
pub mod world;
