pub mod error;
pub mod game;
