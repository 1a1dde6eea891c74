pub mod config;
pub mod game;
pub mod logger;
pub mod rng;

pub use rng::GameRng;
