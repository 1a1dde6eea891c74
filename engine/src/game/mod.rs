mod settings;
mod snake;
mod state;
mod types;

pub use settings::GameSettings;
pub use snake::Snake;
pub use state::{Collision, GameState, TickOutcome};
pub use types::{Direction, FieldSize, Point};
