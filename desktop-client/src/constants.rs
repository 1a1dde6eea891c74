/// Side length of a grid cell on the canvas, in points.
pub const PIXELS_PER_CELL: f32 = 24.0;

/// How many recent game events the side log keeps.
pub const EVENT_LOG_SIZE: usize = 16;
