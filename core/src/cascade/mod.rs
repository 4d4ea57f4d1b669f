//! Match resolution: marking runs, popping them, gravity and refill, and the
//! bounded loop that repeats those until the board settles.

pub use gravity::*;
pub use matcher::*;
pub use processor::*;

mod gravity;
mod matcher;
mod processor;
