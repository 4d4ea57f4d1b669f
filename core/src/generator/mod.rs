use crate::*;
pub use cycling::*;
pub use random::*;

mod cycling;
mod random;

/// Supplies colors for filling and refilling the board.
///
/// Implementations must never return [`Color::Empty`].
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

impl<C: ColorSource + ?Sized> ColorSource for &mut C {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}
