use alloc::vec::Vec;

use super::*;

/// Repeats a fixed color sequence. Handy for replaying a known refill order.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclingColors {
    colors: Vec<Color>,
    next: usize,
}

impl CyclingColors {
    /// Builds a cycle from `colors`, dropping any [`Color::Empty`].
    ///
    /// Falls back to the full palette if nothing usable is left.
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let mut colors: Vec<Color> = colors.into_iter().filter(|c| !c.is_empty()).collect();
        if colors.is_empty() {
            log::warn!("No usable colors for cycle, fallback to full palette");
            colors.extend(Color::PALETTE);
        }
        Self { colors, next: 0 }
    }
}

impl ColorSource for CyclingColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.next];
        self.next = (self.next + 1) % self.colors.len();
        color
    }
}
