//! Tint strategies.
//!
//! Dividers are untinted unless a tint is configured, so there is no default
//! tint strategy.

use horizon_divider_render::Color;

use super::TintStrategy;

/// Every group uses the same tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTint(pub Color);

impl TintStrategy for FixedTint {
    fn tint(&self, _: usize, _: usize) -> Color {
        self.0
    }
}

/// A constant tint for every group.
pub fn fixed(color: Color) -> FixedTint {
    FixedTint(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_tint() {
        assert_eq!(fixed(Color::RED).tint(2, 1), Color::RED);
    }
}
