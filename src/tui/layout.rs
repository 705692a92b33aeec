/// Responsive breakpoints for the arena layout.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: form and board stacked, short labels
    Compact,
    /// 60-99 cols: form and board stacked
    Normal,
    /// 100+ cols: form and board side by side
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Form and leaderboard share a row instead of stacking
    pub fn side_by_side(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(300), Breakpoint::Wide);
    }

    #[test]
    fn side_by_side_only_when_wide() {
        assert!(!Breakpoint::Compact.side_by_side());
        assert!(!Breakpoint::Normal.side_by_side());
        assert!(Breakpoint::Wide.side_by_side());
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
    }
}
