//! Level labels and time formatting shared by the screens and the CLI.

use strum::{Display, EnumIter};

/// Difficulty tiers offered by the grid-size selector.
///
/// The service accepts any level from 2 to 10; these four are the ones the
/// selector offers, and their names double as leaderboard labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Level {
    /// 2x2 grid.
    Tutorial,
    /// 3x3 grid.
    Basic,
    /// 4x4 grid.
    Medium,
    /// 5x5 grid.
    Expert,
}

impl Level {
    /// Returns the grid edge this level plays on.
    pub fn grid_edge(&self) -> usize {
        match self {
            Level::Tutorial => 2,
            Level::Basic => 3,
            Level::Medium => 4,
            Level::Expert => 5,
        }
    }

    /// Looks up the named level for a grid edge, if one exists.
    pub fn for_grid_edge(edge: usize) -> Option<Self> {
        match edge {
            2 => Some(Level::Tutorial),
            3 => Some(Level::Basic),
            4 => Some(Level::Medium),
            5 => Some(Level::Expert),
            _ => None,
        }
    }

    /// Display label for a stored leaderboard level.
    ///
    /// Levels without a name fall back to their grid dimensions.
    pub fn label_for(level: i32) -> String {
        match usize::try_from(level).ok().and_then(Self::for_grid_edge) {
            Some(named) => named.to_string(),
            None => format!("{0}x{0}", level),
        }
    }
}

/// Formats whole seconds as `mm:ss`.
///
/// Minutes run past 59 rather than rolling into hours.
pub fn format_mmss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn formats_seconds_as_minutes_and_seconds() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(60), "01:00");
        assert_eq!(format_mmss(83), "01:23");
        assert_eq!(format_mmss(3661), "61:01");
    }

    #[test]
    fn named_levels_round_trip_their_grid_edges() {
        for level in Level::iter() {
            assert_eq!(Level::for_grid_edge(level.grid_edge()), Some(level));
        }
        assert_eq!(Level::for_grid_edge(1), None);
        assert_eq!(Level::for_grid_edge(6), None);
    }

    #[test]
    fn labels_name_the_four_tiers_and_fall_back_to_dimensions() {
        assert_eq!(Level::label_for(2), "Tutorial");
        assert_eq!(Level::label_for(3), "Basic");
        assert_eq!(Level::label_for(4), "Medium");
        assert_eq!(Level::label_for(5), "Expert");
        assert_eq!(Level::label_for(7), "7x7");
        assert_eq!(Level::label_for(10), "10x10");
    }
}
