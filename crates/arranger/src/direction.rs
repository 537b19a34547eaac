use crate::error::{ArrangeError, Result};
use strum_macros::{Display, EnumIter, EnumString};

/// Arrangement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Direction {
    /// Row-major: rows top to bottom, items left to right within a row
    #[strum(to_string = "left-to-right", serialize = "LEFT_TO_RIGHT")]
    LeftToRight,
    /// Column-major: columns left to right, items top to bottom within a column
    #[strum(to_string = "top-to-bottom", serialize = "TOP_TO_BOTTOM")]
    TopToBottom,
}

/// Maps a command identifier to a direction. Matching is exact.
pub fn select_direction(command: &str) -> Result<Direction> {
    command
        .parse()
        .map_err(|_| ArrangeError::InvalidDirection(command.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{LEFT_TO_RIGHT, TOP_TO_BOTTOM};
    use strum::IntoEnumIterator;

    #[test]
    fn test_select_known_commands() {
        assert_eq!(
            select_direction("left-to-right").unwrap(),
            Direction::LeftToRight
        );
        assert_eq!(
            select_direction("top-to-bottom").unwrap(),
            Direction::TopToBottom
        );
        assert_eq!(
            select_direction("LEFT_TO_RIGHT").unwrap(),
            Direction::LeftToRight
        );
    }

    #[test]
    fn test_select_unknown_command() {
        for bad in [
            "",
            "diagonal",
            "Left-To-Right",
            "right-to-left",
            " TOP_TO_BOTTOM\n",
            "left-to-right ",
        ] {
            match select_direction(bad) {
                Err(ArrangeError::InvalidDirection(got)) => assert_eq!(got, bad),
                other => panic!("expected InvalidDirection for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips() {
        for direction in Direction::iter() {
            assert_eq!(select_direction(&direction.to_string()).unwrap(), direction);
        }
        assert_eq!(Direction::LeftToRight.to_string(), LEFT_TO_RIGHT);
        assert_eq!(Direction::TopToBottom.to_string(), TOP_TO_BOTTOM);
    }
}
