use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::types::GameMode;

pub const DEFAULT_BOARD_TILES: u32 = 20;
pub const DEFAULT_MOVES_PER_SECOND: f32 = 10.0;
pub const MIN_BOARD_TILES: u32 = 5;
pub const MAX_BOARD_TILES: u32 = 100;
pub const MIN_MOVES_PER_SECOND: f32 = 1.0;
pub const MAX_MOVES_PER_SECOND: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeGameSettings {
    pub board_tiles: u32,
    pub moves_per_second: f32,
    pub mode: GameMode,
}

impl Default for SnakeGameSettings {
    fn default() -> Self {
        Self {
            board_tiles: DEFAULT_BOARD_TILES,
            moves_per_second: DEFAULT_MOVES_PER_SECOND,
            mode: GameMode::Bounded,
        }
    }
}

impl SnakeGameSettings {
    pub fn sanitized(self) -> Self {
        let moves_per_second = if self.moves_per_second.is_finite() {
            self.moves_per_second
                .clamp(MIN_MOVES_PER_SECOND, MAX_MOVES_PER_SECOND)
        } else {
            DEFAULT_MOVES_PER_SECOND
        };

        Self {
            board_tiles: self.board_tiles.clamp(MIN_BOARD_TILES, MAX_BOARD_TILES),
            moves_per_second,
            mode: self.mode,
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.board_tiles)
    }

    pub fn tick_interval(&self) -> Duration {
        let moves = if self.moves_per_second.is_finite() && self.moves_per_second > 0.0 {
            self.moves_per_second
        } else {
            DEFAULT_MOVES_PER_SECOND
        };
        Duration::from_secs_f64(1.0 / moves as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_default_is_already_sanitized() {
        let settings = SnakeGameSettings::default();
        assert_eq!(settings.sanitized(), settings);
    }

    #[test]
    fn test_sanitized_clamps() {
        let settings = SnakeGameSettings {
            board_tiles: 1,
            moves_per_second: 500.0,
            mode: GameMode::Portal,
        }
        .sanitized();
        assert_eq!(settings.board_tiles, MIN_BOARD_TILES);
        assert_eq!(settings.moves_per_second, MAX_MOVES_PER_SECOND);
        assert_eq!(settings.mode, GameMode::Portal);
    }

    #[test]
    fn test_sanitized_replaces_nan_speed() {
        let settings = SnakeGameSettings {
            moves_per_second: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.moves_per_second, DEFAULT_MOVES_PER_SECOND);
    }

    #[test]
    fn test_tick_interval_from_speed() {
        let settings = SnakeGameSettings::default();
        assert_eq!(settings.tick_interval().as_millis(), 100);
        let slow = SnakeGameSettings {
            moves_per_second: 4.0,
            ..Default::default()
        };
        assert_eq!(slow.tick_interval().as_millis(), 250);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: SnakeGameSettings = serializer.deserialize("mode: portal\n").unwrap();
        assert_eq!(settings.mode, GameMode::Portal);
        assert_eq!(settings.board_tiles, DEFAULT_BOARD_TILES);
        assert_eq!(settings.moves_per_second, DEFAULT_MOVES_PER_SECOND);
    }
}
