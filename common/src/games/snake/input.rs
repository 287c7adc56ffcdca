use super::session::GameEvent;
use super::types::{Direction, RunState};

pub const SWIPE_THRESHOLD_PX: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Char(char),
}

pub fn translate_key(key: InputKey, run_state: RunState) -> Option<GameEvent> {
    let direction = match key {
        InputKey::ArrowUp => Some(Direction::Up),
        InputKey::ArrowDown => Some(Direction::Down),
        InputKey::ArrowLeft => Some(Direction::Left),
        InputKey::ArrowRight => Some(Direction::Right),
        InputKey::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'z' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' | 'q' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        InputKey::Space => {
            return (run_state == RunState::Over).then_some(GameEvent::Restart);
        }
    };
    direction.map(GameEvent::Turn)
}

#[derive(Clone, Debug)]
pub struct SwipeTracker {
    origin: Option<(f32, f32)>,
    threshold: f32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            origin: None,
            threshold,
        }
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    pub fn moved(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (ox, oy) = self.origin?;
        let dx = x - ox;
        let dy = y - oy;

        let (unit_x, unit_y) = if dx.abs() > dy.abs() {
            if dx.abs() <= self.threshold {
                return None;
            }
            (dx.signum() as i32, 0)
        } else {
            if dy.abs() <= self.threshold {
                return None;
            }
            (0, dy.signum() as i32)
        };

        self.origin = None;
        Direction::from_delta(unit_x, unit_y)
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        let running = RunState::Running;
        assert_eq!(translate_key(InputKey::ArrowUp, running), Some(GameEvent::Turn(Direction::Up)));
        assert_eq!(translate_key(InputKey::Char('Z'), running), Some(GameEvent::Turn(Direction::Up)));
        assert_eq!(translate_key(InputKey::Char('q'), running), Some(GameEvent::Turn(Direction::Left)));
        assert_eq!(translate_key(InputKey::Char('s'), running), Some(GameEvent::Turn(Direction::Down)));
        assert_eq!(translate_key(InputKey::Char('D'), running), Some(GameEvent::Turn(Direction::Right)));
        assert_eq!(translate_key(InputKey::Char('x'), running), None);
    }

    #[test]
    fn test_space_restarts_only_when_over() {
        assert_eq!(translate_key(InputKey::Space, RunState::Running), None);
        assert_eq!(translate_key(InputKey::Space, RunState::Idle), None);
        assert_eq!(translate_key(InputKey::Space, RunState::Over), Some(GameEvent::Restart));
    }

    #[test]
    fn test_swipe_below_threshold_is_ignored() {
        let mut swipe = SwipeTracker::new(30.0);
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.moved(120.0, 110.0), None);
        assert_eq!(swipe.moved(100.0, 60.0), Some(Direction::Up));
    }

    #[test]
    fn test_swipe_emits_once_per_gesture() {
        let mut swipe = SwipeTracker::new(30.0);
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.moved(100.0, 140.0), Some(Direction::Down));
        assert_eq!(swipe.moved(100.0, 200.0), None);
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.moved(50.0, 90.0), Some(Direction::Left));
    }

    #[test]
    fn test_swipe_uses_dominant_axis() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.moved(40.0, -35.0), Some(Direction::Right));
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.moved(10.0, -45.0), Some(Direction::Up));
    }

    #[test]
    fn test_move_without_begin_does_nothing() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.moved(500.0, 0.0), None);
        swipe.begin(0.0, 0.0);
        swipe.end();
        assert_eq!(swipe.moved(500.0, 0.0), None);
    }
}
