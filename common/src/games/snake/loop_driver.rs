use std::time::Duration;

use super::session::{GameView, SnakeSession};
use super::types::{RunState, StepOutcome};

pub type FrameHandle = u64;

pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

pub trait RenderSink {
    fn render(&mut self, view: &GameView<'_>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Inactive,
    Skipped,
    Stepped(StepOutcome),
}

/// Fixed-rate stepping on top of a per-frame callback.
///
/// At most one frame request is outstanding, and at most one step runs per
/// frame.
#[derive(Debug, Default)]
pub struct LoopDriver {
    pending_frame: Option<FrameHandle>,
    last_step_at: Option<Duration>,
}

impl LoopDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<S: FrameScheduler>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.last_step_at = None;
        self.pending_frame = Some(scheduler.request_frame());
    }

    pub fn pump_events<S: FrameScheduler>(
        &mut self,
        session: &mut SnakeSession,
        scheduler: &mut S,
    ) -> bool {
        let restarted = session.drain_events();
        if restarted {
            self.start(scheduler);
        }
        restarted
    }

    pub fn on_frame<S: FrameScheduler, R: RenderSink>(
        &mut self,
        now: Duration,
        session: &mut SnakeSession,
        scheduler: &mut S,
        sink: &mut R,
    ) -> FrameOutcome {
        // The request that produced this frame is consumed.
        self.pending_frame = None;
        self.pump_events(session, scheduler);

        if session.run_state() != RunState::Running {
            return FrameOutcome::Inactive;
        }

        if self.pending_frame.is_none() {
            self.pending_frame = Some(scheduler.request_frame());
        }

        let interval = session.settings().tick_interval();
        let due = match self.last_step_at {
            Some(last) => now.saturating_sub(last) >= interval,
            None => true,
        };

        let outcome = if due {
            self.last_step_at = Some(now);
            FrameOutcome::Stepped(session.step())
        } else {
            FrameOutcome::Skipped
        };

        if let Some(view) = session.view() {
            sink.render(&view);
        }
        outcome
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::snake::{DeathReason, GameEvent, GameMode, Point, SnakeGameSettings};
    use crate::storage::{MemoryStore, ProfileStore};

    #[derive(Default)]
    struct ManualScheduler {
        next: FrameHandle,
        outstanding: Vec<FrameHandle>,
        cancelled: Vec<FrameHandle>,
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) -> FrameHandle {
            self.next += 1;
            self.outstanding.push(self.next);
            self.next
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            self.outstanding.retain(|h| *h != handle);
            self.cancelled.push(handle);
        }
    }

    impl ManualScheduler {
        fn fire(&mut self) -> Option<FrameHandle> {
            if self.outstanding.is_empty() {
                None
            } else {
                Some(self.outstanding.remove(0))
            }
        }
    }

    #[derive(Default)]
    struct CountingSink {
        frames: usize,
        last_score: u32,
        last_run_state: Option<RunState>,
    }

    impl RenderSink for CountingSink {
        fn render(&mut self, view: &GameView<'_>) {
            self.frames += 1;
            self.last_score = view.score;
            self.last_run_state = Some(view.run_state);
        }
    }

    fn started_session(mode: GameMode) -> (SnakeSession, LoopDriver, ManualScheduler) {
        let settings = SnakeGameSettings {
            board_tiles: 10,
            moves_per_second: 10.0,
            mode,
        };
        let mut session = SnakeSession::new(
            settings,
            ProfileStore::new(Box::new(MemoryStore::new())),
            SessionRng::new(9),
        );
        let mut driver = LoopDriver::new();
        let mut scheduler = ManualScheduler::default();
        session.push_event(GameEvent::Restart);
        driver.pump_events(&mut session, &mut scheduler);
        session.state_mut().unwrap().set_food(Point::new(0, 0));
        (session, driver, scheduler)
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_idle_session_does_nothing() {
        let mut session = SnakeSession::new(
            SnakeGameSettings::default(),
            ProfileStore::new(Box::new(MemoryStore::new())),
            SessionRng::new(1),
        );
        let mut driver = LoopDriver::new();
        let mut scheduler = ManualScheduler::default();
        let mut sink = CountingSink::default();
        let outcome = driver.on_frame(ms(0), &mut session, &mut scheduler, &mut sink);
        assert_eq!(outcome, FrameOutcome::Inactive);
        assert_eq!(sink.frames, 0);
        assert!(!driver.has_pending_frame());
    }

    #[test]
    fn test_first_frame_steps_then_waits_for_interval() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Bounded);
        let mut sink = CountingSink::default();

        let outcome = driver.on_frame(ms(1000), &mut session, &mut scheduler, &mut sink);
        assert_eq!(outcome, FrameOutcome::Stepped(StepOutcome::Moved));

        for t in [1016, 1033, 1050, 1083] {
            let outcome = driver.on_frame(ms(t), &mut session, &mut scheduler, &mut sink);
            assert_eq!(outcome, FrameOutcome::Skipped);
        }

        let outcome = driver.on_frame(ms(1100), &mut session, &mut scheduler, &mut sink);
        assert_eq!(outcome, FrameOutcome::Stepped(StepOutcome::Moved));
        assert_eq!(sink.frames, 6);
        assert_eq!(session.state().unwrap().head(), Point::new(8, 5));
    }

    #[test]
    fn test_each_frame_requests_exactly_one_more() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Portal);
        let mut sink = CountingSink::default();
        for frame in 0..20u64 {
            assert!(scheduler.fire().is_some());
            driver.on_frame(ms(frame * 16), &mut session, &mut scheduler, &mut sink);
            assert_eq!(scheduler.outstanding.len(), 1);
        }
    }

    #[test]
    fn test_game_over_stops_requesting_frames() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Bounded);
        let mut sink = CountingSink::default();
        let mut now = 0;
        let mut outcomes = Vec::new();
        while scheduler.fire().is_some() {
            now += 100;
            outcomes.push(driver.on_frame(ms(now), &mut session, &mut scheduler, &mut sink));
        }
        // The frame requested before the fatal step still arrives, then the loop stops.
        assert_eq!(outcomes.len(), 5);
        assert_eq!(
            outcomes[3],
            FrameOutcome::Stepped(StepOutcome::Died(DeathReason::WallCollision))
        );
        assert_eq!(outcomes[4], FrameOutcome::Inactive);
        assert_eq!(sink.last_run_state, Some(RunState::Over));
        assert!(!driver.has_pending_frame());
        assert!(scheduler.outstanding.is_empty());
    }

    #[test]
    fn test_restart_cancels_outstanding_frame() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Bounded);
        let first = driver.pending_frame().unwrap();

        session.push_event(GameEvent::Restart);
        assert!(driver.pump_events(&mut session, &mut scheduler));

        assert_eq!(scheduler.cancelled, vec![first]);
        assert_eq!(scheduler.outstanding.len(), 1);
        assert_ne!(driver.pending_frame(), Some(first));
    }

    #[test]
    fn test_restart_inside_frame_keeps_single_request() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Bounded);
        let mut sink = CountingSink::default();
        scheduler.fire();
        session.push_event(GameEvent::Restart);
        let outcome = driver.on_frame(ms(500), &mut session, &mut scheduler, &mut sink);
        assert!(matches!(outcome, FrameOutcome::Stepped(_)));
        assert_eq!(scheduler.outstanding.len(), 1);
    }

    #[test]
    fn test_restart_from_over_resumes_loop() {
        let (mut session, mut driver, mut scheduler) = started_session(GameMode::Bounded);
        let mut sink = CountingSink::default();
        let mut now = 0;
        while scheduler.fire().is_some() {
            now += 100;
            driver.on_frame(ms(now), &mut session, &mut scheduler, &mut sink);
        }
        assert_eq!(session.run_state(), RunState::Over);

        session.push_event(GameEvent::Restart);
        driver.pump_events(&mut session, &mut scheduler);
        assert_eq!(session.run_state(), RunState::Running);
        assert!(scheduler.fire().is_some());
        let outcome = driver.on_frame(ms(now + 16), &mut session, &mut scheduler, &mut sink);
        assert!(matches!(outcome, FrameOutcome::Stepped(_)));
        assert_eq!(sink.last_run_state, Some(RunState::Running));
        assert!(sink.last_score <= 1);
    }
}
