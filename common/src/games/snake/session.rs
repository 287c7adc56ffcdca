use std::collections::VecDeque;

use crate::games::SessionRng;
use crate::log;
use crate::storage::ProfileStore;
use super::game_state::SnakeGameState;
use super::settings::SnakeGameSettings;
use super::types::{DeathReason, Direction, GameMode, Point, RunState, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    Turn(Direction),
    Restart,
    ChangeMode(GameMode),
    Reconfigure(SnakeGameSettings),
}

#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub chain: &'a VecDeque<Point>,
    pub food: Point,
    pub score: u32,
    pub best_score: u32,
    pub board_tiles: u32,
    pub run_state: RunState,
    pub mode: GameMode,
    pub death_reason: Option<DeathReason>,
}

pub struct SnakeSession {
    settings: SnakeGameSettings,
    state: Option<SnakeGameState>,
    rng: SessionRng,
    profile: ProfileStore,
    best_score: u32,
    events: VecDeque<GameEvent>,
}

impl SnakeSession {
    pub fn new(settings: SnakeGameSettings, profile: ProfileStore, rng: SessionRng) -> Self {
        let best_score = profile.best_score();
        Self {
            settings: settings.sanitized(),
            state: None,
            rng,
            profile,
            best_score,
            events: VecDeque::new(),
        }
    }

    pub fn start(&mut self) {
        let grid = self.settings.grid();
        log!(
            "Starting {}x{} {} game at {} moves/s (seed {})",
            grid.tiles(),
            grid.tiles(),
            self.settings.mode.label(),
            self.settings.moves_per_second,
            self.rng.seed()
        );
        self.state = Some(SnakeGameState::new(grid, self.settings.mode, &mut self.rng));
    }

    pub fn restart_with(&mut self, settings: SnakeGameSettings) {
        self.settings = settings.sanitized();
        self.start();
    }

    pub fn set_direction(&mut self, direction: Direction) -> bool {
        match self.state.as_mut() {
            Some(state) => state.set_pending_direction(direction),
            None => false,
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Applies queued events. Returns whether a new round was started.
    pub fn drain_events(&mut self) -> bool {
        let mut restarted = false;
        while let Some(event) = self.events.pop_front() {
            match event {
                GameEvent::Turn(direction) => {
                    self.set_direction(direction);
                }
                GameEvent::Restart => {
                    self.start();
                    restarted = true;
                }
                GameEvent::ChangeMode(mode) => {
                    let settings = SnakeGameSettings {
                        mode,
                        ..self.settings
                    };
                    self.restart_with(settings);
                    restarted = true;
                }
                GameEvent::Reconfigure(settings) => {
                    self.restart_with(settings);
                    restarted = true;
                }
            }
        }
        restarted
    }

    pub fn step(&mut self) -> StepOutcome {
        let Some(state) = self.state.as_mut() else {
            return StepOutcome::NotRunning;
        };

        let outcome = state.step(&mut self.rng);
        if let StepOutcome::Ate { score } = outcome
            && score > self.best_score
        {
            self.best_score = score;
            self.profile.save_best_score(score);
            log!("New best score: {}", score);
        }
        outcome
    }

    pub fn run_state(&self) -> RunState {
        self.state
            .as_ref()
            .map_or(RunState::Idle, |state| state.run_state())
    }

    pub fn view(&self) -> Option<GameView<'_>> {
        let state = self.state.as_ref()?;
        Some(GameView {
            chain: state.chain(),
            food: state.food(),
            score: state.score(),
            best_score: self.best_score,
            board_tiles: state.grid().tiles(),
            run_state: state.run_state(),
            mode: state.mode(),
            death_reason: state.death_reason(),
        })
    }

    pub fn state(&self) -> Option<&SnakeGameState> {
        self.state.as_ref()
    }

    pub fn settings(&self) -> &SnakeGameSettings {
        &self.settings
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut SnakeGameState> {
        self.state.as_mut()
    }
}
