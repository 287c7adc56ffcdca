use std::collections::VecDeque;

use crate::games::SessionRng;
use crate::{debug_log, log};
use super::food::place_food;
use super::grid::Grid;
use super::snake::Snake;
use super::types::{DeathReason, Direction, GameMode, Point, RunState, StepOutcome};

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    snake: Snake,
    direction: Direction,
    pending_direction: Direction,
    food: Point,
    score: u32,
    run_state: RunState,
    death_reason: Option<DeathReason>,
    grid: Grid,
    mode: GameMode,
}

impl SnakeGameState {
    pub fn new(grid: Grid, mode: GameMode, rng: &mut SessionRng) -> Self {
        let center = grid.center();
        let head = Point::new(center.x + 1, center.y);
        let snake = Snake::new(head, Direction::Right);
        let food = place_food(snake.segments(), &grid, rng);

        debug_log!(
            "New round on {}x{} board ({}), food at ({}, {})",
            grid.tiles(),
            grid.tiles(),
            mode.label(),
            food.x,
            food.y
        );

        Self {
            snake,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            food,
            score: 0,
            run_state: RunState::Running,
            death_reason: None,
            grid,
            mode,
        }
    }

    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.run_state != RunState::Running || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn step(&mut self, rng: &mut SessionRng) -> StepOutcome {
        if self.run_state != RunState::Running {
            return StepOutcome::NotRunning;
        }

        self.direction = self.pending_direction;
        let mut next_head = self.snake.head().offset(self.direction);

        match self.mode {
            GameMode::Portal => next_head = self.grid.wrap_point(next_head),
            GameMode::Bounded => {
                if !self.grid.in_bounds(next_head) {
                    return self.end(DeathReason::WallCollision);
                }
            }
        }

        let eating = next_head == self.food;
        // On a growth tick the tail stays put, so its cell still counts.
        let collides = if eating {
            self.snake.contains(&next_head)
        } else {
            self.snake.collides_after_tail_moves(&next_head)
        };
        if collides {
            return self.end(DeathReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if eating {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = place_food(self.snake.segments(), &self.grid, rng);
            StepOutcome::Ate { score: self.score }
        } else {
            self.snake.drop_tail();
            StepOutcome::Moved
        }
    }

    fn end(&mut self, reason: DeathReason) -> StepOutcome {
        self.run_state = RunState::Over;
        self.death_reason = Some(reason);
        log!("Game over: {}. Score: {}", reason.describe(), self.score);
        StepOutcome::Died(reason)
    }

    pub fn chain(&self) -> &VecDeque<Point> {
        self.snake.segments()
    }

    pub fn head(&self) -> Point {
        self.snake.head()
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_chain(&mut self, segments: &[Point], direction: Direction) {
        self.snake = Snake::from_segments(segments.iter().copied());
        self.direction = direction;
        self.pending_direction = direction;
    }
}
