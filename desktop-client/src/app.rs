use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider};
use common::games::snake::{
    Direction, FrameOutcome, GameEvent, GameMode, LoopDriver, MAX_BOARD_TILES,
    MAX_MOVES_PER_SECOND, MIN_BOARD_TILES, MIN_MOVES_PER_SECOND, RenderSink, RunState,
    SnakeGameSettings, SnakeSession, SwipeTracker,
};
use common::{debug_log, log};
use eframe::egui;

use crate::config::Config;
use crate::frame_scheduler::EguiFrameScheduler;
use crate::ui::{BoardPainter, THEME_NAMES, Theme, keyboard_events, swipe_direction};

pub struct SnakeApp {
    session: SnakeSession,
    driver: LoopDriver,
    scheduler: EguiFrameScheduler,
    swipe: SwipeTracker,
    theme: Theme,
    draft_settings: SnakeGameSettings,
    config_manager: ConfigManager<FileContentConfigProvider, Config>,
}

impl SnakeApp {
    pub fn new(
        ctx: egui::Context,
        session: SnakeSession,
        config_manager: ConfigManager<FileContentConfigProvider, Config>,
    ) -> Self {
        let theme = Theme::by_name(&session.profile().theme());
        let draft_settings = *session.settings();
        let mut app = Self {
            session,
            driver: LoopDriver::new(),
            scheduler: EguiFrameScheduler::new(ctx),
            swipe: SwipeTracker::default(),
            theme,
            draft_settings,
            config_manager,
        };
        app.session.push_event(GameEvent::Restart);
        app.driver.pump_events(&mut app.session, &mut app.scheduler);
        app
    }

    fn save_game_settings(&self, settings: SnakeGameSettings) {
        if let Err(e) = self.config_manager.update(|config| config.game = settings) {
            log!("Failed to save settings: {}", e);
        }
    }

    fn change_mode(&mut self, mode: GameMode) {
        self.session.push_event(GameEvent::ChangeMode(mode));
        self.draft_settings.mode = mode;
        let settings = SnakeGameSettings {
            mode,
            ..*self.session.settings()
        };
        self.save_game_settings(settings);
    }

    fn change_theme(&mut self, name: &str) {
        self.theme = Theme::by_name(name);
        self.session.profile().save_theme(self.theme.name);
        debug_log!("Theme set to {}", self.theme.name);
    }

    fn render_hud(&mut self, ui: &mut egui::Ui) {
        let (score, best) = match self.session.view() {
            Some(view) => (view.score, view.best_score),
            None => (0, self.session.best_score()),
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("Score: {}", score)).size(18.0));
            ui.separator();
            ui.label(egui::RichText::new(format!("Best: {}", best)).size(18.0));
            ui.separator();

            let current_mode = self.session.settings().mode;
            let mut mode = current_mode;
            egui::ComboBox::from_label("Mode")
                .selected_text(mode.label())
                .show_ui(ui, |ui| {
                    for option in [GameMode::Bounded, GameMode::Portal] {
                        ui.selectable_value(&mut mode, option, option.label());
                    }
                });
            if mode != current_mode {
                self.change_mode(mode);
            }

            let current_theme = self.theme.name;
            let mut theme_name = current_theme;
            egui::ComboBox::from_label("Theme")
                .selected_text(theme_name)
                .show_ui(ui, |ui| {
                    for option in THEME_NAMES {
                        ui.selectable_value(&mut theme_name, option, option);
                    }
                });
            if theme_name != current_theme {
                self.change_theme(theme_name);
            }

            if ui.button("🔄 Restart").clicked() {
                self.session.push_event(GameEvent::Restart);
            }
        });

        ui.collapsing("Settings", |ui| {
            ui.add(
                egui::Slider::new(
                    &mut self.draft_settings.board_tiles,
                    MIN_BOARD_TILES..=MAX_BOARD_TILES,
                )
                .text("Board tiles"),
            );
            ui.add(
                egui::Slider::new(
                    &mut self.draft_settings.moves_per_second,
                    MIN_MOVES_PER_SECOND..=MAX_MOVES_PER_SECOND,
                )
                .text("Moves per second"),
            );
            if ui.button("Apply and restart").clicked() {
                let settings = self.draft_settings.sanitized();
                self.session.push_event(GameEvent::Reconfigure(settings));
                self.save_game_settings(settings);
            }
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut pressed = None;
        ui.vertical_centered(|ui| {
            if ui.button("⬆").clicked() {
                pressed = Some(Direction::Up);
            }
            ui.horizontal(|ui| {
                if ui.button("⬅").clicked() {
                    pressed = Some(Direction::Left);
                }
                if ui.button("⬇").clicked() {
                    pressed = Some(Direction::Down);
                }
                if ui.button("➡").clicked() {
                    pressed = Some(Direction::Right);
                }
            });
            let hint = match self.session.run_state() {
                RunState::Over => "Space to play again",
                _ => "Arrows, WASD/ZQSD or swipe on the board",
            };
            ui.label(egui::RichText::new(hint).small().color(egui::Color32::GRAY));
        });

        if let Some(direction) = pressed {
            self.session.push_event(GameEvent::Turn(direction));
        }
    }

    fn render_board(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let side = ui.available_width().min(ui.available_height()).max(100.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::drag());

        if let Some(direction) = swipe_direction(&response, &mut self.swipe) {
            self.session.push_event(GameEvent::Turn(direction));
        }
        self.driver.pump_events(&mut self.session, &mut self.scheduler);

        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        let mut board = BoardPainter::new(&painter, response.rect, &self.theme);
        let outcome = match self.scheduler.take_due() {
            Some(_) => self
                .driver
                .on_frame(now, &mut self.session, &mut self.scheduler, &mut board),
            None => FrameOutcome::Inactive,
        };

        // egui redraws from scratch every update, so paint even when the loop is parked.
        if outcome == FrameOutcome::Inactive {
            match self.session.view() {
                Some(view) => board.render(&view),
                None => board.render_idle(self.session.settings().board_tiles),
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for event in keyboard_events(ctx, self.session.run_state()) {
            self.session.push_event(event);
        }

        egui::TopBottomPanel::top("hud").show(ctx, |ui| self.render_hud(ui));
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| self.render_controls(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| self.render_board(ui, ctx));
        });
    }
}
