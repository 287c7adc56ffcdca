use common::games::snake::{Direction, GameEvent, InputKey, RunState, SwipeTracker, translate_key};
use eframe::egui;

const KEY_MAP: [(egui::Key, InputKey); 11] = [
    (egui::Key::ArrowUp, InputKey::ArrowUp),
    (egui::Key::ArrowDown, InputKey::ArrowDown),
    (egui::Key::ArrowLeft, InputKey::ArrowLeft),
    (egui::Key::ArrowRight, InputKey::ArrowRight),
    (egui::Key::Space, InputKey::Space),
    (egui::Key::W, InputKey::Char('w')),
    (egui::Key::A, InputKey::Char('a')),
    (egui::Key::S, InputKey::Char('s')),
    (egui::Key::D, InputKey::Char('d')),
    (egui::Key::Z, InputKey::Char('z')),
    (egui::Key::Q, InputKey::Char('q')),
];

/// Key presses of this frame, in arrival order.
pub fn keyboard_events(ctx: &egui::Context, run_state: RunState) -> Vec<GameEvent> {
    ctx.input(|i| translate_key_events(&i.events, run_state))
}

fn translate_key_events(events: &[egui::Event], run_state: RunState) -> Vec<GameEvent> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => KEY_MAP
                .iter()
                .find(|(mapped, _)| mapped == key)
                .map(|(_, input)| *input),
            _ => None,
        })
        .filter_map(|input| translate_key(input, run_state))
        .collect()
}

/// Feeds a drag on the board into the swipe tracker.
pub fn swipe_direction(response: &egui::Response, swipe: &mut SwipeTracker) -> Option<Direction> {
    if response.drag_started()
        && let Some(pos) = response.interact_pointer_pos()
    {
        swipe.begin(pos.x, pos.y);
    }

    let direction = if response.dragged() {
        response
            .interact_pointer_pos()
            .and_then(|pos| swipe.moved(pos.x, pos.y))
    } else {
        None
    };

    if response.drag_stopped() {
        swipe.end();
    }
    direction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, pressed: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_keys_follow_arrival_order() {
        let events = [
            key_event(egui::Key::ArrowDown, true),
            key_event(egui::Key::ArrowUp, true),
        ];
        assert_eq!(
            translate_key_events(&events, RunState::Running),
            vec![
                GameEvent::Turn(Direction::Down),
                GameEvent::Turn(Direction::Up)
            ]
        );

        let events = [key_event(egui::Key::D, true), key_event(egui::Key::W, true)];
        assert_eq!(
            translate_key_events(&events, RunState::Running),
            vec![
                GameEvent::Turn(Direction::Right),
                GameEvent::Turn(Direction::Up)
            ]
        );
    }

    #[test]
    fn test_releases_and_unmapped_keys_are_ignored() {
        let events = [
            key_event(egui::Key::ArrowLeft, false),
            key_event(egui::Key::X, true),
            egui::Event::Text("a".to_string()),
            key_event(egui::Key::Space, true),
        ];
        assert!(translate_key_events(&events, RunState::Running).is_empty());
        assert_eq!(
            translate_key_events(&events, RunState::Over),
            vec![GameEvent::Restart]
        );
    }
}
