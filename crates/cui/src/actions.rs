use crate::app::App;
use crate::input::InputAction;
use skirmish_core::AttackMode;
use std::time::Instant;

const TIME_STEP: i64 = 5;

pub fn dispatch(app: &mut App, action: InputAction, now: Instant) {
    if app.show_help && !matches!(action, InputAction::None | InputAction::Quit) {
        app.show_help = false;
        return;
    }
    if app.result_visible() && matches!(action, InputAction::Cancel | InputAction::Activate) {
        app.dismiss_result();
        return;
    }
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = true,
        InputAction::Cancel => app.cancel_attack(),
        InputAction::Activate => {
            if app.attack.is_open() {
                app.confirm_attack(now);
            } else {
                app.open_attack(now);
            }
        }
        InputAction::PrevCard => app.move_hand_cursor(false),
        InputAction::NextCard => app.move_hand_cursor(true),
        InputAction::ToggleSelect => app.toggle_hand_selection(),
        InputAction::OpenAttack => app.open_attack(now),
        InputAction::HealthMode => app.set_mode(AttackMode::Health),
        InputAction::UnitMode => app.set_mode(AttackMode::Unit),
        InputAction::ToggleMode => app.toggle_mode(),
        InputAction::PrevTarget => app.cycle_target(false),
        InputAction::NextTarget => app.cycle_target(true),
        InputAction::Sacrifice => app.request_sacrifice(),
        InputAction::NextPhase => app.next_phase(),
        InputAction::ExtendTime => app.adjust_turn_time(TIME_STEP),
        InputAction::ShortenTime => app.adjust_turn_time(-TIME_STEP),
    }
}
