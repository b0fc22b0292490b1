use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    Cancel,
    Activate,
    PrevCard,
    NextCard,
    ToggleSelect,
    OpenAttack,
    HealthMode,
    UnitMode,
    ToggleMode,
    PrevTarget,
    NextTarget,
    Sacrifice,
    NextPhase,
    ExtendTime,
    ShortenTime,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Esc => InputAction::Cancel,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Tab | KeyCode::BackTab => InputAction::ToggleMode,
        KeyCode::Left => InputAction::PrevCard,
        KeyCode::Right => InputAction::NextCard,
        KeyCode::Up | KeyCode::Char('k') => InputAction::PrevTarget,
        KeyCode::Down | KeyCode::Char('j') => InputAction::NextTarget,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char('a') => InputAction::OpenAttack,
        KeyCode::Char('h') => InputAction::HealthMode,
        KeyCode::Char('u') => InputAction::UnitMode,
        KeyCode::Char('s') => InputAction::Sacrifice,
        KeyCode::Char('n') => InputAction::NextPhase,
        KeyCode::Char('+') | KeyCode::Char('=') => InputAction::ExtendTime,
        KeyCode::Char('-') => InputAction::ShortenTime,
        _ => InputAction::None,
    }
}
