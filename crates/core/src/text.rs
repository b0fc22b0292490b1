use std::borrow::Cow;

/// Fixed keys the attack flow asks the text collaborator for.
pub mod text_keys {
    pub const CHOOSE_ATTACK: &str = "attack.chooseAttack";
    pub const TIME_REMAINING: &str = "game.timeRemaining";
    pub const ATTACK_HEALTH: &str = "attack.attackHealth";
    pub const ATTACK_UNIT: &str = "attack.attackUnit";
    pub const SELECT_TARGET: &str = "attack.selectTarget";
    pub const NO_VALID_TARGETS: &str = "attack.noValidTargets";
    pub const DAMAGE_POINTS: &str = "game.damagePoints";
    pub const CANCEL: &str = "game.ui.cancel";
    pub const CONFIRM: &str = "game.ui.confirm";
    pub const SUCCESS: &str = "attack.success";
    pub const BLOCKED: &str = "attack.blocked";
    pub const BLOCKED_MESSAGE: &str = "attack.blockedMessage";
    pub const HEALTH: &str = "game.health";
    pub const SACRIFICE_TITLE: &str = "game.sacrifice.title";
    pub const SACRIFICE_LABEL: &str = "game.sacrifice.label";

    pub const ALL: [&str; 15] = [
        CHOOSE_ATTACK,
        TIME_REMAINING,
        ATTACK_HEALTH,
        ATTACK_UNIT,
        SELECT_TARGET,
        NO_VALID_TARGETS,
        DAMAGE_POINTS,
        CANCEL,
        CONFIRM,
        SUCCESS,
        BLOCKED,
        BLOCKED_MESSAGE,
        HEALTH,
        SACRIFICE_TITLE,
        SACRIFICE_LABEL,
    ];
}

/// Key to display string. Unresolved keys come back unchanged.
pub trait TextLookup {
    fn text<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl TextLookup for PassThrough {
    fn text<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}
