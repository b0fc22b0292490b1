use thiserror::Error;

/// Refused session operations. The session state is unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("attack interaction is not open")]
    NotOpen,
    #[error("target is not in the current target set")]
    TargetUnavailable,
    #[error("unit attack needs a selected target")]
    NoTargetSelected,
    #[error("sacrifice is not available")]
    SacrificeUnavailable,
}
