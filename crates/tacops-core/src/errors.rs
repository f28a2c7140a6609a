//! Command rejection reasons.
//!
//! Every "failure" in the simulation is a policy rejection, not an error:
//! the game loop swallows these silently (the reference behavior), but
//! they are returned from `apply_command` so tests can observe exactly
//! why a command was a no-op.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("command is only valid while playing")]
    NotPlaying,
    #[error("a session can only start from the menu")]
    NotInMenu,
    #[error("already in the menu")]
    AlreadyInMenu,
    #[error("weapon is still cycling")]
    FireCooldown,
    #[error("magazine is empty")]
    OutOfAmmo,
    #[error("reload in progress")]
    Reloading,
    #[error("magazine is already full")]
    AmmoFull,
    #[error("melee weapon cannot be reloaded")]
    MeleeReload,
    #[error("aim point is beyond melee range")]
    MeleeOutOfRange,
    #[error("a revive is already in progress")]
    ReviveBusy,
    #[error("no ally with that id")]
    UnknownAlly,
    #[error("ally is not downed")]
    AllyNotDowned,
    #[error("squad support is disabled for this session")]
    SquadDisabled,
}
