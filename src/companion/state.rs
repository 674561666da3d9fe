//! Companion state and contact outcome types.

use crate::entity::EntityId;

/// The companion's active behaviour. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompanionState {
    /// Near the owner with nothing to chase.
    #[default]
    Idle,
    /// Walking back towards the owner.
    Follow,
    /// Running at the bound hostile.
    Chase,
    /// Attacking the bound hostile for a fixed delay.
    Attack,
    /// Being knocked back after taking damage.
    Hit,
    /// Dead. Terminal.
    Death,
}

/// What a contact did to the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The bound target was reached and the companion attacks it.
    Attack(EntityId),
    /// The companion was hit; carries life remaining after the hit.
    Hit {
        /// The hostile that caused the hit.
        by: EntityId,
        /// Life remaining after the hit.
        life: u32,
    },
    /// The contact had no effect.
    Ignored(IgnoreReason),
}

/// Why a contact was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The companion is dead.
    Dead,
    /// Gameplay is paused.
    Paused,
    /// The touched entity is not hostile.
    NotHostile,
    /// A contact was already processed this tick.
    AlreadyProcessed,
    /// A knockback is already in flight.
    Busy,
}
