//! Companion AI: a per-tick state machine with perception, target
//! acquisition, attacks and knockback.
//!
//! The controller cycles through idle, follow and chase based on distances to
//! its owner and to hostiles found by overlap queries. Contacts either start a
//! timed attack on the bound target or a knockback that costs one life. The
//! timed sub-behaviours are plain task records advanced by the same tick, so
//! no coroutine support is needed from the host.

mod controller;
mod state;
mod tasks;


pub use controller::CompanionController;
pub use state::{CollisionOutcome, CompanionState, IgnoreReason};
