#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the gameplay logic of a small 2D arena shooter.
//!
//! The centrepiece is [`CompanionController`], the AI of the dog that follows
//! the player, chases hostiles and reacts to hits. It talks to its
//! environment only through the capability traits in [`host`]; [`Arena`] is
//! an in-memory implementation used by the binary and the tests.
pub mod arena;
pub mod companion;
pub mod config;
pub mod constants;
pub mod entity;
pub mod host;
pub mod logging;
pub mod numeric;
pub mod owner;
pub mod session;
pub mod simulation;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use arena::{Arena, ArenaEntity};
pub use companion::{CollisionOutcome, CompanionController, CompanionState, IgnoreReason};
pub use config::{CompanionConfig, ConfigError, GameConfig, OwnerConfig, Tuning};
pub use entity::{Contact, EntityId, EntityTag};
pub use host::{Clock, CompanionHost, Cue, CueSink, Environment, MotionSink, SpatialQuery};
pub use logging::init as init_logging;
pub use owner::{OwnerController, OwnerInput, Shot};
pub use session::{GameMode, GameSession, GameSettings};
pub use simulation::{Frame, Simulation};
pub use vector_math::{direction_towards, is_flipped, within_radius, within_radius_squared};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use sidekick::prelude::*;
    //!
    //! let arena = Arena::new(0.01, 1.0 / 60.0);
    //! let companion =
    //!     CompanionController::seeded(&CompanionConfig::default(), Vec2::ZERO, arena, 42)
    //!         .expect("default config is valid");
    //! assert_eq!(companion.state(), CompanionState::Idle);
    //! ```

    pub use crate::host::{Clock, Environment, MotionSink, SpatialQuery};
    pub use crate::Arena;
    pub use crate::CompanionConfig;
    pub use crate::CompanionController;
    pub use crate::CompanionState;
    pub use crate::Contact;
    pub use crate::EntityId;
    pub use glam::Vec2;
}
