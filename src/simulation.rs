//! Frame driver tying the owner, the arena and the companion together.

use glam::Vec2;
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::arena::Arena;
use crate::companion::{CollisionOutcome, CompanionController, CompanionState};
use crate::config::{ConfigError, GameConfig};
use crate::host::{Clock, Cue, Environment};
use crate::owner::{OwnerController, OwnerInput, Shot};
use crate::session::GameSession;

/// Radius within which the companion touches another entity.
pub const DEFAULT_CONTACT_RADIUS: f32 = 0.25;

/// Summary of one simulated frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Companion state after the frame.
    pub state: CompanionState,
    /// Companion life after the frame.
    pub life: u32,
    /// Shot fired by the owner, if any.
    pub shot: Option<Shot>,
    /// Result of the contact dispatched this frame, if any.
    pub contact: Option<CollisionOutcome>,
    /// Cues the companion emitted during the frame, drained from the arena.
    pub cues: Vec<Cue>,
}

/// Headless match: one owner, one companion and the arena's hostiles.
#[derive(Debug)]
pub struct Simulation<R = ChaCha8Rng> {
    companion: CompanionController<Arena, R>,
    owner: OwnerController,
    contact_radius: f32,
    hostile_speed: f32,
    frame: u64,
}

impl<R: Rng> Simulation<R> {
    /// Builds a match from `config`, spawning the companion on the owner.
    ///
    /// The arena gets a fresh gameplay session with the configured settings.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for invalid configuration or unit scale.
    pub fn new(config: &GameConfig, mut arena: Arena, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let owner = OwnerController::new(arena.owner_position(), config.owner.clone());
        arena.set_owner_position(owner.position());

        let spawn = owner.position();
        let host = arena
            .with_session(GameSession::new(config.settings.clone()))
            .with_companion_at(spawn);
        let companion = CompanionController::new(&config.companion, spawn, host, rng)?;
        Ok(Self {
            companion,
            owner,
            contact_radius: DEFAULT_CONTACT_RADIUS,
            hostile_speed: 0.0,
            frame: 0,
        })
    }

    /// Overrides the distance at which the companion touches other entities.
    #[must_use]
    pub fn with_contact_radius(mut self, radius: f32) -> Self {
        self.contact_radius = radius;
        self
    }

    /// Makes hostiles walk towards the owner at `speed` units per second.
    #[must_use]
    pub fn with_hostile_speed(mut self, speed: f32) -> Self {
        self.hostile_speed = speed;
        self
    }

    /// The companion.
    #[must_use]
    pub const fn companion(&self) -> &CompanionController<Arena, R> {
        &self.companion
    }

    /// The owner.
    #[must_use]
    pub const fn owner(&self) -> &OwnerController {
        &self.owner
    }

    /// The arena.
    #[must_use]
    pub const fn arena(&self) -> &Arena {
        self.companion.host()
    }

    /// Mutable access to the arena.
    pub fn arena_mut(&mut self) -> &mut Arena {
        self.companion.host_mut()
    }

    /// Frames simulated so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frame
    }

    /// Runs one frame.
    ///
    /// The owner moves first, hostiles close in, the companion ticks and then
    /// at most one new contact is dispatched. Reaching the bound target
    /// deactivates it. Cues recorded by the arena are handed back in the
    /// frame, so the arena never accumulates them.
    pub fn step(&mut self, input: &OwnerInput) -> Frame {
        self.frame += 1;
        let arena = self.companion.host_mut();
        let active = arena.session().is_gameplay_active();
        let dt = arena.delta_time();

        let shot = if active {
            let settings = arena.session().settings().clone();
            let shot = self.owner.update(input, &settings, dt);
            arena.set_owner_position(self.owner.position());
            arena.move_hostiles_toward(self.owner.position(), self.hostile_speed * dt);
            shot
        } else {
            None
        };

        let before = self.companion.state();
        let state = self.companion.tick();
        if state != before {
            debug!("frame {}: companion {before:?} -> {state:?}", self.frame);
        }

        let position = self.companion.position();
        let contact = self
            .companion
            .host_mut()
            .begin_contact(position, self.contact_radius)
            .map(|contact| self.companion.on_collision(contact));

        if let Some(CollisionOutcome::Attack(target)) = contact {
            if self.companion.host_mut().deactivate(target) {
                info!("frame {}: companion took down {target:?}", self.frame);
            }
        }

        Frame {
            state: self.companion.state(),
            life: self.companion.current_life(),
            shot,
            contact,
            cues: self.companion.host_mut().take_cues(),
        }
    }

    /// Runs frames until the companion dies or `limit` frames have run.
    /// Returns the number of frames run.
    pub fn run(&mut self, limit: u64, mut input: impl FnMut(u64, Vec2) -> OwnerInput) -> u64 {
        let mut ran = 0;
        while ran < limit && self.companion.is_active() {
            let owner_input = input(self.frame, self.owner.position());
            self.step(&owner_input);
            ran += 1;
        }
        ran
    }
}
