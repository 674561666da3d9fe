//! The companion's per-tick state machine.

use glam::Vec2;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::state::{CollisionOutcome, CompanionState, IgnoreReason};
use super::tasks::{AttackTimer, Knockback, KnockbackStep};
use crate::config::{CompanionConfig, ConfigError, Tuning};
use crate::entity::{Contact, EntityId, EntityTag};
use crate::host::{CompanionHost, Cue};
use crate::numeric::draw_order_for;
use crate::vector_math::{direction_towards, is_flipped, within_radius, within_radius_squared};

/// AI controller for a single companion entity.
///
/// The controller owns its host and advances once per [`tick`](Self::tick).
/// Contacts reported by the host's physics go through
/// [`on_collision`](Self::on_collision).
#[derive(Debug, Clone)]
pub struct CompanionController<H, R = ChaCha8Rng> {
    host: H,
    rng: R,
    tuning: Tuning,
    position: Vec2,
    state: CompanionState,
    resume_state: CompanionState,
    current_life: u32,
    target: Option<EntityId>,
    attack: Option<AttackTimer>,
    knockback: Option<Knockback>,
    frame: u64,
    contact_frame: Option<u64>,
    game_over_sent: bool,
}

impl<H: CompanionHost> CompanionController<H, ChaCha8Rng> {
    /// Creates a controller whose target choices are driven by a
    /// `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Errors
    /// See [`CompanionController::new`].
    pub fn seeded(
        config: &CompanionConfig,
        position: Vec2,
        host: H,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::new(config, position, host, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<H: CompanionHost, R: Rng> CompanionController<H, R> {
    /// Spawns a companion at `position` in the idle state with full life.
    ///
    /// The configuration is scaled once by the host's unit scale.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the unit scale or a tunable is invalid.
    pub fn new(
        config: &CompanionConfig,
        position: Vec2,
        host: H,
        rng: R,
    ) -> Result<Self, ConfigError> {
        let tuning = config.scaled(host.unit_scale())?;
        debug!("companion spawned at {position:?} with {tuning:?}");
        Ok(Self {
            host,
            rng,
            tuning,
            position,
            state: CompanionState::Idle,
            resume_state: CompanionState::Idle,
            current_life: tuning.max_life,
            target: None,
            attack: None,
            knockback: None,
            frame: 0,
            contact_frame: None,
            game_over_sent: false,
        })
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Active state.
    #[must_use]
    pub const fn state(&self) -> CompanionState {
        self.state
    }

    /// Remaining life.
    #[must_use]
    pub const fn current_life(&self) -> u32 {
        self.current_life
    }

    /// Life at spawn.
    #[must_use]
    pub const fn max_life(&self) -> u32 {
        self.tuning.max_life
    }

    /// Handle of the bound hostile, if any. May be stale.
    #[must_use]
    pub const fn target(&self) -> Option<EntityId> {
        self.target
    }

    /// Whether the attack sub-behaviour is in flight.
    #[must_use]
    pub const fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    /// Whether a knockback is in flight.
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        self.knockback.is_some()
    }

    /// `false` once the companion has died.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != CompanionState::Death
    }

    /// Tunables in world units.
    #[must_use]
    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The injected host.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the injected host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Advances the companion by one frame and returns the resulting state.
    ///
    /// In-flight sub-behaviours are advanced first. While a knockback is in
    /// flight the main switch makes no decisions. Nothing but the draw order
    /// is evaluated while gameplay is inactive, and a dead companion does
    /// nothing at all.
    pub fn tick(&mut self) -> CompanionState {
        if self.state == CompanionState::Death {
            return self.state;
        }
        self.frame += 1;

        if self.host.is_gameplay_active() {
            let dt = self.host.delta_time().max(0.0);
            let knocked_back = self.knockback.is_some();
            self.advance_attack(dt);
            if knocked_back {
                self.advance_knockback(dt);
            } else {
                self.run_state(dt);
            }
        }

        self.host.set_draw_order(draw_order_for(self.position.y));
        self.state
    }

    /// Reacts to the companion touching another entity.
    ///
    /// Touching the bound target while chasing starts an attack; touching any
    /// other hostile starts a hit. Only the first effective contact of a tick
    /// is processed.
    pub fn on_collision(&mut self, contact: Contact) -> CollisionOutcome {
        if self.state == CompanionState::Death {
            return CollisionOutcome::Ignored(IgnoreReason::Dead);
        }
        if !self.host.is_gameplay_active() {
            return CollisionOutcome::Ignored(IgnoreReason::Paused);
        }
        if contact.tag != EntityTag::Hostile {
            return CollisionOutcome::Ignored(IgnoreReason::NotHostile);
        }
        if self.contact_frame == Some(self.frame) {
            return CollisionOutcome::Ignored(IgnoreReason::AlreadyProcessed);
        }

        if self.state == CompanionState::Chase && self.target == Some(contact.entity) {
            self.contact_frame = Some(self.frame);
            self.transition(CompanionState::Attack);
            self.host.emit(Cue::Attack);
            return CollisionOutcome::Attack(contact.entity);
        }

        if self.knockback.is_some() {
            return CollisionOutcome::Ignored(IgnoreReason::Busy);
        }
        self.contact_frame = Some(self.frame);
        self.begin_hit(contact)
    }

    fn run_state(&mut self, dt: f32) {
        match self.state {
            CompanionState::Idle => {
                if self.acquire_target() {
                    self.transition(CompanionState::Chase);
                } else if !self.is_near_owner() {
                    self.transition(CompanionState::Follow);
                } else {
                    self.host.emit(Cue::Idle);
                }
            }
            CompanionState::Follow => {
                if self.acquire_target() {
                    self.transition(CompanionState::Chase);
                } else if self.is_near_owner() {
                    self.transition(CompanionState::Idle);
                } else {
                    let owner = self.host.owner_position();
                    self.move_towards(owner, dt);
                }
            }
            CompanionState::Chase => {
                self.acquire_target();
                if let Some(goal) = self.near_target_position() {
                    self.move_towards(goal, dt);
                } else {
                    debug!("companion lost target {:?}", self.target);
                    self.target = None;
                    self.transition(CompanionState::Idle);
                }
            }
            CompanionState::Attack => {
                if self.attack.is_none() {
                    self.attack = Some(AttackTimer::new(self.tuning.attack_delay));
                }
            }
            CompanionState::Hit | CompanionState::Death => {}
        }
    }

    /// Picks a random hostile within the chase radius, if any.
    fn acquire_target(&mut self) -> bool {
        let hits = self.host.overlap_circle(
            self.position,
            self.tuning.chase_radius,
            EntityTag::Hostile,
        );
        let Some(&picked) = hits.choose(&mut self.rng) else {
            return false;
        };
        if self.target != Some(picked) {
            debug!("companion targeting {picked:?} out of {} hostiles", hits.len());
        }
        self.target = Some(picked);
        true
    }

    fn is_near_owner(&self) -> bool {
        within_radius_squared(
            self.position,
            self.host.owner_position(),
            self.tuning.idle_radius,
        )
    }

    /// Position of the bound target while it is active and within the chase
    /// radius plus hysteresis.
    fn near_target_position(&self) -> Option<Vec2> {
        let goal = self.host.locate(self.target?)?;
        let reach = self.tuning.chase_radius + self.tuning.chase_hysteresis;
        within_radius(goal, self.position, reach).then_some(goal)
    }

    fn move_towards(&mut self, goal: Vec2, dt: f32) {
        let direction = direction_towards(self.position, goal);
        let delta = direction * self.tuning.speed * dt;
        self.apply_motion(delta);
        self.host.set_facing(is_flipped(direction));
        self.host.emit(Cue::Move {
            speed: delta.length(),
        });
    }

    fn apply_motion(&mut self, delta: Vec2) {
        self.host.translate(delta);
        self.position += delta;
    }

    fn advance_attack(&mut self, dt: f32) {
        let Some(timer) = self.attack.as_mut() else {
            return;
        };
        if !timer.advance(dt) {
            return;
        }
        self.attack = None;
        match self.state {
            CompanionState::Attack => self.transition(CompanionState::Idle),
            CompanionState::Hit => self.resume_state = CompanionState::Idle,
            _ => {}
        }
    }

    fn begin_hit(&mut self, contact: Contact) -> CollisionOutcome {
        self.current_life = self.current_life.saturating_sub(1);
        debug!(
            "companion hit by {:?}, life {}/{}",
            contact.entity, self.current_life, self.tuning.max_life
        );
        self.host.emit(Cue::Hit);
        self.resume_state = self.state;
        self.transition(CompanionState::Hit);
        self.knockback = Some(Knockback::new(
            contact.normal,
            self.tuning.hit_displacement,
        ));
        let life = self.current_life;
        let dt = self.host.delta_time().max(0.0);
        self.advance_knockback(dt);
        CollisionOutcome::Hit {
            by: contact.entity,
            life,
        }
    }

    fn advance_knockback(&mut self, dt: f32) {
        let Some(knockback) = self.knockback.as_mut() else {
            return;
        };
        let speed = self.tuning.speed * self.tuning.knockback_speed_factor;
        match knockback.step(speed, dt) {
            KnockbackStep::Moved(delta) => self.apply_motion(delta),
            KnockbackStep::Finished => {
                self.knockback = None;
                if self.current_life == 0 {
                    self.die();
                } else {
                    self.transition(self.resume_state);
                }
            }
        }
    }

    fn die(&mut self) {
        self.transition(CompanionState::Death);
        self.target = None;
        self.attack = None;
        self.host.emit(Cue::Death);
        if !self.game_over_sent {
            self.game_over_sent = true;
            info!("companion died at {:?}", self.position);
            self.host.notify_game_over();
        }
    }

    fn transition(&mut self, next: CompanionState) {
        if self.state != next {
            debug!("companion {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
