//! In-memory arena implementing every host capability.
//!
//! The arena stores tagged entities, the owner position and the game
//! session, and records what the companion publishes (cues, facing, draw
//! order, game-over notices). It runs without any external engine and backs
//! both the headless binary and the behavioural tests.

use glam::Vec2;
use hashbrown::HashSet;
use log::debug;

use crate::entity::{Contact, EntityId, EntityTag};
use crate::host::{Clock, Cue, CueSink, Environment, MotionSink, SpatialQuery};
use crate::session::GameSession;
use crate::vector_math::direction_towards;

/// An entity tracked by the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaEntity {
    /// Handle given out to the companion.
    pub id: EntityId,
    /// Query and contact tag.
    pub tag: EntityTag,
    /// World position.
    pub position: Vec2,
    /// Inactive entities are invisible to queries and contacts.
    pub active: bool,
}

/// Headless host for a companion.
#[derive(Debug, Clone)]
pub struct Arena {
    entities: Vec<ArenaEntity>,
    next_id: u32,
    touching: HashSet<EntityId>,
    owner_position: Vec2,
    session: GameSession,
    delta_time: f32,
    unit_scale: f32,
    companion_position: Vec2,
    facing_flipped: bool,
    draw_order: i32,
    cues: Vec<Cue>,
    game_over_notices: u32,
}

impl Arena {
    /// Creates an empty arena in gameplay mode.
    #[must_use]
    pub fn new(unit_scale: f32, delta_time: f32) -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
            touching: HashSet::new(),
            owner_position: Vec2::ZERO,
            session: GameSession::default(),
            delta_time,
            unit_scale,
            companion_position: Vec2::ZERO,
            facing_flipped: false,
            draw_order: 0,
            cues: Vec::new(),
            game_over_notices: 0,
        }
    }

    /// Places the owner.
    #[must_use]
    pub fn with_owner_at(mut self, position: Vec2) -> Self {
        self.owner_position = position;
        self
    }

    /// Sets where the companion starts, mirroring its spawn position.
    #[must_use]
    pub fn with_companion_at(mut self, position: Vec2) -> Self {
        self.companion_position = position;
        self
    }

    /// Replaces the session.
    #[must_use]
    pub fn with_session(mut self, session: GameSession) -> Self {
        self.session = session;
        self
    }

    /// Adds an active entity and returns its handle.
    pub fn spawn(&mut self, tag: EntityTag, position: Vec2) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(ArenaEntity {
            id,
            tag,
            position,
            active: true,
        });
        debug!("arena spawned {tag:?} {id:?} at {position:?}");
        id
    }

    /// Adds an active hostile.
    pub fn spawn_hostile(&mut self, position: Vec2) -> EntityId {
        self.spawn(EntityTag::Hostile, position)
    }

    /// Deactivates an entity. Returns `false` if it was unknown or already
    /// inactive.
    pub fn deactivate(&mut self, id: EntityId) -> bool {
        match self.entities.iter_mut().find(|e| e.id == id && e.active) {
            Some(entity) => {
                entity.active = false;
                self.touching.remove(&id);
                debug!("arena deactivated {id:?}");
                true
            }
            None => false,
        }
    }

    /// Moves an entity. Returns `false` if it is unknown.
    pub fn set_position(&mut self, id: EntityId, position: Vec2) -> bool {
        self.entities
            .iter_mut()
            .find(|e| e.id == id)
            .map(|entity| entity.position = position)
            .is_some()
    }

    /// Moves every active hostile up to `distance` towards `point`.
    pub fn move_hostiles_toward(&mut self, point: Vec2, distance: f32) {
        for entity in self
            .entities
            .iter_mut()
            .filter(|e| e.active && e.tag == EntityTag::Hostile)
        {
            let gap = entity.position.distance(point);
            let step = distance.min(gap);
            entity.position += direction_towards(entity.position, point) * step;
        }
    }

    /// Number of active hostiles.
    #[must_use]
    pub fn active_hostiles(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.active && e.tag == EntityTag::Hostile)
            .count()
    }

    /// Reports the first entity that started touching a circle of `radius`
    /// around `position` since the previous call.
    ///
    /// Entities that stay in contact are not reported again. When several
    /// contacts begin together only the first in spawn order is returned.
    pub fn begin_contact(&mut self, position: Vec2, radius: f32) -> Option<Contact> {
        let current: Vec<&ArenaEntity> = self
            .entities
            .iter()
            .filter(|e| e.active && e.position.distance(position) <= radius)
            .collect();
        let first_new = current
            .iter()
            .find(|e| !self.touching.contains(&e.id))
            .map(|e| Contact {
                entity: e.id,
                tag: e.tag,
                normal: direction_towards(e.position, position),
            });
        self.touching = current.iter().map(|e| e.id).collect();
        first_new
    }

    /// Moves the owner.
    pub fn set_owner_position(&mut self, position: Vec2) {
        self.owner_position = position;
    }

    /// Changes the frame time reported by the clock.
    pub fn set_delta_time(&mut self, delta_time: f32) {
        self.delta_time = delta_time;
    }

    /// The game session.
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// Mutable access to the game session.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Cues emitted so far.
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Drains the recorded cues.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Last facing published by the companion.
    #[must_use]
    pub const fn facing_flipped(&self) -> bool {
        self.facing_flipped
    }

    /// Last draw order published by the companion.
    #[must_use]
    pub const fn draw_order(&self) -> i32 {
        self.draw_order
    }

    /// Number of game-over notifications received.
    #[must_use]
    pub const fn game_over_notices(&self) -> u32 {
        self.game_over_notices
    }

    /// Companion position as accumulated from translations.
    #[must_use]
    pub const fn companion_position(&self) -> Vec2 {
        self.companion_position
    }
}

impl SpatialQuery for Arena {
    fn overlap_circle(&self, center: Vec2, radius: f32, tag: EntityTag) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.active && e.tag == tag && e.position.distance(center) <= radius)
            .map(|e| e.id)
            .collect()
    }

    fn locate(&self, entity: EntityId) -> Option<Vec2> {
        self.entities
            .iter()
            .find(|e| e.id == entity && e.active)
            .map(|e| e.position)
    }
}

impl MotionSink for Arena {
    fn translate(&mut self, delta: Vec2) {
        self.companion_position += delta;
    }

    fn set_facing(&mut self, flipped: bool) {
        self.facing_flipped = flipped;
    }

    fn set_draw_order(&mut self, order: i32) {
        self.draw_order = order;
    }
}

impl Clock for Arena {
    fn delta_time(&self) -> f32 {
        self.delta_time
    }
}

impl Environment for Arena {
    fn is_gameplay_active(&self) -> bool {
        self.session.is_gameplay_active()
    }

    fn notify_game_over(&mut self) {
        self.game_over_notices += 1;
        self.session.game_over();
    }

    fn unit_scale(&self) -> f32 {
        self.unit_scale
    }

    fn owner_position(&self) -> Vec2 {
        self.owner_position
    }
}

impl CueSink for Arena {
    fn emit(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
