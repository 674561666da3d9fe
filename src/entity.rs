//! Entity handles shared between the companion and its host.
use glam::Vec2;

/// Opaque handle into the host's entity registry.
///
/// The companion never owns the entity behind a handle; liveness must be
/// re-checked through [`crate::host::SpatialQuery::locate`] before each use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Tag used to filter overlap queries and contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityTag {
    /// An enemy: targetable and damaging on contact.
    Hostile,
    /// Any other scene entity.
    Neutral,
}

/// A contact reported by the host's physics when the companion touches
/// another entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// The entity touched.
    pub entity: EntityId,
    /// Tag of the touched entity.
    pub tag: EntityTag,
    /// Contact normal pointing away from the other entity.
    pub normal: Vec2,
}

impl Contact {
    /// Contact with a hostile entity.
    #[must_use]
    pub const fn hostile(entity: EntityId, normal: Vec2) -> Self {
        Self {
            entity,
            tag: EntityTag::Hostile,
            normal,
        }
    }
}
