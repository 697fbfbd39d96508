use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
    /// Trigger colliders report enter/exit instead of blocking.
    pub is_trigger: bool,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            is_trigger: false,
        }
    }

    /// Modify BoxCollider with given size and offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}
