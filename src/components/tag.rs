//! Designer-assigned entity tag.
//!
//! Trigger observers compare the tag of the entity entering a zone against
//! [`FxSettings::player_tag`](crate::components::fxtester::FxSettings).
//! Entities without a [`Tag`] compare as [`UNTAGGED`].
use bevy_ecs::prelude::Component;

/// Tag reported for entities that carry no [`Tag`] component.
pub const UNTAGGED: &str = "Untagged";

#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Tag name of an optional component, falling back to [`UNTAGGED`].
pub fn tag_name(tag: Option<&Tag>) -> &str {
    tag.map(Tag::name).unwrap_or(UNTAGGED)
}
