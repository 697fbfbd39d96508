//! Cancellable delayed actions.
//!
//! [`DelayedActions`] is the engine's stand-in for a coroutine scheduler: an
//! owner entity schedules an action `delay` seconds into the future and gets
//! back a [`ScheduleToken`]. The token can be cancelled before it comes due.
//! Each frame, [`update_delayed_actions`](crate::systems::delayedactions::update_delayed_actions)
//! drains the due entries and triggers a
//! [`DelayElapsedEvent`](crate::events::delayedactions::DelayElapsedEvent)
//! for each of them.
//!
//! Times are absolute world seconds taken from
//! [`WorldTime::elapsed`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;

use crate::resources::worldtime::TIME_EPSILON;

/// Identifies one scheduled action. Tokens are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleToken(u64);

impl ScheduleToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledAction {
    token: ScheduleToken,
    owner: Entity,
    due_at: f32,
}

/// Pending delayed actions, keyed by token.
#[derive(Resource, Debug, Default)]
pub struct DelayedActions {
    next_id: u64,
    entries: Vec<ScheduledAction>,
}

impl DelayedActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action for `owner` that comes due at `now + delay`.
    ///
    /// Negative delays are treated as zero.
    pub fn schedule(&mut self, owner: Entity, now: f32, delay: f32) -> ScheduleToken {
        let token = ScheduleToken(self.next_id);
        self.next_id += 1;
        self.entries.push(ScheduledAction {
            token,
            owner,
            due_at: now + delay.max(0.0),
        });
        token
    }

    /// Cancel a scheduled action. Returns false if the token was not pending.
    pub fn cancel(&mut self, token: ScheduleToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|a| a.token != token);
        self.entries.len() != before
    }

    /// Cancel every action scheduled by `owner`. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.entries.len();
        self.entries.retain(|a| a.owner != owner);
        before - self.entries.len()
    }

    pub fn is_scheduled(&self, token: ScheduleToken) -> bool {
        self.entries.iter().any(|a| a.token == token)
    }

    /// Seconds left until `token` comes due, or `None` if it is not pending.
    pub fn remaining(&self, token: ScheduleToken, now: f32) -> Option<f32> {
        self.entries
            .iter()
            .find(|a| a.token == token)
            .map(|a| (a.due_at - now).max(0.0))
    }

    /// Remove and return every action due by `now` (within [`TIME_EPSILON`]),
    /// oldest deadline first. Ties keep scheduling order.
    pub fn drain_due(&mut self, now: f32) -> Vec<(Entity, ScheduleToken)> {
        let mut due: Vec<ScheduledAction> = Vec::new();
        self.entries.retain(|a| {
            if a.due_at <= now + TIME_EPSILON {
                due.push(*a);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| {
            a.due_at
                .total_cmp(&b.due_at)
                .then_with(|| a.token.cmp(&b.token))
        });
        due.into_iter().map(|a| (a.owner, a.token)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
