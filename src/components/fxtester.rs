//! FX tester component: designer-driven particle effect playback.
//!
//! An entity with [`FxTester`] owns a list of [`ParticleEmitter`] handles and
//! plays, loops, delays and stops them in response to trigger zones, a
//! manual hotkey, inspector buttons, or scene start.
//!
//! # State machine
//!
//! ```text
//!   Idle/Playing --trigger--> PendingPlay --delay elapses--> Playing
//!   Idle/Playing --trigger (no delay)--------------------> Playing
//!   PendingPlay/Playing --stop--> Idle
//! ```
//!
//! A trigger is suppressed when `max_plays` is reached or the cooldown has
//! not elapsed. While a play is pending, a new trigger is ignored unless
//! `restart_on_retrigger` is set, in which case the pending play is
//! cancelled and rescheduled.
//!
//! The transition methods take the emitter capability ([`EmitterControl`])
//! and the scheduler ([`DelayedActions`]) as arguments. Observers in
//! [`crate::systems::fxtester`] wire engine events into them.
//!
//! # Related
//!
//! - [`crate::systems::fxtester`] – lifecycle, trigger and command observers
//! - [`crate::editor::inspector`] – inspector panel for manual control
//!
//! [`ParticleEmitter`]: crate::components::particleemitter::ParticleEmitter

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::particleemitter::{EmitterControl, StopBehavior};
use crate::resources::delayedactions::{DelayedActions, ScheduleToken};
use crate::resources::input::KeyCode;

/// Designer-set configuration of an [`FxTester`].
#[derive(Debug, Clone, PartialEq)]
pub struct FxSettings {
    /// Tag of the entity whose zone enter/exit drives the effect.
    pub player_tag: String,
    /// Gather every emitter in the subtree on initialization.
    pub auto_collect_children: bool,
    pub play_on_start: bool,
    pub play_on_trigger_enter: bool,
    pub stop_on_trigger_exit: bool,
    /// Loop override applied to every emitter when playback starts.
    pub looping: bool,
    /// A new trigger cancels a pending play and restarts running emitters.
    pub restart_on_retrigger: bool,
    /// Put the emitters' own loop flags back when stopping.
    pub restore_original_loop_on_stop: bool,
    /// Hotkey for a one-off trigger. `None` disables it.
    pub manual_key: Option<KeyCode>,
    /// Seconds between the trigger and playback.
    pub delay: f32,
    /// Minimum seconds between accepted triggers.
    pub cooldown: f32,
    /// Maximum number of plays; 0 means unlimited.
    pub max_plays: u32,
}

impl Default for FxSettings {
    fn default() -> Self {
        Self {
            player_tag: "Player".to_string(),
            auto_collect_children: true,
            play_on_start: false,
            play_on_trigger_enter: false,
            stop_on_trigger_exit: false,
            looping: false,
            restart_on_retrigger: true,
            restore_original_loop_on_stop: true,
            manual_key: None,
            delay: 0.0,
            cooldown: 0.0,
            max_plays: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FxState {
    #[default]
    Idle,
    /// Waiting for the configured delay to elapse.
    PendingPlay,
    Playing,
}

/// What a trigger request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// `max_plays` has been reached.
    LimitReached,
    /// The cooldown window is still open.
    CoolingDown,
    /// A play is pending and retriggering is disabled.
    AlreadyPending,
    /// Playback will start when the token comes due.
    Scheduled(ScheduleToken),
    /// Playback started immediately.
    Played,
}

impl TriggerOutcome {
    /// True when the trigger was accepted.
    pub fn accepted(&self) -> bool {
        matches!(self, TriggerOutcome::Scheduled(_) | TriggerOutcome::Played)
    }
}

/// Particle effect controller component.
#[derive(Component, Debug, Clone, Default)]
pub struct FxTester {
    pub settings: FxSettings,
    emitters: Vec<Entity>,
    original_loops: Vec<bool>,
    state: FxState,
    pending: Option<ScheduleToken>,
    next_allowed_time: f32,
    plays_count: u32,
}

impl FxTester {
    pub fn new(settings: FxSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Preassign emitter handles. Loop flags are captured on initialization.
    pub fn with_emitters(mut self, emitters: impl IntoIterator<Item = Entity>) -> Self {
        self.emitters = emitters.into_iter().collect();
        self
    }

    pub fn emitters(&self) -> &[Entity] {
        &self.emitters
    }

    pub fn original_loops(&self) -> &[bool] {
        &self.original_loops
    }

    pub fn state(&self) -> FxState {
        self.state
    }

    pub fn pending(&self) -> Option<ScheduleToken> {
        self.pending
    }

    pub fn plays_count(&self) -> u32 {
        self.plays_count
    }

    pub fn next_allowed_time(&self) -> f32 {
        self.next_allowed_time
    }

    /// Play once: force the loop override off and trigger.
    pub fn play_once(
        &mut self,
        owner: Entity,
        now: f32,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) -> TriggerOutcome {
        self.settings.looping = false;
        self.trigger_play(owner, now, scheduler, emitters)
    }

    /// Play looped: force the loop override on and trigger.
    pub fn play_loop(
        &mut self,
        owner: Entity,
        now: f32,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) -> TriggerOutcome {
        self.settings.looping = true;
        self.trigger_play(owner, now, scheduler, emitters)
    }

    /// Stop every emitter, clear its particles and restore loop flags.
    ///
    /// A pending delayed play is cancelled.
    pub fn stop_all_context(
        &mut self,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel(token);
        }
        self.stop_all(emitters, StopBehavior::StopEmittingAndClear, true);
        if self.state != FxState::Idle {
            info!("FX stopped ({} emitters)", self.emitters.len());
        }
        self.state = FxState::Idle;
    }

    /// Replace the emitter list and recapture the original loop flags.
    pub fn set_emitters(
        &mut self,
        handles: impl IntoIterator<Item = Entity>,
        emitters: &impl EmitterControl,
    ) {
        self.emitters.clear();
        self.original_loops.clear();
        self.emitters.extend(handles);
        self.cache_original_loops(emitters);
    }

    /// Record each emitter's loop flag. Missing emitters record `false`.
    pub fn cache_original_loops(&mut self, emitters: &impl EmitterControl) {
        self.original_loops = self
            .emitters
            .iter()
            .map(|&e| emitters.looping(e).unwrap_or(false))
            .collect();
    }

    /// Request playback, honoring play limit, cooldown, delay and retrigger policy.
    pub fn trigger_play(
        &mut self,
        owner: Entity,
        now: f32,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) -> TriggerOutcome {
        if self.settings.max_plays > 0 && self.plays_count >= self.settings.max_plays {
            debug!("FX trigger ignored: play limit {} reached", self.settings.max_plays);
            return TriggerOutcome::LimitReached;
        }

        if now < self.next_allowed_time {
            debug!(
                "FX trigger ignored: cooling down until {:.3}s",
                self.next_allowed_time
            );
            return TriggerOutcome::CoolingDown;
        }

        if let Some(token) = self.pending {
            if !self.settings.restart_on_retrigger {
                debug!("FX trigger ignored: play already pending");
                return TriggerOutcome::AlreadyPending;
            }
            scheduler.cancel(token);
            self.pending = None;
        }

        self.next_allowed_time = now + self.settings.cooldown.max(0.0);

        if self.settings.delay > 0.0 {
            let token = scheduler.schedule(owner, now, self.settings.delay);
            self.pending = Some(token);
            self.state = FxState::PendingPlay;
            debug!("FX play scheduled in {:.3}s", self.settings.delay);
            return TriggerOutcome::Scheduled(token);
        }

        self.start_playback(emitters);
        TriggerOutcome::Played
    }

    /// Finish a delayed play. Tokens other than the pending one are stale
    /// and ignored. Returns true when playback started.
    pub fn complete_pending(
        &mut self,
        token: ScheduleToken,
        emitters: &mut impl EmitterControl,
    ) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.start_playback(emitters);
        true
    }

    /// React to a zone enter event by an entity tagged `other_tag`.
    pub fn on_trigger_enter(
        &mut self,
        other_tag: &str,
        owner: Entity,
        now: f32,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) -> Option<TriggerOutcome> {
        if !self.settings.play_on_trigger_enter || other_tag != self.settings.player_tag {
            return None;
        }
        Some(self.trigger_play(owner, now, scheduler, emitters))
    }

    /// React to a zone exit event. Returns true when the effect was stopped.
    pub fn on_trigger_exit(
        &mut self,
        other_tag: &str,
        scheduler: &mut DelayedActions,
        emitters: &mut impl EmitterControl,
    ) -> bool {
        if !self.settings.stop_on_trigger_exit || other_tag != self.settings.player_tag {
            return false;
        }
        self.stop_all_context(scheduler, emitters);
        true
    }

    fn start_playback(&mut self, emitters: &mut impl EmitterControl) {
        self.apply_loop_override(emitters, self.settings.looping);

        if self.settings.restart_on_retrigger {
            self.stop_all(emitters, StopBehavior::StopEmitting, false);
        }

        for &e in &self.emitters {
            emitters.play(e);
        }

        self.plays_count += 1;
        self.pending = None;
        self.state = FxState::Playing;
        info!(
            "FX playing: {} emitters, loop={}, play #{}",
            self.emitters.len(),
            self.settings.looping,
            self.plays_count
        );
    }

    fn stop_all(
        &self,
        emitters: &mut impl EmitterControl,
        behavior: StopBehavior,
        restore_loops: bool,
    ) {
        for &e in &self.emitters {
            emitters.stop(e, behavior);
        }

        if restore_loops && self.settings.restore_original_loop_on_stop {
            self.restore_original_loops(emitters);
        }
    }

    fn apply_loop_override(&self, emitters: &mut impl EmitterControl, looping: bool) {
        for &e in &self.emitters {
            emitters.set_looping(e, looping);
        }
    }

    fn restore_original_loops(&self, emitters: &mut impl EmitterControl) {
        for (i, &e) in self.emitters.iter().enumerate() {
            let Some(current) = emitters.looping(e) else {
                continue;
            };
            let value = self.original_loops.get(i).copied().unwrap_or(current);
            emitters.set_looping(e, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Play(Entity),
        Stop(Entity, StopBehavior),
    }

    #[derive(Default)]
    struct MockEmitters {
        loops: FxHashMap<Entity, bool>,
        calls: Vec<Call>,
    }

    impl MockEmitters {
        fn plays(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Play(_)))
                .count()
        }
    }

    impl EmitterControl for MockEmitters {
        fn play(&mut self, emitter: Entity) {
            if self.loops.contains_key(&emitter) {
                self.calls.push(Call::Play(emitter));
            }
        }

        fn stop(&mut self, emitter: Entity, behavior: StopBehavior) {
            if self.loops.contains_key(&emitter) {
                self.calls.push(Call::Stop(emitter, behavior));
            }
        }

        fn looping(&self, emitter: Entity) -> Option<bool> {
            self.loops.get(&emitter).copied()
        }

        fn set_looping(&mut self, emitter: Entity, looping: bool) {
            if let Some(l) = self.loops.get_mut(&emitter) {
                *l = looping;
            }
        }
    }

    struct Fixture {
        _world: World,
        owner: Entity,
        handles: Vec<Entity>,
        emitters: MockEmitters,
        scheduler: DelayedActions,
    }

    fn fixture(loops: &[bool]) -> Fixture {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        let handles: Vec<Entity> = loops.iter().map(|_| world.spawn_empty().id()).collect();
        let mut emitters = MockEmitters::default();
        for (h, l) in handles.iter().zip(loops) {
            emitters.loops.insert(*h, *l);
        }
        Fixture {
            _world: world,
            owner,
            handles,
            emitters,
            scheduler: DelayedActions::new(),
        }
    }

    fn tester(f: &Fixture, settings: FxSettings) -> FxTester {
        let mut t = FxTester::new(settings);
        t.set_emitters(f.handles.iter().copied(), &f.emitters);
        t
    }

    #[test]
    fn test_default_settings() {
        let s = FxSettings::default();
        assert_eq!(s.player_tag, "Player");
        assert!(s.auto_collect_children);
        assert!(s.restart_on_retrigger);
        assert!(s.restore_original_loop_on_stop);
        assert!(!s.looping);
        assert_eq!(s.manual_key, None);
        assert_eq!(s.max_plays, 0);
    }

    #[test]
    fn test_trigger_without_delay_plays_immediately() {
        let mut f = fixture(&[false, false]);
        let mut t = tester(&f, FxSettings::default());

        let outcome = t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);

        assert_eq!(outcome, TriggerOutcome::Played);
        assert_eq!(t.state(), FxState::Playing);
        assert_eq!(t.plays_count(), 1);
        assert_eq!(f.emitters.plays(), 2);
    }

    #[test]
    fn test_max_plays_limits_triggers() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            max_plays: 2,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        for i in 0..2 {
            let outcome = t.trigger_play(f.owner, i as f32, &mut f.scheduler, &mut f.emitters);
            assert!(outcome.accepted());
        }
        let outcome = t.trigger_play(f.owner, 5.0, &mut f.scheduler, &mut f.emitters);

        assert_eq!(outcome, TriggerOutcome::LimitReached);
        assert_eq!(t.plays_count(), 2);
        assert_eq!(f.emitters.plays(), 2);
    }

    #[test]
    fn test_cooldown_suppresses_close_triggers() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            cooldown: 1.0,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        let outcome = t.trigger_play(f.owner, 0.5, &mut f.scheduler, &mut f.emitters);
        assert_eq!(outcome, TriggerOutcome::CoolingDown);
        assert_eq!(t.plays_count(), 1);

        let outcome = t.trigger_play(f.owner, 1.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(outcome, TriggerOutcome::Played);
        assert_eq!(t.plays_count(), 2);
        assert_eq!(t.next_allowed_time(), 2.0);
    }

    #[test]
    fn test_negative_cooldown_counts_as_zero() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            cooldown: -3.0,
            ..Default::default()
        };
        let mut t = tester(&f, settings);
        t.trigger_play(f.owner, 1.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(t.next_allowed_time(), 1.0);
    }

    #[test]
    fn test_delay_schedules_and_completes() {
        let mut f = fixture(&[false, false, false]);
        let settings = FxSettings {
            delay: 2.0,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        let outcome = t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        let TriggerOutcome::Scheduled(token) = outcome else {
            panic!("Expected Scheduled, got {:?}", outcome);
        };
        assert_eq!(t.state(), FxState::PendingPlay);
        assert_eq!(f.emitters.plays(), 0);

        assert!(f.scheduler.drain_due(1.5).is_empty());
        assert_eq!(f.scheduler.drain_due(2.0), vec![(f.owner, token)]);
        assert!(t.complete_pending(token, &mut f.emitters));

        assert_eq!(t.state(), FxState::Playing);
        assert_eq!(t.pending(), None);
        assert_eq!(t.plays_count(), 1);
        assert_eq!(f.emitters.plays(), 3);
    }

    #[test]
    fn test_retrigger_disabled_ignores_while_pending() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            delay: 1.0,
            restart_on_retrigger: false,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        let first = t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        let second = t.trigger_play(f.owner, 0.5, &mut f.scheduler, &mut f.emitters);

        assert_eq!(second, TriggerOutcome::AlreadyPending);
        assert_eq!(TriggerOutcome::Scheduled(t.pending().unwrap()), first);
        assert_eq!(f.scheduler.len(), 1);
        assert_eq!(f.scheduler.remaining(t.pending().unwrap(), 0.5), Some(0.5));
    }

    #[test]
    fn test_retrigger_enabled_restarts_delay() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            delay: 1.0,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        let TriggerOutcome::Scheduled(first) =
            t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters)
        else {
            panic!("Expected Scheduled");
        };
        let TriggerOutcome::Scheduled(second) =
            t.trigger_play(f.owner, 0.5, &mut f.scheduler, &mut f.emitters)
        else {
            panic!("Expected Scheduled");
        };

        assert_ne!(first, second);
        assert!(!f.scheduler.is_scheduled(first));
        assert_eq!(f.scheduler.remaining(second, 0.5), Some(1.0));
        assert!(!t.complete_pending(first, &mut f.emitters));
        assert_eq!(f.emitters.plays(), 0);
    }

    #[test]
    fn test_restart_stops_then_plays_from_playing() {
        let mut f = fixture(&[false]);
        let mut t = tester(&f, FxSettings::default());

        t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        f.emitters.calls.clear();
        t.trigger_play(f.owner, 1.0, &mut f.scheduler, &mut f.emitters);

        let h = f.handles[0];
        assert_eq!(
            f.emitters.calls,
            vec![Call::Stop(h, StopBehavior::StopEmitting), Call::Play(h)]
        );
    }

    #[test]
    fn test_no_restart_only_plays() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            restart_on_retrigger: false,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(f.emitters.calls, vec![Call::Play(f.handles[0])]);
    }

    #[test]
    fn test_loop_restore_round_trip() {
        let mut f = fixture(&[false, true, false]);
        let mut t = tester(&f, FxSettings::default());
        assert_eq!(t.original_loops(), &[false, true, false]);

        t.play_loop(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        for h in &f.handles {
            assert_eq!(f.emitters.looping(*h), Some(true));
        }

        t.stop_all_context(&mut f.scheduler, &mut f.emitters);
        let loops: Vec<bool> = f
            .handles
            .iter()
            .map(|h| f.emitters.looping(*h).unwrap())
            .collect();
        assert_eq!(loops, vec![false, true, false]);
    }

    #[test]
    fn test_stop_without_restore_keeps_override() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            restore_original_loop_on_stop: false,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        t.play_loop(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);
        assert_eq!(f.emitters.looping(f.handles[0]), Some(true));
    }

    #[test]
    fn test_stop_twice_is_idle() {
        let mut f = fixture(&[false, false]);
        let mut t = tester(&f, FxSettings::default());

        t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);

        assert_eq!(t.state(), FxState::Idle);
        let clears = f
            .emitters
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Stop(_, StopBehavior::StopEmittingAndClear)))
            .count();
        assert_eq!(clears, 4);
    }

    #[test]
    fn test_stop_cancels_pending_play() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            delay: 1.0,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        let TriggerOutcome::Scheduled(token) =
            t.trigger_play(f.owner, 0.0, &mut f.scheduler, &mut f.emitters)
        else {
            panic!("Expected Scheduled");
        };
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);

        assert_eq!(t.state(), FxState::Idle);
        assert!(!f.scheduler.is_scheduled(token));
        assert!(!t.complete_pending(token, &mut f.emitters));
        assert_eq!(t.plays_count(), 0);
    }

    #[test]
    fn test_play_once_and_loop_set_override() {
        let mut f = fixture(&[true]);
        let mut t = tester(&f, FxSettings::default());

        t.play_once(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert!(!t.settings.looping);
        assert_eq!(f.emitters.looping(f.handles[0]), Some(false));

        t.play_loop(f.owner, 1.0, &mut f.scheduler, &mut f.emitters);
        assert!(t.settings.looping);
        assert_eq!(f.emitters.looping(f.handles[0]), Some(true));
    }

    #[test]
    fn test_missing_emitters_are_skipped() {
        let mut f = fixture(&[true, false]);
        let gone = f.handles[0];
        f.emitters.loops.remove(&gone);
        let mut t = tester(&f, FxSettings::default());

        assert_eq!(t.original_loops(), &[false, false]);
        let outcome = t.play_loop(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(outcome, TriggerOutcome::Played);
        assert_eq!(f.emitters.calls, vec![
            Call::Stop(f.handles[1], StopBehavior::StopEmitting),
            Call::Play(f.handles[1]),
        ]);
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);
        assert_eq!(f.emitters.looping(f.handles[1]), Some(false));
    }

    #[test]
    fn test_restore_falls_back_to_current_on_length_mismatch() {
        let mut f = fixture(&[false, false]);
        let mut t = FxTester::new(FxSettings::default()).with_emitters(f.handles.clone());
        // No cache captured: restore keeps the current values.
        t.play_loop(f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        t.stop_all_context(&mut f.scheduler, &mut f.emitters);
        assert_eq!(f.emitters.looping(f.handles[0]), Some(true));
        assert_eq!(f.emitters.looping(f.handles[1]), Some(true));
    }

    #[test]
    fn test_set_emitters_replaces_and_recaches() {
        let f = fixture(&[true, false, true]);
        let mut t = tester(&f, FxSettings::default());
        t.set_emitters([f.handles[2], f.handles[1]], &f.emitters);
        assert_eq!(t.emitters(), &[f.handles[2], f.handles[1]]);
        assert_eq!(t.original_loops(), &[true, false]);
    }

    #[test]
    fn test_trigger_enter_filters_by_tag_and_flag() {
        let mut f = fixture(&[false]);
        let mut t = tester(&f, FxSettings::default());

        let r = t.on_trigger_enter("Player", f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(r, None);

        t.settings.play_on_trigger_enter = true;
        let r = t.on_trigger_enter("Enemy", f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(r, None);
        let r = t.on_trigger_enter("Player", f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert_eq!(r, Some(TriggerOutcome::Played));
    }

    #[test]
    fn test_trigger_exit_stops_when_enabled() {
        let mut f = fixture(&[false]);
        let settings = FxSettings {
            play_on_trigger_enter: true,
            ..Default::default()
        };
        let mut t = tester(&f, settings);

        t.on_trigger_enter("Player", f.owner, 0.0, &mut f.scheduler, &mut f.emitters);
        assert!(!t.on_trigger_exit("Player", &mut f.scheduler, &mut f.emitters));
        assert_eq!(t.state(), FxState::Playing);

        t.settings.stop_on_trigger_exit = true;
        assert!(!t.on_trigger_exit("Enemy", &mut f.scheduler, &mut f.emitters));
        assert!(t.on_trigger_exit("Player", &mut f.scheduler, &mut f.emitters));
        assert_eq!(t.state(), FxState::Idle);
    }
}
