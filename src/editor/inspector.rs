//! Inspector panel for [`FxTester`].
//!
//! The panel has no logic of its own. It lists the tester's settings as
//! property rows, offers the manual control buttons, and shows how many
//! emitters live in the tester's subtree. Button presses become
//! [`FxCommandEvent`]s; editing a setting triggers [`FxCommand::Validate`].
//!
//! [`draw_fxtester_inspector`] renders the panel with imgui. The rest of the
//! module is renderer-agnostic so the preview CLI can print the same panel.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;

use crate::components::fxtester::{FxSettings, FxTester};
use crate::events::fxtester::{FxCommand, FxCommandEvent};
use crate::resources::input::KeyCode;
use crate::systems::fxtester::EmitterAccess;

/// Manual control buttons, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectorButton {
    PlayOnce,
    PlayLoop,
    Stop,
    Trigger,
    CollectChildren,
}

/// Button rows as laid out in the panel.
pub const BUTTON_ROWS: [&[InspectorButton]; 2] = [
    &[
        InspectorButton::PlayOnce,
        InspectorButton::PlayLoop,
        InspectorButton::Stop,
    ],
    &[InspectorButton::Trigger, InspectorButton::CollectChildren],
];

impl InspectorButton {
    pub fn label(&self) -> &'static str {
        match self {
            InspectorButton::PlayOnce => "Play Once",
            InspectorButton::PlayLoop => "Play Loop",
            InspectorButton::Stop => "Stop",
            InspectorButton::Trigger => "Trigger",
            InspectorButton::CollectChildren => "Collect Children",
        }
    }

    /// The command a press sends. "Trigger" is a one-shot play.
    pub fn command(&self) -> FxCommand {
        match self {
            InspectorButton::PlayOnce | InspectorButton::Trigger => FxCommand::PlayOnce,
            InspectorButton::PlayLoop => FxCommand::PlayLoop,
            InspectorButton::Stop => FxCommand::Stop,
            InspectorButton::CollectChildren => FxCommand::CollectChildren,
        }
    }
}

/// One line of the default property drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub name: &'static str,
    pub value: String,
    pub tooltip: &'static str,
}

fn row(name: &'static str, value: impl ToString, tooltip: &'static str) -> PropertyRow {
    PropertyRow {
        name,
        value: value.to_string(),
        tooltip,
    }
}

fn key_label(key: Option<KeyCode>) -> String {
    key.map(|k| k.to_string())
        .unwrap_or_else(|| "None".to_string())
}

/// Property rows for every setting, in declaration order.
pub fn property_rows(settings: &FxSettings) -> Vec<PropertyRow> {
    vec![
        row(
            "Player Tag",
            &settings.player_tag,
            "Tag of the entity that fires the triggers",
        ),
        row(
            "Auto Collect Children",
            settings.auto_collect_children,
            "Gather every particle emitter below this entity",
        ),
        row(
            "Play On Start",
            settings.play_on_start,
            "Play the effect when the scene starts",
        ),
        row(
            "Play On Trigger Enter",
            settings.play_on_trigger_enter,
            "Play when the player enters the trigger",
        ),
        row(
            "Stop On Trigger Exit",
            settings.stop_on_trigger_exit,
            "Stop when the player leaves the trigger",
        ),
        row("Loop", settings.looping, "Play in a loop"),
        row(
            "Restart On Retrigger",
            settings.restart_on_retrigger,
            "A repeated trigger restarts the effect",
        ),
        row(
            "Restore Original Loop On Stop",
            settings.restore_original_loop_on_stop,
            "Put the emitters' own loop flags back on stop",
        ),
        row(
            "Manual Key",
            key_label(settings.manual_key),
            "Hotkey for a one-off play (legacy input only)",
        ),
        row("Delay", settings.delay, "Delay before playing, seconds"),
        row("Cooldown", settings.cooldown, "Cooldown between plays, seconds"),
        row(
            "Max Plays",
            settings.max_plays,
            "Maximum number of plays (0 = unlimited)",
        ),
    ]
}

/// Forward a button press to the tester on `entity`.
pub fn press(world: &mut World, entity: Entity, button: InspectorButton) {
    world.trigger(FxCommandEvent {
        entity,
        command: button.command(),
    });
}

/// Live number of emitters in the subtree of `entity`, itself included.
pub fn child_emitter_count(world: &mut World, entity: Entity) -> usize {
    let mut state = SystemState::<EmitterAccess>::new(world);
    let emitters = state.get_mut(world);
    emitters.collect_emitters(entity).len()
}

/// Draw the inspector for `entity` into the current imgui frame.
///
/// Edits are written straight into the component and followed by a
/// validation pass; button presses are forwarded once the widgets are done.
pub fn draw_fxtester_inspector(ui: &imgui::Ui, world: &mut World, entity: Entity) {
    let edited = {
        let Some(mut tester) = world.get_mut::<FxTester>(entity) else {
            ui.text_disabled("No FxTester on this entity");
            return;
        };
        let edited = draw_settings(ui, &mut tester.bypass_change_detection().settings);
        if edited {
            tester.set_changed();
        }
        edited
    };
    if edited {
        world.trigger(FxCommandEvent {
            entity,
            command: FxCommand::Validate,
        });
    }

    ui.separator();
    ui.text("Controls");
    let mut pressed = None;
    for buttons in BUTTON_ROWS {
        for (i, button) in buttons.iter().enumerate() {
            if i > 0 {
                ui.same_line();
            }
            if ui.button(button.label()) {
                pressed = Some(*button);
            }
        }
    }
    if let Some(button) = pressed {
        press(world, entity, button);
    }

    ui.separator();
    ui.text("Info");
    let count = child_emitter_count(world, entity);
    ui.text(format!("Child emitters: {}", count));
    if let Some(tester) = world.get::<FxTester>(entity) {
        ui.text(format!(
            "State: {:?}, plays: {}",
            tester.state(),
            tester.plays_count()
        ));
    }
}

fn draw_settings(ui: &imgui::Ui, s: &mut FxSettings) -> bool {
    let rows = property_rows(s);
    let tip = |name: &str| {
        if ui.is_item_hovered() {
            if let Some(r) = rows.iter().find(|r| r.name == name) {
                ui.tooltip_text(r.tooltip);
            }
        }
    };

    let mut edited = false;
    edited |= ui.input_text("Player Tag", &mut s.player_tag).build();
    tip("Player Tag");
    edited |= ui.checkbox("Auto Collect Children", &mut s.auto_collect_children);
    tip("Auto Collect Children");
    edited |= ui.checkbox("Play On Start", &mut s.play_on_start);
    tip("Play On Start");
    edited |= ui.checkbox("Play On Trigger Enter", &mut s.play_on_trigger_enter);
    tip("Play On Trigger Enter");
    edited |= ui.checkbox("Stop On Trigger Exit", &mut s.stop_on_trigger_exit);
    tip("Stop On Trigger Exit");
    edited |= ui.checkbox("Loop", &mut s.looping);
    tip("Loop");
    edited |= ui.checkbox("Restart On Retrigger", &mut s.restart_on_retrigger);
    tip("Restart On Retrigger");
    edited |= ui.checkbox(
        "Restore Original Loop On Stop",
        &mut s.restore_original_loop_on_stop,
    );
    tip("Restore Original Loop On Stop");

    let mut key_labels = vec!["None".to_string()];
    key_labels.extend(KeyCode::ALL.iter().map(|k| k.to_string()));
    let mut key_index = s
        .manual_key
        .and_then(|k| KeyCode::ALL.iter().position(|c| *c == k))
        .map(|i| i + 1)
        .unwrap_or(0);
    if ui.combo_simple_string("Manual Key", &mut key_index, &key_labels) {
        s.manual_key = key_index.checked_sub(1).map(|i| KeyCode::ALL[i]);
        edited = true;
    }
    tip("Manual Key");
    #[cfg(not(feature = "legacy_input"))]
    ui.text_disabled("Manual Key needs the legacy_input feature");

    if ui.input_float("Delay", &mut s.delay).build() {
        s.delay = s.delay.max(0.0);
        edited = true;
    }
    tip("Delay");
    if ui.input_float("Cooldown", &mut s.cooldown).build() {
        s.cooldown = s.cooldown.max(0.0);
        edited = true;
    }
    tip("Cooldown");
    let mut max_plays = s.max_plays.min(i32::MAX as u32) as i32;
    if ui.input_int("Max Plays", &mut max_plays).build() {
        s.max_plays = max_plays.max(0) as u32;
        edited = true;
    }
    tip("Max Plays");

    edited
}
