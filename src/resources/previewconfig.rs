//! Preview configuration resource.
//!
//! Holds an FX tester preset plus the emitters and timing used by the
//! headless preview runner. Loaded from an INI file; every missing key keeps
//! its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [preview]
//! tick_rate = 60
//! duration = 5.0
//! time_scale = 1.0
//!
//! [fx]
//! player_tag = Player
//! auto_collect_children = true
//! play_on_start = true
//! play_on_trigger_enter = false
//! stop_on_trigger_exit = false
//! loop = false
//! restart_on_retrigger = true
//! restore_original_loop_on_stop = true
//! manual_key = Space
//! delay = 2.0
//! cooldown = 0.0
//! max_plays = 0
//!
//! [emitters]
//! loops = false, true, false
//! duration = 1.0
//! rate = 10.0
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};

use crate::components::fxtester::FxSettings;
use crate::resources::input::parse_key_binding;

/// Default safe values for startup
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_DURATION: f32 = 5.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_EMITTER_DURATION: f32 = 1.0;
const DEFAULT_EMITTER_RATE: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./fxtester.ini";

/// Preview configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct PreviewConfig {
    /// Simulation steps per second.
    pub tick_rate: u32,
    /// Seconds of simulated time to run.
    pub duration: f32,
    pub time_scale: f32,
    /// Tester preset.
    pub fx: FxSettings,
    /// Original loop flag of each preview emitter; its length is the emitter count.
    pub emitter_loops: Vec<bool>,
    pub emitter_duration: f32,
    pub emitter_rate: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            duration: DEFAULT_DURATION,
            time_scale: DEFAULT_TIME_SCALE,
            fx: FxSettings::default(),
            emitter_loops: vec![false, false, false],
            emitter_duration: DEFAULT_EMITTER_DURATION,
            emitter_rate: DEFAULT_EMITTER_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Frame delta for the configured tick rate.
    pub fn tick_delta(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [preview] section
        if let Some(rate) = config.getuint("preview", "tick_rate").ok().flatten() {
            match u32::try_from(rate) {
                Ok(rate) => self.tick_rate = rate.max(1),
                Err(_) => warn!("Ignoring preview.tick_rate = {}: out of range", rate),
            }
        }
        if let Some(duration) = config.getfloat("preview", "duration").ok().flatten() {
            self.duration = duration as f32;
        }
        if let Some(scale) = config.getfloat("preview", "time_scale").ok().flatten() {
            let scale = scale as f32;
            if scale.is_finite() && scale > 0.0 {
                self.time_scale = scale;
            } else {
                warn!(
                    "Ignoring preview.time_scale = {}: must be positive, keeping {}",
                    scale, self.time_scale
                );
            }
        }

        // [fx] section
        let fx = &mut self.fx;
        if let Some(tag) = config.get("fx", "player_tag") {
            fx.player_tag = tag;
        }
        let flags: [(&str, &mut bool); 7] = [
            ("auto_collect_children", &mut fx.auto_collect_children),
            ("play_on_start", &mut fx.play_on_start),
            ("play_on_trigger_enter", &mut fx.play_on_trigger_enter),
            ("stop_on_trigger_exit", &mut fx.stop_on_trigger_exit),
            ("loop", &mut fx.looping),
            ("restart_on_retrigger", &mut fx.restart_on_retrigger),
            (
                "restore_original_loop_on_stop",
                &mut fx.restore_original_loop_on_stop,
            ),
        ];
        for (key, slot) in flags {
            if let Some(value) = config.getbool("fx", key).ok().flatten() {
                *slot = value;
            }
        }
        if let Some(key) = config.get("fx", "manual_key") {
            match parse_key_binding(&key) {
                Ok(binding) => fx.manual_key = binding,
                Err(e) => warn!("Ignoring fx.manual_key: {}", e),
            }
        }
        if let Some(delay) = config.getfloat("fx", "delay").ok().flatten() {
            fx.delay = (delay as f32).max(0.0);
        }
        if let Some(cooldown) = config.getfloat("fx", "cooldown").ok().flatten() {
            fx.cooldown = (cooldown as f32).max(0.0);
        }
        if let Some(max_plays) = config.getuint("fx", "max_plays").ok().flatten() {
            match u32::try_from(max_plays) {
                Ok(max_plays) => fx.max_plays = max_plays,
                Err(_) => warn!("Ignoring fx.max_plays = {}: out of range", max_plays),
            }
        }

        // [emitters] section
        if let Some(loops) = config.get("emitters", "loops") {
            self.emitter_loops = parse_bool_list(&loops)?;
        }
        if let Some(duration) = config.getfloat("emitters", "duration").ok().flatten() {
            self.emitter_duration = duration as f32;
        }
        if let Some(rate) = config.getfloat("emitters", "rate").ok().flatten() {
            self.emitter_rate = rate as f32;
        }

        info!(
            "Loaded preview config: {} emitters, delay={}s, cooldown={}s, max_plays={}",
            self.emitter_loops.len(),
            self.fx.delay,
            self.fx.cooldown,
            self.fx.max_plays
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let fx = &self.fx;

        // [preview] section
        config.set("preview", "tick_rate", Some(self.tick_rate.to_string()));
        config.set("preview", "duration", Some(self.duration.to_string()));
        config.set("preview", "time_scale", Some(self.time_scale.to_string()));

        // [fx] section
        config.set("fx", "player_tag", Some(fx.player_tag.clone()));
        config.set(
            "fx",
            "auto_collect_children",
            Some(fx.auto_collect_children.to_string()),
        );
        config.set("fx", "play_on_start", Some(fx.play_on_start.to_string()));
        config.set(
            "fx",
            "play_on_trigger_enter",
            Some(fx.play_on_trigger_enter.to_string()),
        );
        config.set(
            "fx",
            "stop_on_trigger_exit",
            Some(fx.stop_on_trigger_exit.to_string()),
        );
        config.set("fx", "loop", Some(fx.looping.to_string()));
        config.set(
            "fx",
            "restart_on_retrigger",
            Some(fx.restart_on_retrigger.to_string()),
        );
        config.set(
            "fx",
            "restore_original_loop_on_stop",
            Some(fx.restore_original_loop_on_stop.to_string()),
        );
        let key = fx
            .manual_key
            .map(|k| k.to_string())
            .unwrap_or_else(|| "none".to_string());
        config.set("fx", "manual_key", Some(key));
        config.set("fx", "delay", Some(fx.delay.to_string()));
        config.set("fx", "cooldown", Some(fx.cooldown.to_string()));
        config.set("fx", "max_plays", Some(fx.max_plays.to_string()));

        // [emitters] section
        let loops: Vec<String> = self.emitter_loops.iter().map(|l| l.to_string()).collect();
        config.set("emitters", "loops", Some(loops.join(", ")));
        config.set(
            "emitters",
            "duration",
            Some(self.emitter_duration.to_string()),
        );
        config.set("emitters", "rate", Some(self.emitter_rate.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

/// Parse a comma-separated list of booleans (`true`/`false`/`1`/`0`).
fn parse_bool_list(s: &str) -> Result<Vec<bool>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(format!("Invalid boolean '{}' in emitters.loops", other)),
        })
        .collect()
}
