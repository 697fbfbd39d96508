//! Timed input scenarios for the preview runner.
//!
//! A scenario is a JSON list of steps. Each step fires one input at a given
//! world time: a zone enter/exit by a tagged entity, a hotkey tap, or an
//! inspector command.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "steps": [
//!     { "at": 0.0, "action": "enter", "tag": "Player" },
//!     { "at": 0.5, "action": "key", "key": "Space" },
//!     { "at": 1.0, "action": "exit", "tag": "Player", "three_d": true },
//!     { "at": 2.0, "action": "play_loop" },
//!     { "at": 4.0, "action": "stop" }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::resources::input::KeyCode;

fn default_tag() -> String {
    "Player".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioAction {
    Enter {
        #[serde(default = "default_tag")]
        tag: String,
        #[serde(default)]
        three_d: bool,
    },
    Exit {
        #[serde(default = "default_tag")]
        tag: String,
        #[serde(default)]
        three_d: bool,
    },
    Key {
        key: KeyCode,
    },
    PlayOnce,
    PlayLoop,
    Stop,
    Trigger,
    CollectChildren,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStep {
    /// World time in seconds.
    pub at: f32,
    #[serde(flatten)]
    pub action: ScenarioAction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let mut scenario: Scenario =
            serde_json::from_str(json).map_err(|e| format!("Invalid scenario: {}", e))?;
        scenario.sort();
        Ok(scenario)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }

    /// Order steps by time; steps at the same time keep file order.
    pub fn sort(&mut self) {
        self.steps.sort_by(|a, b| a.at.total_cmp(&b.at));
    }

    /// Time of the last step, or 0 for an empty scenario.
    pub fn end_time(&self) -> f32 {
        self.steps.iter().map(|s| s.at).fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_sort() {
        let json = r#"{
            "steps": [
                { "at": 2.0, "action": "stop" },
                { "at": 0.0, "action": "enter" },
                { "at": 1.0, "action": "key", "key": "Space" },
                { "at": 1.5, "action": "exit", "tag": "Enemy", "three_d": true }
            ]
        }"#;
        let scenario = Scenario::from_json_str(json).unwrap();

        assert_eq!(scenario.steps.len(), 4);
        assert_eq!(
            scenario.steps[0].action,
            ScenarioAction::Enter {
                tag: "Player".to_string(),
                three_d: false
            }
        );
        assert_eq!(
            scenario.steps[1].action,
            ScenarioAction::Key { key: KeyCode::Space }
        );
        assert_eq!(
            scenario.steps[2].action,
            ScenarioAction::Exit {
                tag: "Enemy".to_string(),
                three_d: true
            }
        );
        assert_eq!(scenario.steps[3].action, ScenarioAction::Stop);
        assert_eq!(scenario.end_time(), 2.0);
    }

    #[test]
    fn test_empty_scenario() {
        let scenario = Scenario::from_json_str("{}").unwrap();
        assert!(scenario.steps.is_empty());
        assert_eq!(scenario.end_time(), 0.0);
    }

    #[test]
    fn test_key_names_are_case_insensitive() {
        let scenario =
            Scenario::from_json_str(r#"{"steps":[{"at":0,"action":"key","key":"f1"}]}"#).unwrap();
        assert_eq!(
            scenario.steps[0].action,
            ScenarioAction::Key { key: KeyCode::F1 }
        );
        assert!(Scenario::from_json_str(r#"{"steps":[{"at":0,"action":"key","key":"hyper"}]}"#).is_err());
    }

    #[test]
    fn test_unknown_action_is_error() {
        let err = Scenario::from_json_str(r#"{"steps":[{"at":0,"action":"explode"}]}"#);
        assert!(err.is_err());
    }
}
