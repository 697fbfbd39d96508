//! FX Tester preview entry point.
//!
//! A headless runner for FX tester presets:
//! - **bevy_ecs** world with the tester, its emitters, observers and systems
//! - **configparser** INI preset describing the tester and the emitters
//! - **serde_json** scenario of timed inputs (zone enter/exit, hotkeys,
//!   inspector buttons)
//!
//! # Main Loop
//!
//! 1. Load the preset (defaults when no file is present)
//! 2. Build the preview world and run the initialization pass
//! 3. Step at the configured tick rate, applying scenario inputs on time
//! 4. Print the final tester and emitter state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config fxtester.ini --scenario demo.json
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use fxtester::editor::inspector::{BUTTON_ROWS, child_emitter_count, property_rows};
use fxtester::preview::Preview;
use fxtester::resources::previewconfig::PreviewConfig;
use fxtester::scenario::Scenario;

const DEFAULT_CONFIG_PATH: &str = "./fxtester.ini";

/// FX Tester preview
#[derive(Parser)]
#[command(version, about = "Headless preview of particle effect trigger presets")]
struct Cli {
    /// INI preset to load. Without it, ./fxtester.ini is used if present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON scenario of timed inputs.
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Simulated seconds to run. Defaults to the preset's duration.
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f32>,

    /// Write the default preset and exit.
    /// Optionally provide a path (default: ./fxtester.ini).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,

    /// Print the inspector panel for the preset and exit.
    #[arg(long)]
    print_inspector: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write a default preset and quit
    if let Some(maybe_path) = cli.write_config {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if let Err(e) = PreviewConfig::with_path(&path).save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Preset written to {}", path.display());
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut preview = Preview::new(&config);

    if cli.print_inspector {
        print_inspector(&mut preview);
        return;
    }

    let scenario = match cli.scenario.as_deref().map(|p| Scenario::load_from_file(p)) {
        Some(Ok(scenario)) => scenario,
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        None => Scenario::default(),
    };

    let duration = cli
        .duration
        .unwrap_or(config.duration)
        .max(scenario.end_time());
    log::info!(
        "Previewing {:.2}s at {} ticks/s with {} scenario steps",
        duration,
        config.tick_rate,
        scenario.steps.len()
    );

    let report = preview.run(&scenario, duration);
    print!("{report}");
}

fn load_config(path: Option<&Path>) -> Result<PreviewConfig, String> {
    match path {
        Some(path) => {
            let mut config = PreviewConfig::with_path(path);
            config.load_from_file()?;
            Ok(config)
        }
        None => {
            let mut config = PreviewConfig::new();
            if config.config_path.exists() {
                config.load_from_file()?;
            }
            Ok(config)
        }
    }
}

fn print_inspector(preview: &mut Preview) {
    let tester = preview.tester;
    let Some(settings) = preview.tester().map(|t| t.settings.clone()) else {
        return;
    };

    println!("FX Tester");
    for row in property_rows(&settings) {
        println!("  {:<32} {:<10} # {}", row.name, row.value, row.tooltip);
    }
    println!();
    println!("Controls");
    for buttons in BUTTON_ROWS {
        let labels: Vec<String> = buttons.iter().map(|b| format!("[{}]", b.label())).collect();
        println!("  {}", labels.join(" "));
    }
    println!();
    println!("Info");
    println!(
        "  Child emitters: {}",
        child_emitter_count(&mut preview.world, tester)
    );
}
