use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use drill_core::{DrillSettings, OperandRanges, SettingsError};
use services::Clock;
use ui::{App, UiApp, build_app_context};

/// Arithmetic drill: answer a fixed number of random problems on a keypad.
#[derive(Debug, Parser)]
#[command(name = "math-drill", version, about)]
struct Args {
    /// Number of problems in one drill.
    #[arg(long, env = "DRILL_QUESTIONS", default_value_t = DrillSettings::DEFAULT_TOTAL_QUESTIONS)]
    questions: u32,

    /// Seed for a reproducible problem sequence.
    #[arg(long, env = "DRILL_SEED")]
    seed: Option<u64>,

    /// Largest operand for addition and subtraction.
    #[arg(long, env = "DRILL_ADD_SUB_MAX", default_value_t = OperandRanges::DEFAULT_ADD_SUB_MAX)]
    add_sub_max: u32,

    /// Largest operand for multiplication and division.
    #[arg(long, env = "DRILL_MUL_DIV_MAX", default_value_t = OperandRanges::DEFAULT_MUL_DIV_MAX)]
    mul_div_max: u32,
}

impl Args {
    fn settings(&self) -> Result<DrillSettings, SettingsError> {
        let ranges = OperandRanges::new(self.add_sub_max, self.mul_div_max)?;
        DrillSettings::new(self.questions, ranges)
    }
}

struct DesktopApp {
    settings: DrillSettings,
    seed: Option<u64>,
}

impl UiApp for DesktopApp {
    fn settings(&self) -> DrillSettings {
        self.settings
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn clock(&self) -> Clock {
        Clock::default()
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = args.settings()?;
    log::info!(
        "starting math drill: {} questions, +/- up to {}, ×/÷ up to {}",
        settings.total_questions(),
        settings.ranges().add_sub_max(),
        settings.ranges().mul_div_max(),
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        settings,
        seed: args.seed,
    });
    let context = build_app_context(&app);

    // Keep the drill window a normal window; some dev setups default to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math Drill")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
