use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::{info, warn};

use drumkit::audio::KiraDriver;
use drumkit::config::KitConfig;
use drumkit::external::insights;
use drumkit::kit::{KitController, KitLayout};
use drumkit::traits::PadSurface;
use drumkit::util::init_logging;
use drumkit::view::{DrumKitApp, PadBoard, StyleTiming};

#[derive(Parser, Debug)]
#[command(name = "drumkit", about = "Keyboard drum kit with animated pads")]
struct Args {
    /// Path to the kit config JSON file.
    #[arg(long, default_value = "drumkit.json")]
    config: PathBuf,

    /// Show debug logs.
    #[arg(long)]
    verbose: bool,

    /// Skip the launch ping regardless of configuration.
    #[arg(long)]
    no_insights: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;
    info!("drumkit starting");

    // Load config from file, falling back to defaults if not found
    let config = match KitConfig::read(&args.config) {
        Ok(c) => {
            info!("Loaded kit config from {}", args.config.display());
            c
        }
        Err(e) => {
            info!(
                "Config not usable at {} ({e}), using the default kit",
                args.config.display()
            );
            KitConfig::default()
        }
    };

    let mut insights_config = config.insights.clone();
    if args.no_insights {
        insights_config.enabled = false;
    }
    insights::init(&insights_config);

    let mut driver = KiraDriver::new()?;
    let (layout, specs) = KitLayout::build(&config.pads, &mut driver);
    if layout.bound_count() < specs.len() {
        warn!(
            "{} of {} pads have no playable sample",
            specs.len() - layout.bound_count(),
            specs.len()
        );
    }
    info!("{} pads, {} bound to samples", specs.len(), layout.bound_count());

    let mut board = PadBoard::new(StyleTiming::default());
    for spec in &specs {
        board.add_pad(spec.key.clone(), spec.label.clone());
    }
    // The controller listens to exactly the pads present right now.
    let controller = KitController::new(board.pads());

    let app = DrumKitApp::new(controller, layout, driver, board);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width as f32, config.window_height as f32])
            .with_title("drumkit"),
        ..Default::default()
    };
    eframe::run_native(
        "drumkit",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("UI loop failed: {e}"))
}
