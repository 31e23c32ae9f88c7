mod app;
use wortdrill::*;

use app::DrillApp;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use wortdrill::config::load_config_from;

#[derive(Parser)]
#[command(name = "wortdrill", version, about = "German/French vocabulary drill")]
struct Cli {
    /// Config file path (defaults to ./wortdrill.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word list to drill: CSV/TSV table or JSON deck
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Fixed seed for the word picker
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wortdrill=info".parse().expect("valid log directive")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match load_config_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    if cli.vocabulary.is_some() {
        config.vocabulary_path = cli.vocabulary;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut startup_notice = None;
    let vocabulary = config.load_vocabulary().unwrap_or_else(|e| {
        tracing::error!(error = %e, "falling back to the built-in word list");
        startup_notice = Some(format!(
            "Impossible de charger le vocabulaire : {e}\nLa liste intégrée est utilisée."
        ));
        Vocabulary::builtin()
    });

    tracing::info!(
        name = %vocabulary.name,
        terms = vocabulary.len(),
        "vocabulary ready"
    );

    let session = match config.seed {
        Some(seed) => DrillSession::with_seed(vocabulary, seed),
        None => DrillSession::new(vocabulary),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Wortdrill",
        options,
        Box::new(|_cc| Ok(Box::new(DrillApp::new(config, session, startup_notice)))),
    )
}
