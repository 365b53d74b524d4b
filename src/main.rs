use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use launcher_icons::config::{Config, LOCAL_CONFIG_FILE};
use launcher_icons::stroke::StrokeMode;
use launcher_icons::targets::targets_for;
use launcher_icons::{render_batch, Platform};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "launcher-icons")]
#[command(about = "Render the app icon for every Android, web and iOS icon slot", long_about = None)]
struct Cli {
    /// YAML config file (defaults to ./launcher-icons.yaml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// App project root the icon paths are relative to
    #[arg(short, long, global = true)]
    base_path: Option<PathBuf>,

    /// Only render icons for these platforms
    #[arg(short, long, value_enum, global = true)]
    platform: Vec<Platform>,

    /// How thick strokes are drawn
    #[arg(long, value_enum, global = true)]
    stroke: Option<StrokeMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every selected icon (the default)
    Render,
    /// Show the icon table without rendering
    List,
    /// Write a config file with the default settings
    InitConfig {
        /// Where to write it
        #[arg(default_value = LOCAL_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(Commands::InitConfig { path }) = &cli.command {
        Config::default().save(path)?;
        println!("Created default config at: {}", path.display());
        return Ok(());
    }

    let (mut config, source) = Config::discover(cli.config.as_deref())?;
    match &source {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file, using defaults"),
    }
    if let Some(base_path) = cli.base_path {
        config.output.base_path = base_path;
    }
    if let Some(stroke) = cli.stroke {
        config.render.stroke = stroke;
    }
    config.validate()?;

    let targets = targets_for(&cli.platform);
    let base = &config.output.base_path;

    if let Some(Commands::List) = cli.command {
        for target in &targets {
            println!("{:>5}px  {:<8} {}", target.size, target.platform.to_string(), target.resolve(base).display());
        }
        return Ok(());
    }

    println!("🎯 Rendering {} icons into {}", targets.len(), base.display());
    println!();

    let summary = render_batch(&targets, base, &config.render_options())
        .context("Icon generation aborted")?;

    println!();
    println!("🎯 ✅ {} icons written", summary.total());
    for (platform, count) in &summary.per_platform {
        println!("   {:<8} {}", platform.to_string(), count);
    }

    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,launcher_icons=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
