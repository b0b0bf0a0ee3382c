use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use iconforge::{IconConfig, IconGenerator};

/// Generate the web app's PNG icon set
#[derive(Parser, Debug)]
#[command(name = "iconforge", version, about)]
struct Cli {
    /// Directory the icons are written to (created if missing)
    #[arg(long, default_value = "public")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Default filter is "warn" if RUST_LOG is not set; stdout stays reserved
    // for the progress lines.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = IconConfig {
        output_dir: cli.out_dir,
        ..Default::default()
    };
    info!("generating {:?} into {}", config.sizes, config.output_dir.display());

    let generator = IconGenerator::new(config);
    generator
        .run(|icon| println!("Created {}", icon.file_name))
        .context("icon generation failed")?;

    println!("All icons generated!");
    Ok(())
}
