mod canvas;
mod error;
mod icon;
mod models;
mod utils;

use models::GeneratorConfig;
use utils::{generate_icons, log_line, manifest_snippet, verify_icons};

fn main() {
    if let Err(e) = run() {
        eprintln!("Icon generation failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = GeneratorConfig::default();

    let icons = generate_icons(&config)?;
    verify_icons(&config.output_dir, &config.sizes)?;
    log_line(&format!("Verified {} icons in {}", icons.len(), config.output_dir.display()));

    println!("\nAdd this to manifest.json:\n{}", manifest_snippet(&icons)?);
    Ok(())
}
