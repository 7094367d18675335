use crate::error::{IconError, Result};
use crate::icon::render_icon;
use crate::models::{GeneratedIcon, GeneratorConfig, ManifestSnippet};
use chrono::Local;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Prints a progress line prefixed with the local time.
pub fn log_line(message: &str) {
    println!("[{}] {}", Local::now().format("%H:%M:%S"), message);
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Renders every configured size and saves it under the output directory.
///
/// All sizes are checked before the directory is created, so an invalid size
/// leaves the filesystem untouched. Existing files are overwritten.
pub fn generate_icons(config: &GeneratorConfig) -> Result<Vec<GeneratedIcon>> {
    let images = config
        .sizes
        .iter()
        .map(|&size| render_icon(size).map(|image| (size, image)))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&config.output_dir).map_err(|source| IconError::CreateDir {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut generated = Vec::with_capacity(images.len());
    for (size, image) in images {
        let path = config.output_dir.join(icon_file_name(size));
        image.save(&path).map_err(|source| IconError::Save {
            path: path.clone(),
            source,
        })?;
        log_line(&format!("Created icon: {} ({size}x{size})", path.display()));
        generated.push(GeneratedIcon { size, path });
    }

    log_line("All icons created.");
    Ok(generated)
}

/// Re-opens every expected icon and checks that its dimensions match its name.
pub fn verify_icons(dir: &Path, sizes: &[u32]) -> Result<()> {
    for &size in sizes {
        let path = dir.join(icon_file_name(size));
        let image = image::open(&path).map_err(|source| IconError::Open {
            path: path.clone(),
            source,
        })?;
        let actual = (image.width(), image.height());
        if actual != (size, size) {
            return Err(IconError::DimensionMismatch {
                path,
                expected: size,
                actual,
            });
        }
    }
    Ok(())
}

/// Builds the `"icons"` object of a browser extension manifest.
///
/// Each entry is `<icon dir name>/<file name>`, relative to the extension root,
/// whatever the output directory's absolute location is.
pub fn manifest_icons(icons: &[GeneratedIcon]) -> Value {
    let entries = icons
        .iter()
        .map(|icon| (icon.size.to_string(), Value::String(manifest_path(&icon.path))))
        .collect::<Map<_, _>>();
    Value::Object(entries)
}

// Manifest paths always use forward slashes.
fn manifest_path(path: &Path) -> String {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy())
        .unwrap_or_default();
    match path.parent().and_then(Path::file_name) {
        Some(dir) => format!("{}/{}", dir.to_string_lossy(), file),
        None => file.into_owned(),
    }
}

/// Pretty JSON for pasting into `manifest.json`.
pub fn manifest_snippet(icons: &[GeneratedIcon]) -> Result<String> {
    let snippet = ManifestSnippet {
        icons: manifest_icons(icons),
    };
    Ok(serde_json::to_string_pretty(&snippet)?)
}
