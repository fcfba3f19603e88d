use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::config::{self, IconConfig};
use crate::error::IconError;
use crate::icon;
use crate::logger::{log_error, log_line};

/// Render the compass icon and write it as PNG to `output_path`.
pub fn generate(output_path: &Path) -> Result<PathBuf, IconError> {
    generate_with(&IconConfig::default(), output_path)
}

/// `generate` targeting `<project_root>/assets/icons/app_icon.png`.
pub fn generate_default() -> Result<PathBuf, IconError> {
    generate(&config::default_output_path())
}

/// Render with `cfg`, encode in memory, then create parent directories and write.
///
/// Encoding happens first so an unavailable encoder leaves nothing on disk.
/// An existing file at `output_path` is overwritten.
pub fn generate_with(cfg: &IconConfig, output_path: &Path) -> Result<PathBuf, IconError> {
    log_line(&format!("Rendering {}x{} icon", cfg.size, cfg.size));
    let img = icon::generate_icon(cfg);

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), cfg.format)
        .map_err(|e| IconError::from_encode(cfg.format, e))
        .inspect_err(|e| log_error("encode icon", e))?;
    log_line(&format!("Encoded {} bytes as {:?}", bytes.len(), cfg.format));

    let out = absolute(output_path)?;
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).inspect_err(|e| log_error("create icon directory", e))?;
    }
    fs::write(&out, &bytes).inspect_err(|e| log_error("write icon", e))?;
    log_line(&format!("Wrote {}", out.display()));
    Ok(out)
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Console text for the outcome of `generate`.
pub fn report<W: Write>(out: &mut W, result: &Result<PathBuf, IconError>) -> io::Result<()> {
    match result {
        Ok(path) => {
            writeln!(out, "Created simple icon at: {}", path.display())?;
            writeln!(out, "  You can replace this with a proper PNG converted from app_icon.svg")?;
        }
        Err(IconError::MissingCapability { format, .. }) => {
            writeln!(out, "Error: {:?} encoding support is not available in this build.", format)?;
            writeln!(out, "Enable the `png` feature of the `image` crate in Cargo.toml:")?;
            writeln!(out, "  image = {{ version = \"0.24\", default-features = false, features = [\"png\"] }}")?;
            writeln!(out)?;
            writeln!(out, "Alternatively, you can:")?;
            writeln!(out, "1. Convert app_icon.svg to PNG using an online tool")?;
            writeln!(out, "2. Or rebuild and rerun the generator:")?;
            writeln!(out, "  cargo run --bin genicon")?;
        }
        Err(e) => {
            writeln!(out, "Error creating icon: {}", e)?;
            writeln!(out)?;
            writeln!(out, "Please convert app_icon.svg to PNG manually using an online tool")?;
        }
    }
    Ok(())
}
