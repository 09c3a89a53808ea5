mod config;

pub use config::{Config, DisplayConfig, LayoutConfig};

use std::path::PathBuf;

/// Returns the stagecal data directory.
///
/// `STAGECAL_HOME` wins when set. Otherwise this is `~/.config/stagecal/`,
/// or `~/.config/stagecal-dev/` with `STAGECAL_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("STAGECAL_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("STAGECAL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("stagecal-dev")
            } else {
                base_dir.join("stagecal")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
