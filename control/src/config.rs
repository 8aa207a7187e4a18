//! Control-server configuration.

use std::path::PathBuf;

use serde::Deserialize;

fn almanac_exe() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| "almanac".to_string())
}

/// Commands the server spawns and where it expects their output.
///
/// The command vectors are `[program, args...]`; date arguments are
/// appended for single captures. Defaults re-invoke the `almanac` binary
/// itself. Injectable so tests can substitute harmless commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlConfig {
    pub batch_command: Vec<String>,
    pub capture_command: Vec<String>,
    /// Must match the capture side's `raw_dir`.
    pub raw_dir: PathBuf,
    /// Must match the capture side's `year_label`.
    pub year_label: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        let exe = almanac_exe();
        Self {
            batch_command: vec![exe.clone(), "batch".to_string()],
            capture_command: vec![exe, "capture".to_string()],
            raw_dir: PathBuf::from("dist/frozen_light/raw"),
            year_label: "2026".to_string(),
        }
    }
}

impl ControlConfig {
    /// Defaults overlaid with `path` when given.
    pub fn load(path: Option<&std::path::Path>) -> std::io::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Expected output file for a single capture of `(month, day)`.
    pub fn day_path(&self, month: u32, day: u32) -> PathBuf {
        self.raw_dir
            .join(format!("{}_{:02}_{day:02}.png", self.year_label, month + 1))
    }

    pub fn day_filename(&self, month: u32, day: u32) -> String {
        format!("{}_{:02}_{day:02}.png", self.year_label, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn day_path_is_one_indexed_and_padded() {
        let config = ControlConfig {
            raw_dir: PathBuf::from("/out"),
            ..ControlConfig::default()
        };
        assert_eq!(config.day_path(0, 5), PathBuf::from("/out/2026_01_05.png"));
        assert_eq!(config.day_filename(11, 31), "2026_12_31.png");
    }
}
