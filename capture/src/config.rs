//! Capture configuration.
//!
//! Two layers, in the style of the workspace's other config loaders:
//! hardcoded defaults, then an optional TOML file whose present fields
//! override them. Serde defaults keep a partial file valid.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CaptureError;

/// Configuration for a capture run (batch or single).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    /// Dev server serving the card UI.
    pub base_url: String,
    /// Directory the raw per-day PNGs are written to.
    pub raw_dir: PathBuf,
    /// Year label used in output filenames.
    pub year_label: String,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Ultra-high DPI capture; 3x matches the print-grade export target.
    pub device_scale_factor: f64,
    /// Settle time after the card appears. A heuristic, not a
    /// render-complete signal; raising it trades speed for fewer
    /// font/animation artifacts.
    pub render_wait_ms: u64,
    /// Upper bound on a single navigation.
    pub nav_timeout_ms: u64,
    /// Upper bound on waiting for the card element to exist.
    pub card_wait_ms: u64,
    /// First month of a batch run (0-indexed, inclusive).
    pub start_month: u32,
    /// Last month of a batch run (0-indexed, inclusive).
    pub end_month: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173".to_string(),
            raw_dir: PathBuf::from("dist/frozen_light/raw"),
            year_label: "2026".to_string(),
            viewport_width: 3840,
            viewport_height: 2160,
            device_scale_factor: 3.0,
            render_wait_ms: 2500,
            nav_timeout_ms: 60_000,
            card_wait_ms: 30_000,
            start_month: 0,
            end_month: 11,
        }
    }
}

impl CaptureConfig {
    /// Defaults overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, CaptureError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Export URL for one day: `{base}/?month={m}&day={d}&mode=export`.
    pub fn day_url(&self, month: u32, day: u32) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/?month={month}&day={day}&mode=export")
    }

    /// Output filename: `<year>_<MM>_<DD>.png`, 1-indexed zero-padded month.
    pub fn day_filename(&self, month: u32, day: u32) -> String {
        format!("{}_{:02}_{day:02}.png", self.year_label, month + 1)
    }

    /// Full output path for one day.
    pub fn day_path(&self, month: u32, day: u32) -> PathBuf {
        self.raw_dir.join(self.day_filename(month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_export_engine() {
        let config = CaptureConfig::default();
        assert_eq!(config.base_url, "http://localhost:5173");
        assert_eq!(config.viewport_width, 3840);
        assert_eq!(config.viewport_height, 2160);
        assert_eq!(config.device_scale_factor, 3.0);
        assert_eq!(config.render_wait_ms, 2500);
        assert_eq!(config.start_month, 0);
        assert_eq!(config.end_month, 11);
    }

    #[test]
    fn day_url_is_export_mode() {
        let config = CaptureConfig::default();
        assert_eq!(
            config.day_url(2, 9),
            "http://localhost:5173/?month=2&day=9&mode=export"
        );
    }

    #[test]
    fn filenames_are_one_indexed_and_padded() {
        let config = CaptureConfig::default();
        assert_eq!(config.day_filename(0, 1), "2026_01_01.png");
        assert_eq!(config.day_filename(11, 31), "2026_12_31.png");
    }

    #[test]
    fn partial_toml_overlays_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.toml");
        std::fs::write(&path, "render_wait_ms = 100\nend_month = 2\n").unwrap();

        let config = CaptureConfig::load(Some(&path)).unwrap();
        assert_eq!(config.render_wait_ms, 100);
        assert_eq!(config.end_month, 2);
        assert_eq!(config.viewport_width, 3840);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.toml");
        std::fs::write(&path, "render_wiat_ms = 100\n").unwrap();
        assert!(CaptureConfig::load(Some(&path)).is_err());
    }
}
