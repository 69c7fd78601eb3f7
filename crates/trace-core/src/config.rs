use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Rgb;
use crate::error::ConfigError;

/// Everything that controls which files are read and how they are laid out.
///
/// Every field has a serde default, so a TOML file only needs to name what it
/// overrides. The `offsets` and `colors` tables are replaced as a whole when
/// present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Directory holding `<category>_<run>.txt` sample files.
    #[serde(default = "TraceConfig::default_directory")]
    pub directory: PathBuf,
    /// Runs `0..run_count` are scanned.
    #[serde(default = "TraceConfig::default_run_count")]
    pub run_count: u32,
    /// Game ticks reserved on the x-axis per run.
    #[serde(default = "TraceConfig::default_scale")]
    pub scale: u64,
    /// Keep every `stride`-th token of a line.
    #[serde(default = "TraceConfig::default_stride")]
    pub stride: usize,
    #[serde(default = "TraceConfig::default_tick_step")]
    pub tick_step: u64,
    /// Only every `tick_thin`-th multiple of `tick_step` gets a label.
    #[serde(default = "TraceConfig::default_tick_thin")]
    pub tick_thin: u64,
    /// Opacity of every trace and of its legend swatch.
    #[serde(default = "TraceConfig::default_trace_alpha")]
    pub trace_alpha: f32,
    /// Categories to search for, with the y-offset added to their samples.
    #[serde(default = "TraceConfig::default_offsets")]
    pub offsets: BTreeMap<String, i64>,
    /// Display colors. Also defines the legend entries.
    #[serde(default = "TraceConfig::default_colors")]
    pub colors: BTreeMap<String, String>,
}

impl TraceConfig {
    fn default_directory() -> PathBuf {
        PathBuf::from("audio/img")
    }
    fn default_offsets() -> BTreeMap<String, i64> {
        [
            ("shoot", 0),
            ("alienBomb", 10_000),
            ("killBaseAlien", -10_000),
            ("killBaseSam", 20_000),
            ("killAlien", -20_000),
        ]
        .into_iter()
        .map(|(name, offset)| (name.to_string(), offset))
        .collect()
    }
    fn default_colors() -> BTreeMap<String, String> {
        [
            ("shoot", "r"),
            ("alienBomb", "g"),
            ("killBaseSam", "orange"),
            ("killAlien", "b"),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color.to_string()))
        .collect()
    }
    fn default_run_count() -> u32 {
        50
    }
    fn default_scale() -> u64 {
        200
    }
    fn default_stride() -> usize {
        10
    }
    fn default_tick_step() -> u64 {
        100
    }
    fn default_tick_thin() -> u64 {
        10
    }
    fn default_trace_alpha() -> f32 {
        0.2
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            directory: Self::default_directory(),
            offsets: Self::default_offsets(),
            colors: Self::default_colors(),
            run_count: Self::default_run_count(),
            scale: Self::default_scale(),
            stride: Self::default_stride(),
            tick_step: Self::default_tick_step(),
            tick_thin: Self::default_tick_thin(),
            trace_alpha: Self::default_trace_alpha(),
        }
    }
}

impl TraceConfig {
    /// Read `path` if it exists, otherwise fall back to the defaults. A file
    /// that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Check numeric parameters and color strings. Categories that are
    /// searched but have no color are allowed and reported with a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nonzero = [
            ("run_count", self.run_count as u64),
            ("scale", self.scale),
            ("stride", self.stride as u64),
            ("tick_step", self.tick_step),
            ("tick_thin", self.tick_thin),
        ];
        if let Some((name, _)) = nonzero.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::Zero(*name));
        }

        if !(0.0..=1.0).contains(&self.trace_alpha) {
            return Err(ConfigError::AlphaOutOfRange {
                name: "trace_alpha",
                value: self.trace_alpha,
            });
        }

        self.palette()?;

        let unplottable = self.unplottable();
        if !unplottable.is_empty() {
            warn!(
                "categories without a color are searched but cannot be plotted: {}",
                unplottable.join(", ")
            );
        }
        Ok(())
    }

    /// Parsed colors keyed by category.
    pub fn palette(&self) -> Result<BTreeMap<String, Rgb>, ConfigError> {
        self.colors
            .iter()
            .map(|(category, color)| {
                color
                    .parse::<Rgb>()
                    .map(|rgb| (category.clone(), rgb))
                    .map_err(|source| ConfigError::InvalidColor {
                        category: category.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Categories with an offset but no color.
    pub fn unplottable(&self) -> Vec<&str> {
        self.offsets
            .keys()
            .filter(|name| !self.colors.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Where the sample file for `category` in `run` is expected.
    pub fn sample_path(&self, category: &str, run: u32) -> PathBuf {
        self.directory.join(format!("{category}_{run}.txt"))
    }
}
