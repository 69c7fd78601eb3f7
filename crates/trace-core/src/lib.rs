pub mod color;
pub mod config;
pub mod error;
pub mod sample_file;
pub mod ticks;

use std::collections::BTreeMap;

use tracing::{debug, info, trace};

pub use color::Rgb;
pub use config::TraceConfig;
pub use error::{ConfigError, TraceError};
pub use ticks::Tick;

pub const X_AXIS_LABEL: &str = "Game tick";
pub const Y_AXIS_LABEL: &str = "Amplitude";

// ---------------------------------------------------------------------------
// Shared interface types: the viewer and the summary printer read these
// ---------------------------------------------------------------------------

/// One series placed on the game-tick axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub run: u32,
    pub category: String,
    pub color: Rgb,
    /// x of the first value; the rest follow at consecutive ticks.
    pub x_start: u64,
    /// Offset-adjusted amplitudes.
    pub values: Vec<f64>,
}

impl Trace {
    /// One past the last x covered by this trace.
    pub fn x_end(&self) -> u64 {
        self.x_start + self.values.len() as u64
    }

    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(k, &y)| [(self.x_start + k as u64) as f64, y])
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub color: Rgb,
}

/// Per-category counters shown next to the plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    pub offset: i64,
    pub files: usize,
    pub series: usize,
}

/// Everything needed to draw the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceFigure {
    pub traces: Vec<Trace>,
    /// One entry per colored category, whether or not it has data.
    pub legend: Vec<LegendEntry>,
    pub ticks: Vec<Tick>,
    /// Largest `x_end` over all traces; 0 when nothing was found.
    pub max_x: u64,
    pub runs_scanned: u32,
    pub files_read: usize,
    /// Keyed by every searched category.
    pub stats: BTreeMap<String, CategoryStats>,
}

/// Scan runs `0..run_count` for every searched category, parse what exists and
/// lay the series out on the tick axis.
///
/// The pass is all-or-nothing: the first unreadable file, bad token or
/// colorless category with data aborts it.
pub fn compute(config: &TraceConfig) -> Result<TraceFigure, TraceError> {
    let palette = config.palette()?;

    let mut traces = Vec::new();
    let mut max_x = 0u64;
    let mut files_read = 0usize;
    let mut stats: BTreeMap<String, CategoryStats> = config
        .offsets
        .iter()
        .map(|(category, &offset)| {
            let entry = CategoryStats {
                offset,
                ..CategoryStats::default()
            };
            (category.clone(), entry)
        })
        .collect();

    for run in 0..config.run_count {
        let x_start = config.scale * run as u64;

        for (category, &offset) in &config.offsets {
            let path = config.sample_path(category, run);
            if !path.is_file() {
                trace!("no sample file {}", path.display());
                continue;
            }

            let color = palette
                .get(category)
                .copied()
                .ok_or_else(|| TraceError::UnmappedColor {
                    category: category.clone(),
                    path: path.clone(),
                })?;
            let series = sample_file::read_series(&path, config.stride, offset)?;
            debug!("{}: {} series", path.display(), series.len());

            files_read += 1;
            if let Some(entry) = stats.get_mut(category) {
                entry.files += 1;
                entry.series += series.len();
            }

            for values in series {
                let trace = Trace {
                    run,
                    category: category.clone(),
                    color,
                    x_start,
                    values,
                };
                max_x = max_x.max(trace.x_end());
                traces.push(trace);
            }
        }
    }

    let legend = palette
        .into_iter()
        .map(|(category, color)| LegendEntry { category, color })
        .collect();
    let ticks = ticks::compute_ticks(max_x, config.tick_step, config.tick_thin);

    info!(
        "read {files_read} files from {} ({} traces, max tick {max_x})",
        config.directory.display(),
        traces.len()
    );

    Ok(TraceFigure {
        traces,
        legend,
        ticks,
        max_x,
        runs_scanned: config.run_count,
        files_read,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_points_start_at_run_offset() {
        let trace = Trace {
            run: 3,
            category: "shoot".into(),
            color: Rgb::new(255, 0, 0),
            x_start: 600,
            values: vec![1.0, 2.0, 3.0],
        };
        assert_eq!(trace.x_end(), 603);
        assert_eq!(
            trace.points(),
            vec![[600.0, 1.0], [601.0, 2.0], [602.0, 3.0]]
        );
    }

    #[test]
    fn test_empty_trace_still_has_an_end() {
        let trace = Trace {
            run: 2,
            category: "shoot".into(),
            color: Rgb::new(255, 0, 0),
            x_start: 400,
            values: vec![],
        };
        assert_eq!(trace.x_end(), 400);
        assert!(trace.points().is_empty());
    }
}
