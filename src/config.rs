//! Tunable desktop metrics and command-line options.
//!
//! The core is unit-agnostic: coordinates are plain integers. `Metrics::default()`
//! carries the pixel values a browser-style desktop uses, while
//! `Metrics::terminal()` scales the same behaviour down to terminal cells.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use crate::layout::{Position, Size};

/// Geometry constants shared by the snap calculator, the state store and the
/// interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Distance from an edge that arms snapping.
    pub snap_threshold: i32,
    /// Span along an edge treated as a corner rather than a full edge.
    pub corner_size: i32,
    /// Height of the reserved strip (taskbar) at the bottom of the viewport.
    pub reserved_strip: i32,
    pub title_bar_height: i32,
    /// Width of each title-bar control (minimize, maximize, close).
    pub button_width: i32,
    pub min_window: Size,
    /// Geometry for windows with nothing persisted and no explicit layout.
    pub default_position: Position,
    pub default_window: Size,
    pub double_click: Duration,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            snap_threshold: 10,
            corner_size: 200,
            reserved_strip: 48,
            title_bar_height: 32,
            button_width: 32,
            min_window: Size::new(100, 100),
            default_position: Position::new(100, 50),
            default_window: Size::new(480, 300),
            double_click: Duration::from_millis(500),
        }
    }
}

impl Metrics {
    /// Cell-based metrics for the terminal host.
    pub fn terminal() -> Self {
        Self {
            snap_threshold: 2,
            corner_size: 6,
            reserved_strip: 1,
            title_bar_height: 1,
            button_width: 3,
            min_window: Size::new(16, 5),
            default_position: Position::new(4, 2),
            default_window: Size::new(48, 14),
            double_click: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "snap-desk",
    version,
    about = "A desktop of snapping windows in your terminal.",
    long_about = indoc! {"
        A desktop of floating windows in your terminal.

        Drag a title bar to move a window. Release it against the left or
        right edge to tile it to half the screen, in a corner to take a
        quadrant, or against the top edge to maximize it. Double-click a title
        bar to toggle maximize. Window layouts are remembered between runs.

        Keys: 1-9 launch taskbar apps, p opens This PC, b opens the web
        browser, Tab cycles focus, m minimizes, x toggles maximize, w closes
        the focused window, Ctrl+Left/Right/Up snap it, q quits.
    "}
)]
pub struct Args {
    /// File used to persist window layouts.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Keep layouts in memory only.
    #[arg(long, conflicts_with = "store")]
    pub ephemeral: bool,

    /// Write logs to this file (logs are discarded otherwise).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Override the snap threshold, in cells.
    #[arg(long, value_name = "CELLS")]
    pub threshold: Option<u16>,

    /// Override the corner span, in cells.
    #[arg(long, value_name = "CELLS")]
    pub corner_size: Option<u16>,
}

impl Args {
    pub fn metrics(&self) -> Metrics {
        let mut metrics = Metrics::terminal();
        if let Some(threshold) = self.threshold {
            metrics.snap_threshold = i32::from(threshold.max(1));
        }
        if let Some(corner) = self.corner_size {
            metrics.corner_size = i32::from(corner);
        }
        metrics
    }

    /// Resolve the layout file, defaulting to the platform config directory.
    pub fn store_path(&self) -> Option<PathBuf> {
        if self.ephemeral {
            return None;
        }
        self.store.clone().or_else(|| {
            dirs::config_dir().map(|dir| dir.join("snap-desk").join("layouts.json"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_pixel_values() {
        let m = Metrics::default();
        assert_eq!(m.snap_threshold, 10);
        assert_eq!(m.corner_size, 200);
        assert_eq!(m.reserved_strip, 48);
        assert_eq!(m.min_window, Size::new(100, 100));
    }

    #[test]
    fn cli_overrides_apply_to_terminal_metrics() {
        let args = Args::parse_from(["snap-desk", "--threshold", "2", "--corner-size", "9"]);
        let m = args.metrics();
        assert_eq!(m.snap_threshold, 2);
        assert_eq!(m.corner_size, 9);
        assert_eq!(m.title_bar_height, Metrics::terminal().title_bar_height);
    }

    #[test]
    fn ephemeral_has_no_store_path() {
        let args = Args::parse_from(["snap-desk", "--ephemeral"]);
        assert!(args.store_path().is_none());
        let args = Args::parse_from(["snap-desk", "--store", "/tmp/x.json"]);
        assert_eq!(args.store_path(), Some(PathBuf::from("/tmp/x.json")));
    }
}
