// Copyright 2025 the Hemicycle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a toggling proportion chart and writes every rendered frame as SVG.
//!
//! ```text
//! RUST_LOG=debug cargo run -p hemicycle_demo -- --kind rose --legend --seconds 6
//! ```

mod svg;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use hemicycle_charts::PieKind;
use hemicycle_panel::{
    ChartEvent, ChartEvents, ChartOptions, PanelData, ProportionChart, SceneBackend, Theme,
};
use kurbo::Size;
use log::{debug, info, warn};

use crate::svg::SvgSink;

#[derive(Parser, Debug)]
#[command(name = "hemicycle_demo", version, about, long_about = None)]
struct Cli {
    /// Panel data as JSON; a built-in sample is used when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Chart options as JSON; flags below override individual fields
    #[arg(long)]
    options: Option<PathBuf>,

    /// Directory the SVG frames are written to
    #[arg(short, long, default_value = "hemicycle_frames")]
    out_dir: PathBuf,

    /// Seconds of timeline to replay
    #[arg(long, default_value_t = 8)]
    seconds: u64,

    /// Timeline step in milliseconds
    #[arg(long, default_value_t = 500)]
    step_ms: u64,

    /// Sector shape of the pie representation
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Color theme
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Draw a legend along the bottom edge
    #[arg(long)]
    legend: bool,

    /// View width
    #[arg(long, default_value_t = 500.0)]
    width: f64,

    /// View height
    #[arg(long, default_value_t = 500.0)]
    height: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Pie,
    Donut,
    Rose,
}

impl From<KindArg> for PieKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Pie => Self::Pie,
            KindArg::Donut => Self::Donut,
            KindArg::Rose => Self::Rose,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = load_options(&cli)?;
    let data = match &cli.data {
        Some(path) => read_json::<PanelData>(path)?,
        None => sample_data(),
    };
    let step = Duration::from_millis(cli.step_ms.max(1));
    let view = Size::new(cli.width, cli.height);

    let out_dir = cli.out_dir.as_path();
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let backend = SceneBackend::new(SvgSink::new(view), view);
    let mut chart = ProportionChart::mount(Some(backend), options)?;

    let mut events = ChartEvents::new();
    events.push(ChartEvent::DataUpdated(data));
    for outcome in events.dispatch(&mut chart) {
        if let Err(err) = outcome {
            warn!("panel update rejected: {err}");
        }
    }

    let mut written = write_frames(&mut chart, out_dir, 0)?;
    let mut t = Duration::ZERO;
    let end = Duration::from_secs(cli.seconds);
    while t < end {
        t += step;
        for outcome in chart.advance(step)? {
            debug!("{:.1}s: {outcome:?}", t.as_secs_f64());
        }
        written = write_frames(&mut chart, out_dir, written)?;
    }

    info!("wrote {written} frames to {}", out_dir.display());
    println!("wrote {written} frames to {}", out_dir.display());
    Ok(())
}

fn load_options(cli: &Cli) -> anyhow::Result<ChartOptions> {
    let mut options = match &cli.options {
        Some(path) => read_json::<ChartOptions>(path)?,
        None => ChartOptions::default(),
    };
    if let Some(kind) = cli.kind {
        options = options.with_kind(kind.into());
    }
    if let Some(theme) = cli.theme {
        options = options.with_theme(theme.into());
    }
    if cli.legend {
        options = options.with_legend(true);
    }
    Ok(options)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Drains the frames the sink rendered since the last call into numbered SVG files.
fn write_frames(
    chart: &mut ProportionChart<SceneBackend<SvgSink>>,
    out_dir: &Path,
    first_index: usize,
) -> anyhow::Result<usize> {
    let mut index = first_index;
    for frame in chart.backend_mut().sink_mut().take_frames() {
        let path = out_dir.join(format!("frame_{index:03}.svg"));
        fs::write(&path, &frame.svg).with_context(|| format!("writing {}", path.display()))?;
        match frame.transition {
            Some(d) => debug!("{}: morph over {d:?}", path.display()),
            None => debug!("{}", path.display()),
        }
        index += 1;
    }
    Ok(index)
}

fn sample_data() -> PanelData {
    PanelData::from_columns(
        [112.0, 87.0, 54.0, 31.0, 16.0],
        [
            "Progressive",
            "Conservative",
            "Green",
            "Liberal",
            "Independent",
        ],
    )
}
