//! Cyclogon viewer.
//!
//! A cyclogon is the curve traced by a vertex of a regular polygon rolling
//! without slipping along a straight line; as the side count grows it tends
//! to a cycloid. This binary samples the square's cyclogon once and draws it
//! as a red line strip until the window is closed.

mod viewer;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use cyclogon_curve::{sample, CurveSamples, CyclogonParams, DisplayScale, SampleDomain};
use cyclogon_engine::coords::OrthoProjection;
use cyclogon_engine::device::GpuInit;
use cyclogon_engine::logging::{init_logging, LoggingConfig};
use cyclogon_engine::paint::Color;
use cyclogon_engine::render::ShaderSources;
use cyclogon_engine::window::{Runtime, RuntimeConfig};

use viewer::CurveViewer;

const TITLE: &str = "cyclogon(x)";
const SCREEN_WIDTH: f64 = 1000.0;
const SCREEN_HEIGHT: f64 = 900.0;

const XMIN: f64 = -20.0;
const XMAX: f64 = 20.0;
const STEP: f64 = 0.1;

const SCALE: DisplayScale = DisplayScale { x: 3.0, y: 0.2 };
const CURVE_COLOR: Color = Color::RED;
const PROJECTION: OrthoProjection = OrthoProjection::new(-20.0, 20.0, -1.0, 1.5);

const SHADER_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders");
const SHADER_NAME: &str = "curve";

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(-1);
    }
}

fn run() -> Result<()> {
    let samples = sample_curve()?;
    let shaders = ShaderSources::from_dir(SHADER_DIR, SHADER_NAME)?;

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(SCREEN_WIDTH, SCREEN_HEIGHT),
    };

    Runtime::run(
        config,
        GpuInit::default(),
        CurveViewer::new(samples, shaders, PROJECTION),
    )
}

fn sample_curve() -> Result<CurveSamples> {
    let domain = SampleDomain::new(XMIN, XMAX, STEP).context("invalid sample domain")?;
    let samples = sample(&CyclogonParams::default(), domain, SCALE, CURVE_COLOR.to_rgb());

    log::info!("n = {}", samples.len());
    log::info!("n bytes = {}", samples.byte_len());
    log::info!("nv = {}", samples.points().len() * 3);
    log::info!("nc = {}", samples.colors().len() * 3);

    Ok(samples)
}
