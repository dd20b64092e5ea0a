//! outbreak — headless run of the rust_epi simulator.
//!
//! Loads an optional JSON configuration (missing fields take their defaults),
//! runs a fixed number of reference frames and either prints a summary table
//! or streams the per-tick series as CSV to stdout.
//!
//! ```text
//! outbreak --seed 7 --frames 2000
//! outbreak --config town.json --csv > curve.csv
//! outbreak --masks-at 600 --log-level debug
//! ```

mod logging;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};

use epi_core::{EpidemicConfig, HealthStatus};
use epi_series::{CsvSink, MemorySeries, SeriesObserver, SeriesSink};
use epi_sim::{ConfigUpdate, Sim, SimBuilder, SimObserver, Snapshot, Transition, TransmissionEvent};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run (OS entropy when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Reference frames to simulate
    #[arg(short, long, default_value_t = 1_800)]
    frames: u64,

    /// Speed multiplier; each frame advances 16 ms × speed
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Override the population size
    #[arg(long)]
    population: Option<usize>,

    /// Turn masks on at this frame
    #[arg(long)]
    masks_at: Option<u64>,

    /// Stream the series as CSV to stdout instead of printing a summary
    #[arg(long)]
    csv: bool,

    /// Record every N-th tick
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

// ── Milestone logger ──────────────────────────────────────────────────────────

/// Wraps the series observer and logs notable moments of the outbreak.
struct Milestones<S: SeriesSink> {
    inner:            SeriesObserver<S>,
    first_quarantine: bool,
    first_death:      bool,
    peak_active:      usize,
    transmissions:    usize,
}

impl<S: SeriesSink> Milestones<S> {
    fn new(inner: SeriesObserver<S>) -> Self {
        Self { inner, first_quarantine: false, first_death: false, peak_active: 0, transmissions: 0 }
    }
}

impl<S: SeriesSink> SimObserver for Milestones<S> {
    fn on_initialized(&mut self, snapshot: &Snapshot<'_>) {
        info!("population ready: {}", snapshot.counts);
        self.inner.on_initialized(snapshot);
    }

    fn on_transition(&mut self, t: &Transition) {
        match t.to {
            HealthStatus::Quarantined if !self.first_quarantine => {
                self.first_quarantine = true;
                info!("first quarantine: {}", t.agent);
            }
            HealthStatus::Dead if !self.first_death => {
                self.first_death = true;
                info!("first death: {}", t.agent);
            }
            _ => {}
        }
    }

    fn on_transmission(&mut self, _event: &TransmissionEvent) {
        self.transmissions += 1;
    }

    fn on_tick_end(&mut self, snapshot: &Snapshot<'_>) {
        let active = snapshot.counts.active_cases();
        if active > self.peak_active {
            self.peak_active = active;
        }
        self.inner.on_tick_end(snapshot);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<EpidemicConfig> {
    let Some(path) = path else {
        return Ok(EpidemicConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn resolve_config(args: &Args) -> Result<EpidemicConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(n) = args.population {
        config.population_size = n;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Drive `sim` for the requested frames, applying the scheduled mask switch.
fn run<S: SeriesSink>(sim: &mut Sim, args: &Args, obs: &mut Milestones<S>) {
    for frame in 0..args.frames {
        if args.masks_at == Some(frame) {
            let next = EpidemicConfig { mask_enabled: true, ..sim.config().clone() };
            match sim.apply_config_update(next) {
                ConfigUpdate::Applied { .. } => info!("masks on at frame {frame}"),
                ConfigUpdate::RequiresReinitialization => warn!("mask switch refused at frame {frame}"),
            }
        }
        sim.run_frames(1, args.speed, obs);
    }
}

fn builder(config: EpidemicConfig, seed: Option<u64>) -> SimBuilder {
    match seed {
        Some(s) => SimBuilder::new(config).seed(s),
        None => SimBuilder::new(config),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = resolve_config(&args)?;
    info!(
        "population {} ({} index cases), p={}, frames {} at {}x",
        config.population_size,
        config.initial_infected_count,
        config.base_infection_probability,
        args.frames,
        args.speed,
    );

    let t0 = Instant::now();

    if args.csv {
        let sink = CsvSink::new(std::io::stdout().lock())?;
        let mut obs = Milestones::new(SeriesObserver::new(sink).every(args.every));
        let mut sim = builder(config, args.seed).build_observed(&mut obs);
        run(&mut sim, &args, &mut obs);
        obs.inner.finish()?;
        if let Some(e) = obs.inner.take_error() {
            return Err(e).context("writing series");
        }
        info!("done in {:.3} s, {} transmissions", t0.elapsed().as_secs_f64(), obs.transmissions);
        return Ok(());
    }

    let mut obs = Milestones::new(SeriesObserver::new(MemorySeries::new()).every(args.every));
    let mut sim = builder(config, args.seed).build_observed(&mut obs);
    run(&mut sim, &args, &mut obs);
    let elapsed = t0.elapsed();

    let snap = sim.snapshot();
    let fmt_r = |r: Option<f64>| r.map_or_else(|| "-".to_owned(), |v| format!("{v:.2}"));

    println!(
        "Simulation complete in {:.3} s ({} ticks, {:.1} s simulated)",
        elapsed.as_secs_f64(),
        snap.tick,
        sim.clock().elapsed_secs(),
    );
    println!();
    println!("{:<26} {:>8}", "Status", "Agents");
    println!("{}", "-".repeat(35));
    for (status, n) in snap.counts.iter() {
        println!("{:<26} {:>8}", status.as_str(), n);
    }
    println!("{}", "-".repeat(35));
    println!("{:<26} {:>8}", "transmissions", obs.transmissions);
    println!("{:<26} {:>8}", "peak active cases", obs.peak_active);
    if let Some(peak) = obs.inner.sink().peak_active() {
        println!("{:<26} {:>8}", "peak at tick", peak.tick);
    }
    println!("{:<26} {:>8}", "R0", fmt_r(snap.r0));
    println!("{:<26} {:>8}", "Rt", fmt_r(snap.rt));

    Ok(())
}
