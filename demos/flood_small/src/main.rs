//! flood_small: smallest end-to-end run of the flood adaptation model.
//!
//! Places households in a synthetic river valley, ties them into a
//! small-world social network, and lets beliefs about flood risk spread
//! until the configured tick count.  A flood hits part-way through.
//!
//! ```text
//! RUST_LOG=info cargo run -p flood_small -- --config demos/flood_small/flood_small.toml
//! ```

mod landscape;
mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fa_agent::HouseholdStore;
use fa_behavior::StepReport;
use fa_core::{SimRng, Tick};
use fa_output::{CsvWriter, OutputWriter, SimOutputObserver};
use fa_sim::{ModelConfig, SimBuilder, SimObserver, TickSummary};

use network::small_world;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "flood_small", about = "Run the flood adaptation model on a synthetic river valley")]
struct Args {
    /// TOML configuration; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override run.total_ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Override run.seed
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for CSV files and summary.json
    #[arg(long, default_value = "output/flood_small")]
    out: PathBuf,

    /// Also write friend_weights.csv
    #[arg(long)]
    weights: bool,

    /// Ties per household in the ring lattice before rewiring
    #[arg(long, default_value_t = 4)]
    degree: usize,

    /// Probability of rewiring each lattice tie
    #[arg(long, default_value_t = 0.1)]
    rewire: f64,
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and keeps per-tick series for the summary.
struct TrackingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    adapted:       Vec<usize>,
    mean_belief:   Vec<f64>,
    flooded:       Option<(Tick, usize)>,
    snapshot_rows: usize,
}

impl<W: OutputWriter> TrackingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, adapted: Vec::new(), mean_belief: Vec::new(), flooded: None, snapshot_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for TrackingObserver<W> {
    fn on_flood_shock(&mut self, tick: Tick, flooded: usize) {
        self.flooded = Some((tick, flooded));
    }

    fn on_household_step(&mut self, report: &StepReport) {
        if report.newly_adapted {
            info!(agent = %report.agent, tick = %report.tick, belief = report.belief_after, "household adapted");
        }
        self.inner.on_household_step(report);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.adapted.push(summary.adapted_households);
        self.mean_belief.push(summary.mean_belief);
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, households: &HouseholdStore) {
        self.snapshot_rows += households.count;
        self.inner.on_snapshot(tick, households);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

#[derive(Serialize)]
struct RunSummary {
    seed:                  u64,
    ticks:                 u64,
    households:            usize,
    ties:                  usize,
    in_floodplain:         usize,
    flood_tick:            Option<u64>,
    flooded_households:    Option<usize>,
    adapted_final:         usize,
    adapted_by_tick:       Vec<usize>,
    mean_belief_by_tick:   Vec<f64>,
    elapsed_secs:          f64,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Configuration.
    let mut config = match &args.config {
        Some(path) => ModelConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ModelConfig::default(),
    };
    if let Some(t) = args.ticks {
        config.run.total_ticks = t;
    }
    if let Some(s) = args.seed {
        config.run.seed = s;
    }
    config.validate()?;

    let seed = config.run.seed;
    let ticks = config.run.total_ticks;
    let households = config.population.households;

    // 2. Landscape and social network.
    let land = landscape::build(&config.exposure)?;
    let network = small_world(households, args.degree, args.rewire, &mut SimRng::new(seed).child(3));
    let ties = network.tie_count();
    info!(households, ties, "small-world network built");

    // 3. Sim.
    let mut sim = SimBuilder::new(config, land, network).build()?;
    let in_floodplain = sim.households.in_floodplain.iter().filter(|&&f| f).count();

    // 4. Output.
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let writer = CsvWriter::new(&args.out)?;
    let mut obs = TrackingObserver::new(SimOutputObserver::new(writer).with_friend_weights(args.weights));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 6. Summary.
    let summary = RunSummary {
        seed,
        ticks,
        households,
        ties,
        in_floodplain,
        flood_tick: obs.flooded.map(|(t, _)| t.0),
        flooded_households: obs.flooded.map(|(_, n)| n),
        adapted_final: sim.households.adapted_count(),
        adapted_by_tick: obs.adapted.clone(),
        mean_belief_by_tick: obs.mean_belief.clone(),
        elapsed_secs: elapsed.as_secs_f64(),
    };
    let summary_path = args.out.join("summary.json");
    std::fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("writing {}", summary_path.display()))?;

    println!("Simulation complete in {:.3} s", summary.elapsed_secs);
    println!("  household_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv      : {} rows", obs.adapted.len());
    println!(
        "  adapted households      : {} of {} ({} in floodplain)",
        summary.adapted_final, households, in_floodplain
    );
    println!();

    // 7. Final household table.
    println!(
        "{:<8} {:<10} {:>9} {:>9} {:>8} {:<8}",
        "House", "Floodplain", "Depth est", "Depth act", "Belief", "Adapted"
    );
    println!("{}", "-".repeat(58));
    for h in sim.households.snapshots() {
        println!(
            "{:<8} {:<10} {:>9.3} {:>9.3} {:>8.3} {:<8}",
            h.id.0,
            if h.in_floodplain { "yes" } else { "no" },
            h.flood_depth_estimated,
            h.flood_depth_actual,
            h.belief,
            if h.is_adapted() { "yes" } else { "no" },
        );
    }

    Ok(())
}
