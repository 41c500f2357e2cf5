//! The `Sim` struct and its tick loop.

use std::fmt;

use tracing::{debug, error, info};

use fa_agent::{HouseholdStore, PopulationDump};
use fa_behavior::{Government, Household, InfluenceParams, StepContext, Steppable};
use fa_core::{AgentId, SimRng, Tick};
use fa_spatial::SocialNetwork;

use crate::config::ActivationOrder;
use crate::{FloodShock, Landscape, ModelConfig, SimError, SimObserver, SimResult, TickSummary};

// ── Scheduled agents ──────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Household,
    Government,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Household  => "household",
            AgentKind::Government => "government",
        }
    }
}

/// One entry of a tick's activation order.  Household and government ids
/// are separate spaces, so both parts are needed to identify an agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Activation {
    pub kind: AgentKind,
    pub id:   AgentId,
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.id)
    }
}

/// An agent registered with the scheduler.
pub struct Scheduled {
    pub kind:  AgentKind,
    pub agent: Box<dyn Steppable>,
}

impl Scheduled {
    pub fn new(kind: AgentKind, id: AgentId) -> Self {
        let agent: Box<dyn Steppable> = match kind {
            AgentKind::Household  => Box::new(Household::new(id)),
            AgentKind::Government => Box::new(Government::new(id)),
        };
        Self { kind, agent }
    }

    pub fn activation(&self) -> Activation {
        Activation { kind: self.kind, id: self.agent.agent_id() }
    }
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick:
///
/// 1. **Flood shock**: on the configured tick, actual depth and damage are
///    written for every household before anyone steps.
/// 2. **Activation order**: ascending (households, then governments) or a
///    fresh seeded shuffle.
/// 3. **Steps**: each agent steps to completion, one at a time.  Beliefs
///    are read live, so later households see earlier revisions.
/// 4. **Summary and snapshot** are reported to the observer.
///
/// A failing step aborts the run with [`SimError::StepFault`], which carries
/// a dump of every household row.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config:     ModelConfig,
    pub landscape:  Landscape,
    pub network:    SocialNetwork,
    pub households: HouseholdStore,
    pub agents:     Vec<Scheduled>,
    pub params:     InfluenceParams,
    pub shock:      Option<FloodShock>,

    pub(crate) activation_rng: SimRng,
    pub(crate) shock_rng:      SimRng,
    pub(crate) current_tick:   Tick,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// The next tick to be processed.
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn end_tick(&self) -> Tick {
        Tick(self.config.run.total_ticks)
    }

    /// Run from the current tick to `run.total_ticks`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(from = %self.current_tick, to = %self.end_tick(), "run started");
        while self.current_tick < self.end_tick() {
            self.advance(observer)?;
        }
        observer.on_sim_end(self.current_tick);
        info!(
            final_tick = %self.current_tick,
            adapted = self.households.adapted_count(),
            mean_belief = self.households.mean_belief(),
            "run finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let target = self.current_tick + n;
        while self.current_tick < target {
            self.advance(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now, observer)?;
        observer.on_tick_end(&summary);

        let interval = self.config.run.output_interval_ticks;
        if now.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.households);
        }
        self.current_tick = now.next();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickSummary> {
        // ── Phase 1: flood shock ──────────────────────────────────────────
        let mut shocked = false;
        if let Some(shock) = self.shock.filter(|s| s.is_due(now)) {
            let flooded = shock.apply(&mut self.households, &self.landscape.exposure, &mut self.shock_rng);
            info!(tick = %now, flooded, "flood shock applied");
            observer.on_flood_shock(now, flooded);
            shocked = true;
        }

        // ── Phase 2: activation order ─────────────────────────────────────
        let order = self.activation_order();
        let listed: Vec<Activation> = order.iter().map(|&i| self.agents[i].activation()).collect();
        observer.on_activation_order(now, &listed);

        // ── Phase 3: steps ────────────────────────────────────────────────
        //
        // Disjoint field borrows: the context reads network and params while
        // each step writes the household store.
        let ctx = StepContext::new(now, &self.network, &self.params);
        let households = &mut self.households;
        for &i in &order {
            match self.agents[i].agent.step(&ctx, households) {
                Ok(Some(report)) => observer.on_household_step(&report),
                Ok(None) => {}
                Err(source) => {
                    let agent = self.agents[i].activation();
                    error!(tick = %now, %agent, error = %source, "step failed; aborting run");
                    let dump = PopulationDump { tick: now, households: households.snapshots() };
                    return Err(SimError::StepFault { tick: now, source, dump: Box::new(dump) });
                }
            }
        }

        let summary = TickSummary {
            tick:               now,
            stepped:            order.len(),
            adapted_households: self.households.adapted_count(),
            mean_belief:        self.households.mean_belief(),
            flood_shock:        shocked,
        };
        debug!(
            tick = %now,
            stepped = summary.stepped,
            adapted = summary.adapted_households,
            mean_belief = summary.mean_belief,
            "tick complete"
        );
        Ok(summary)
    }

    /// Indices into `self.agents` in the order they step this tick.
    fn activation_order(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.agents.len()).collect();
        if self.config.run.activation == ActivationOrder::Shuffled {
            self.activation_rng.shuffle(&mut order);
        }
        order
    }
}
