//! Run configuration and orchestration: spawn the agents, join them, hand
//! back the finished canvas.

use std::sync::Barrier;
use std::thread;
use std::time::Instant;

use parking_lot::Mutex;
use tracing::info;

use crate::agent::Agent;
use crate::allocator::UniqueAllocator;
use crate::canvas::{Canvas, Pixel};
use crate::color::Color;
use crate::error::{Error, Result};

/// Default canvas edge length in cells.
pub const DEFAULT_CANVAS_SIZE: u32 = 512;

/// Configuration for one painting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    /// Number of agents painting concurrently.
    pub agents: u32,
    /// Per-agent step budget. Steps are loop iterations, not successful
    /// claims; a backtrack costs a step too.
    pub steps: u64,
    /// Canvas edge length in cells.
    pub canvas_size: u32,
}

impl PaintOptions {
    /// Options for `agents` painters with a budget of `steps` each, on the
    /// default 512x512 canvas.
    #[must_use]
    pub const fn new(agents: u32, steps: u64) -> Self {
        Self {
            agents,
            steps,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    /// Set the canvas edge length (builder pattern).
    #[must_use]
    pub const fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = size;
        self
    }

    /// Total number of cells on the configured canvas.
    #[inline]
    const fn cell_limit(&self) -> u64 {
        (self.canvas_size as u64) * (self.canvas_size as u64)
    }

    /// Reject configurations the painter cannot honor: zero agents, or more
    /// agents than there are cells to seed.
    pub fn validate(&self) -> Result<()> {
        let limit = self.cell_limit();
        if self.agents == 0 || u64::from(self.agents) > limit {
            return Err(Error::InvalidAgentCount {
                agents: i64::from(self.agents),
                limit,
            });
        }
        Ok(())
    }
}

/// State shared by every agent in one run.
///
/// Three locks live here: the canvas mutex and one mutex inside each
/// allocator. They are never acquired nested, so no ordering discipline is
/// needed. The barrier holds growth back until every agent has a seed.
pub(crate) struct Shared {
    pub(crate) canvas: Mutex<Canvas>,
    pub(crate) colors: UniqueAllocator<Color>,
    pub(crate) seeds: UniqueAllocator<Pixel>,
    pub(crate) start: Barrier,
}

/// Run the full painting simulation and return the finished canvas.
///
/// Spawns one thread per agent. Each agent claims a unique color and a
/// unique seed pixel, then all agents grow their territories concurrently
/// until their step budgets or stacks run out. A zero step budget returns
/// the untouched blank canvas without spawning anything.
pub fn paint(options: &PaintOptions) -> Result<Canvas> {
    options.validate()?;

    let canvas = Canvas::new(options.canvas_size);
    if options.steps == 0 {
        // Nothing could ever be painted; skip the thread machinery.
        return Ok(canvas);
    }

    info!(
        agents = options.agents,
        steps = options.steps,
        canvas_size = options.canvas_size,
        "painting started"
    );
    let started = Instant::now();

    let shared = Shared {
        canvas: Mutex::new(canvas),
        colors: UniqueAllocator::new(),
        seeds: UniqueAllocator::new(),
        start: Barrier::new(options.agents as usize),
    };
    // Pure white marks unclaimed cells; no agent may paint with it.
    shared.colors.reserve(Color::WHITE);

    let all_finished = thread::scope(|scope| {
        let shared = &shared;
        let handles: Vec<_> = (0..options.agents)
            .map(|id| {
                let steps = options.steps;
                scope.spawn(move || Agent::new(id, steps, shared).run())
            })
            .collect();

        let mut all_ok = true;
        for handle in handles {
            if handle.join().is_err() {
                all_ok = false;
            }
        }
        all_ok
    });
    if !all_finished {
        return Err(Error::AgentPanicked);
    }

    let canvas = shared.canvas.into_inner();
    info!(
        claimed = canvas.claimed(),
        elapsed = ?started.elapsed(),
        "painting finished"
    );
    Ok(canvas)
}
