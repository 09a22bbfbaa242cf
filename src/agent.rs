//! The painter agent: one thread claiming territory on the shared canvas.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::canvas::Pixel;
use crate::color::Color;
use crate::painter::Shared;

/// A single painter with its own color, walk stack and step budget.
///
/// Agents interact only through the shared canvas and allocators; there is
/// no direct agent-to-agent channel.
pub(crate) struct Agent<'run> {
    id: u32,
    steps: u64,
    shared: &'run Shared,
}

impl<'run> Agent<'run> {
    pub(crate) fn new(id: u32, steps: u64, shared: &'run Shared) -> Self {
        Self { id, steps, shared }
    }

    /// Claim a unique color and seed pixel, wait for the rest of the crew,
    /// then grow territory until the step budget or the stack runs out.
    pub(crate) fn run(mut self) {
        let mut rng = rand::thread_rng();
        let color = self.shared.colors.allocate(|| Color::sample(&mut rng));
        let seed = self.claim_seed(&mut rng, color);
        debug!(agent = self.id, ?seed, ?color, "seed claimed");

        let mut stack = vec![seed];

        // Nobody grows until every agent holds a seed.
        self.shared.start.wait();

        let mut claimed: u64 = 1;
        while self.steps > 1 {
            let Some(&current) = stack.last() else {
                break;
            };
            self.steps -= 1;

            // Filtering and painting happen under one canvas lock so the
            // chosen cell cannot be stolen between the check and the claim.
            let mut canvas = self.shared.canvas.lock();
            let open: Vec<Pixel> = current
                .neighbors()
                .into_iter()
                .filter(|&p| canvas.is_open(p))
                .collect();
            match open.choose(&mut rng).copied() {
                Some(next) => {
                    canvas.set(next, color);
                    drop(canvas);
                    stack.push(next);
                    claimed += 1;
                }
                None => {
                    // Boxed in at this frontier. Abandon it and resume from
                    // a random previously claimed pixel.
                    drop(canvas);
                    stack.pop();
                    stack.shuffle(&mut rng);
                }
            }
        }

        debug!(agent = self.id, claimed, "walk finished");
    }

    /// Allocate never-issued seed candidates until one lands on an unclaimed
    /// cell, then paint it.
    ///
    /// A candidate another agent has already painted is discarded for good;
    /// the allocator will not hand it out again. Discards cannot starve the
    /// canvas: a discarded cell is by definition a claimed one, and agent
    /// count is capped at the cell count.
    fn claim_seed<R: Rng>(&self, rng: &mut R, color: Color) -> Pixel {
        let size = self.shared.canvas.lock().size();
        loop {
            let candidate = self.shared.seeds.allocate(|| Pixel::random(&mut *rng, size));
            let mut canvas = self.shared.canvas.lock();
            if canvas.is_open(candidate) {
                canvas.set(candidate, color);
                return candidate;
            }
        }
    }
}
