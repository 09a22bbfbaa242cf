//! Concurrent procedural canvas painting.
//!
//! `mural` runs N agent threads against one shared canvas. Every agent is
//! issued a color and a starting pixel that no other agent holds, then all
//! agents grow 4-connected territories simultaneously, claiming one
//! unclaimed cell at a time under a canvas-wide lock and backtracking to a
//! random earlier claim when boxed in. Pure white cells are unclaimed
//! territory; everything else belongs to exactly one agent.
//!
//! The run is intentionally nondeterministic: agents race for cells and no
//! seeding or replay facility is offered.
//!
//! ```no_run
//! use mural::{paint, PaintOptions};
//!
//! let canvas = paint(&PaintOptions::new(8, 5_000))?;
//! canvas.to_image().save("canvas.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod agent;
pub mod allocator;
pub mod canvas;
pub mod color;
pub mod error;
pub mod painter;

pub use canvas::{Canvas, Pixel};
pub use color::Color;
pub use error::{Error, Result};
pub use painter::{paint, PaintOptions, DEFAULT_CANVAS_SIZE};
