#![allow(clippy::unwrap_used)]
//! Integration tests for full painting runs.
//!
//! These drive `paint` end to end and check the territorial invariants a
//! finished canvas must uphold: unique colors, budget-bounded claim counts,
//! and 4-connected territories.

use std::collections::{HashMap, HashSet};

use mural::{paint, Canvas, Color, Error, PaintOptions, Pixel};

/// Claimed cells grouped by the color that claimed them.
fn territories(canvas: &Canvas) -> HashMap<Color, Vec<Pixel>> {
    let mut map: HashMap<Color, Vec<Pixel>> = HashMap::new();
    for (pixel, color) in canvas.iter() {
        if color != Color::WHITE {
            map.entry(color).or_default().push(pixel);
        }
    }
    map
}

/// Whether every cell is reachable from the first by 4-adjacent hops.
fn is_connected(cells: &[Pixel]) -> bool {
    let Some(&first) = cells.first() else {
        return true;
    };
    let members: HashSet<Pixel> = cells.iter().copied().collect();
    let mut seen = HashSet::from([first]);
    let mut frontier = vec![first];
    while let Some(pixel) = frontier.pop() {
        for neighbor in pixel.neighbors() {
            if members.contains(&neighbor) && seen.insert(neighbor) {
                frontier.push(neighbor);
            }
        }
    }
    seen.len() == members.len()
}

// ============================================================================
// Fast paths and validation
// ============================================================================

#[test]
fn zero_step_budget_returns_an_untouched_canvas() {
    let canvas = paint(&PaintOptions::new(5, 0).with_canvas_size(32)).unwrap();
    assert_eq!(canvas.size(), 32);
    assert_eq!(canvas.claimed(), 0);
    assert!(canvas.iter().all(|(_, color)| color == Color::WHITE));
}

#[test]
fn default_options_use_a_512_canvas() {
    let canvas = paint(&PaintOptions::new(3, 0)).unwrap();
    assert_eq!(canvas.size(), 512);
}

#[test]
fn zero_agents_are_rejected() {
    let err = paint(&PaintOptions::new(0, 10)).unwrap_err();
    assert!(matches!(err, Error::InvalidAgentCount { agents: 0, .. }));
}

#[test]
fn more_agents_than_cells_are_rejected() {
    let options = PaintOptions::new(17, 10).with_canvas_size(4);
    let err = paint(&options).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAgentCount {
            agents: 17,
            limit: 16
        }
    ));
}

// ============================================================================
// Territorial invariants
// ============================================================================

#[test]
fn single_step_budget_claims_exactly_one_seed_per_agent() {
    // A budget of 1 admits the seed claim but no growth iterations.
    let canvas = paint(&PaintOptions::new(6, 1).with_canvas_size(16)).unwrap();
    assert_eq!(canvas.claimed(), 6);

    let map = territories(&canvas);
    assert_eq!(map.len(), 6, "every agent needs its own color");
    assert!(map.values().all(|cells| cells.len() == 1));
}

#[test]
fn lone_agent_with_generous_budget_fills_a_tiny_canvas() {
    // With nobody competing, backtracking always finds the next open cell
    // eventually, so a big enough budget covers all 16 cells.
    let canvas = paint(&PaintOptions::new(1, 10_000).with_canvas_size(4)).unwrap();
    assert_eq!(canvas.claimed(), 16);

    let map = territories(&canvas);
    assert_eq!(map.len(), 1);
    let cells = map.values().next().unwrap();
    assert!(is_connected(cells));
}

#[test]
fn saturated_canvas_gives_every_agent_exactly_one_cell() {
    // One agent per cell: seeds cover the whole canvas and growth finds
    // nothing open, whatever the budget says.
    let canvas = paint(&PaintOptions::new(16, 6).with_canvas_size(4)).unwrap();
    assert_eq!(canvas.claimed(), 16);

    let map = territories(&canvas);
    assert_eq!(map.len(), 16);
    assert!(map.values().all(|cells| cells.len() == 1));
}

#[test]
fn territories_are_budget_bounded_and_connected() {
    let agents = 5;
    let steps = 20;
    let canvas = paint(&PaintOptions::new(agents, steps).with_canvas_size(16)).unwrap();

    let map = territories(&canvas);
    assert_eq!(map.len() as u32, agents, "colors must be unique per agent");
    assert!(canvas.claimed() as u32 >= agents, "every agent claims a seed");
    for cells in map.values() {
        // One seed plus at most steps - 1 growth claims.
        assert!(cells.len() as u64 <= steps);
        assert!(is_connected(cells), "territory must stay 4-connected");
    }
}

#[test]
fn tight_budget_caps_claims_but_always_grows_once() {
    // First growth iteration always finds an open neighbor on an otherwise
    // blank canvas, so a lone agent with budget 5 paints 2 to 5 cells.
    let canvas = paint(&PaintOptions::new(1, 5).with_canvas_size(4)).unwrap();
    let claimed = canvas.claimed();
    assert!((2..=5).contains(&claimed), "claimed {claimed} cells");
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn finished_canvas_round_trips_through_png() {
    let canvas = paint(&PaintOptions::new(4, 40).with_canvas_size(12)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("canvas.png");
    canvas.to_image().save(&path).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (12, 12));
    for (pixel, color) in canvas.iter() {
        assert_eq!(
            decoded.get_pixel(pixel.x, pixel.y),
            &image::Rgb([color.r, color.g, color.b])
        );
    }
}
