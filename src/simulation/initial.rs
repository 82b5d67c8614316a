//! Initial-condition generators
//!
//! All randomness comes from the caller's RNG so that a seeded
//! `ChaChaRng` reproduces the same population every run.

use rand::Rng;

use super::states::{InitialBody, Rgb};

/// Random positions snap to multiples of this spacing
pub const GRID_SPACING: f64 = 100.0;

/// Inclusive range of grid multiples a random coordinate is drawn from
pub const GRID_STEPS: std::ops::RangeInclusive<u32> = 1..=6;

/// Uniformly random RGB triple
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    [rng.gen(), rng.gen(), rng.gen()]
}

/// `n` bodies at random grid points of the 100..=600 square, default mass.
///
/// All x coordinates are drawn first, then all y coordinates. Two bodies may
/// land on the same point; the force law's distance floor handles that.
pub fn random_positions<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<InitialBody> {
    let xs: Vec<f64> = (0..n).map(|_| grid_coordinate(rng)).collect();
    let ys: Vec<f64> = (0..n).map(|_| grid_coordinate(rng)).collect();

    xs.into_iter().zip(ys).map(|(x, y)| InitialBody::at(x, y)).collect()
}

fn grid_coordinate<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(GRID_STEPS)) * GRID_SPACING
}

/// Three bodies on an equilateral triangle with centroid `(cx, cy)`.
///
/// Screen orientation: y grows downwards, so the apex is the vertex with the
/// smallest y.
pub fn equilateral_triangle_centered(cx: f64, cy: f64, side: f64) -> Vec<InitialBody> {
    let height = side * 3f64.sqrt() / 2.0;

    vec![
        InitialBody::at(cx - side / 2.0, cy + height / 3.0),
        InitialBody::at(cx + side / 2.0, cy + height / 3.0),
        InitialBody::at(cx, cy - 2.0 * height / 3.0),
    ]
}
