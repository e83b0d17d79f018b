/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Synthetic workload generation.
//!
//! Produces the inputs both engines consume: a process list sorted by
//! arrival, and a page reference pattern.  All randomness flows through a
//! caller-supplied [`Rng`], so a seeded [`StdRng`] gives reproducible runs.
//!
//! The normal distribution is centred on the middle of the range with the
//! standard deviation at a sixth of it, so ±3σ covers the range; the rare
//! samples outside are clamped in.  Uniform references spread accesses so
//! evenly that eviction policies barely differ, which is why `Normal` is the
//! default for page patterns.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::debug;

use crate::error::SimError;
use crate::process::Process;

/// Shape of generated values over their range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    Uniform,
    #[default]
    Normal,
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Uniform => f.write_str("uniform"),
            Distribution::Normal => f.write_str("normal"),
        }
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Distribution::Uniform),
            "normal" => Ok(Distribution::Normal),
            other => Err(format!(
                "unknown distribution '{other}' (valid: uniform, normal)"
            )),
        }
    }
}

/// Seeded RNG when `seed` is given, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Draw a value in `[0, upper)`.  `upper` must be non-zero.
fn sample<R: Rng + ?Sized>(rng: &mut R, upper: u16, distribution: Distribution) -> u16 {
    match distribution {
        Distribution::Uniform => rng.gen_range(0..upper),
        Distribution::Normal => {
            let mean = f64::from(upper) / 2.0;
            let std_dev = mean / 3.0;

            // Box-Muller transform
            let u1: f64 = rng.gen_range(1e-12_f64..1.0_f64);
            let u2: f64 = rng.gen_range(0.0_f64..1.0_f64);
            let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

            let x = (mean + std_dev * z).max(0.0);
            // float → int casts saturate, then clamp to the last valid value
            (x as u16).min(upper - 1)
        }
    }
}

/// Generate `count` processes, sorted by arrival.
///
/// * ids are `0..count` in creation order (so they are not necessarily
///   ascending after the sort),
/// * `arrive_time` is drawn from `[0, max_arrive_time)` and is always `0`
///   when `max_arrive_time == 0`,
/// * `execution_time` is uniform in `[1, max_execution_time]`.
///
/// # Errors
/// [`SimError::EmptyInput`] for `count == 0`, [`SimError::ZeroExecutionTime`]
/// for `max_execution_time == 0`.
pub fn generate_processes<R: Rng + ?Sized>(
    count: u16,
    max_arrive_time: u16,
    max_execution_time: u16,
    distribution: Distribution,
    rng: &mut R,
) -> Result<Vec<Process>, SimError> {
    if count == 0 {
        return Err(SimError::EmptyInput);
    }
    if max_execution_time == 0 {
        return Err(SimError::ZeroExecutionTime);
    }

    let mut processes: Vec<Process> = (0..count)
        .map(|id| {
            let arrive = if max_arrive_time == 0 {
                0
            } else {
                sample(rng, max_arrive_time, distribution)
            };
            let exec = rng.gen_range(1..=max_execution_time);
            Process::new(id, arrive, exec)
        })
        .collect();

    // stable: equal arrivals keep creation order
    processes.sort_by_key(|p| p.arrive_time);

    debug!(
        count,
        max_arrive_time,
        max_execution_time,
        distribution = %distribution,
        "processes generated"
    );
    Ok(processes)
}

/// Generate a reference pattern of `len` page ids drawn from `[0, num_pages)`.
///
/// # Errors
/// [`SimError::ZeroPages`] for `num_pages == 0`,
/// [`SimError::EmptyReferencePattern`] for `len == 0`.
pub fn generate_reference_pattern<R: Rng + ?Sized>(
    num_pages: u16,
    len: u16,
    distribution: Distribution,
    rng: &mut R,
) -> Result<Vec<u16>, SimError> {
    if num_pages == 0 {
        return Err(SimError::ZeroPages);
    }
    if len == 0 {
        return Err(SimError::EmptyReferencePattern);
    }

    let pattern: Vec<u16> = (0..len)
        .map(|_| sample(rng, num_pages, distribution))
        .collect();

    debug!(num_pages, len, distribution = %distribution, "reference pattern generated");
    Ok(pattern)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
