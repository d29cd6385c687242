//! Fairness engine - decides who is most overdue to pay next.
//!
//! Converts per-person totals into a weight map. Higher weight means more
//! overdue; a person missing from the map has weight 0.
//!
//! # Policy
//!
//! | Round      | Condition                  | Result                                  |
//! |------------|----------------------------|-----------------------------------------|
//! | Cold start | every total is zero        | weight 1 for everyone                   |
//! | Warmed     | every total is positive    | `100 - (total - min)`, zeros dropped    |
//! | Mixed      | some zero, some positive   | weight 1 for the zero-total persons     |
//!
//! A warmed round where everyone paid the same, or where every weight was
//! dropped, falls back to the cold-start mapping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::aggregation::Totals;

/// Weight given to the least-contributing person in a warmed round.
pub const MAX_WEIGHT: f64 = 100.0;

/// Weight of every candidate in a uniform round.
pub const UNIFORM_WEIGHT: f64 = 1.0;

/// Digits kept when rounding warmed weights.
const WEIGHT_DECIMALS: i32 = 4;

/// Next-payer weights keyed by person name.
pub type Weights = BTreeMap<String, f64>;

/// Which branch of the policy applies to a set of totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Nobody has paid anything yet.
    ColdStart,
    /// Everybody has paid something.
    Warmed,
    /// Newcomers with nothing paid sit next to contributors.
    Mixed,
}

/// Pure weight computation over aggregated totals.
pub struct FairnessEngine;

impl FairnessEngine {
    /// Classifies a set of totals. Empty input counts as a cold start.
    pub fn classify(totals: &Totals) -> RoundKind {
        let zeros = totals.values().filter(|t| t.is_zero()).count();
        if zeros == totals.len() {
            RoundKind::ColdStart
        } else if zeros == 0 {
            RoundKind::Warmed
        } else {
            RoundKind::Mixed
        }
    }

    /// Computes next-payer weights.
    ///
    /// Zero checks are exact because totals are stored in whole cents.
    pub fn weights(totals: &Totals) -> Weights {
        match Self::classify(totals) {
            RoundKind::ColdStart => Self::uniform(totals.keys()),
            RoundKind::Mixed => Self::uniform(
                totals
                    .iter()
                    .filter(|(_, total)| total.is_zero())
                    .map(|(name, _)| name),
            ),
            RoundKind::Warmed => Self::warmed(totals),
        }
    }

    fn warmed(totals: &Totals) -> Weights {
        let Some(min) = totals.values().min().copied() else {
            return Weights::new();
        };

        if totals.values().all(|total| *total == min) {
            return Self::uniform(totals.keys());
        }

        let max_cents = (MAX_WEIGHT as i64) * 100;
        let weights: Weights = totals
            .iter()
            .filter_map(|(name, total)| {
                let remaining_cents = max_cents - (total.cents() - min.cents());
                if remaining_cents > 0 {
                    Some((name.clone(), round_weight(remaining_cents as f64 / 100.0)))
                } else {
                    None
                }
            })
            .collect();

        if weights.is_empty() {
            return Self::uniform(totals.keys());
        }
        weights
    }

    fn uniform<'a>(names: impl Iterator<Item = &'a String>) -> Weights {
        names.map(|name| (name.clone(), UNIFORM_WEIGHT)).collect()
    }
}

fn round_weight(value: f64) -> f64 {
    let factor = 10f64.powi(WEIGHT_DECIMALS);
    (value * factor).round() / factor
}
