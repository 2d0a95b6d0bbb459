//! Spatial layout generator: each record collection becomes a point cloud on
//! concentric shells, with a log-compressed visual weight per holder.
//!
//! A pure, stateless transform: same input, bit-identical output. Records
//! whose computed coordinates or weight are non-finite are excluded and
//! counted, never silently included and never an error.

mod sphere;

pub use sphere::{layered_position, ShellParams};

use crate::data::{HolderSets, LedgerEntry, SharedEntry};

/// Provenance of a placed point: the record it was derived from.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSource {
    Ledger(LedgerEntry),
    Shared(SharedEntry),
}

impl PointSource {
    pub fn address(&self) -> &str {
        match self {
            PointSource::Ledger(entry) => &entry.address,
            PointSource::Shared(entry) => &entry.address,
        }
    }

    /// The holding that drives visual weight. Shared holders weigh by the sum
    /// of both positions.
    pub fn holding(&self) -> f64 {
        match self {
            PointSource::Ledger(entry) => entry.amount,
            PointSource::Shared(entry) => entry.amount_a + entry.amount_b,
        }
    }
}

/// One record placed in world space, carrying its source record so consumers
/// never rely on index correlation with the input collection.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub weight: f32,
    pub source: PointSource,
}

/// Log-compression parameters for visual weight.
#[derive(Clone, Debug)]
pub struct WeightParams {
    pub scale: f32,
    pub min_weight: f32,
    pub default_weight: f32,
}

/// `max(min_weight, ln(amount)·scale)` for positive amounts; the fixed
/// default otherwise. Log compression keeps whale wallets from dwarfing the
/// scene, the floor keeps the smallest wallets visible.
pub fn visual_weight(amount: f64, params: &WeightParams) -> f32 {
    if amount > 0.0 {
        (amount.ln() as f32 * params.scale).max(params.min_weight)
    } else {
        params.default_weight
    }
}

/// Shell and weight parameters for all three collections. The shared shell
/// sits closest to the origin; the two ledger shells use distinct base radii
/// so records with equal indices never coincide.
#[derive(Clone, Debug, bevy::prelude::Resource)]
pub struct LayoutSettings {
    pub shared: ShellParams,
    pub ledger_a: ShellParams,
    pub ledger_b: ShellParams,
    pub weight: WeightParams,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            shared: ShellParams {
                base_radius: 40.0,
                layer_count: 6,
                layer_gap: 12.0,
            },
            ledger_a: ShellParams {
                base_radius: 150.0,
                layer_count: 6,
                layer_gap: 25.0,
            },
            ledger_b: ShellParams {
                base_radius: 185.0,
                layer_count: 6,
                layer_gap: 25.0,
            },
            weight: WeightParams {
                scale: 0.55,
                min_weight: 1.3,
                default_weight: 2.0,
            },
        }
    }
}

/// A placed collection plus the count of records excluded for non-finite
/// coordinates. The generator never errors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutOutcome {
    pub points: Vec<PlacedPoint>,
    pub skipped: usize,
}

fn place(
    sources: impl ExactSizeIterator<Item = PointSource>,
    shell: &ShellParams,
    weight: &WeightParams,
) -> LayoutOutcome {
    let n = sources.len();
    let mut outcome = LayoutOutcome {
        points: Vec::with_capacity(n),
        skipped: 0,
    };

    for (i, source) in sources.enumerate() {
        let [x, y, z] = layered_position(i, n, shell);
        let w = visual_weight(source.holding(), weight);
        if !(x.is_finite() && y.is_finite() && z.is_finite() && w.is_finite()) {
            outcome.skipped += 1;
            continue;
        }
        outcome.points.push(PlacedPoint {
            x,
            y,
            z,
            weight: w,
            source,
        });
    }

    outcome
}

pub fn place_ledger(
    entries: &[LedgerEntry],
    shell: &ShellParams,
    weight: &WeightParams,
) -> LayoutOutcome {
    place(
        entries.iter().cloned().map(PointSource::Ledger),
        shell,
        weight,
    )
}

pub fn place_shared(
    entries: &[SharedEntry],
    shell: &ShellParams,
    weight: &WeightParams,
) -> LayoutOutcome {
    place(
        entries.iter().cloned().map(PointSource::Shared),
        shell,
        weight,
    )
}

/// One load cycle's full layout: the three collections placed independently.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtlasLayout {
    pub ledger_a: LayoutOutcome,
    pub ledger_b: LayoutOutcome,
    pub shared: LayoutOutcome,
}

impl AtlasLayout {
    pub fn total_points(&self) -> usize {
        self.ledger_a.points.len() + self.ledger_b.points.len() + self.shared.points.len()
    }

    pub fn total_skipped(&self) -> usize {
        self.ledger_a.skipped + self.ledger_b.skipped + self.shared.skipped
    }
}

/// Maps the loader's collections to point collections. Pure and stateless;
/// re-running on the same sets yields bit-identical coordinates.
pub fn generate_layout(sets: &HolderSets, settings: &LayoutSettings) -> AtlasLayout {
    AtlasLayout {
        ledger_a: place_ledger(&sets.ledger_a, &settings.ledger_a, &settings.weight),
        ledger_b: place_ledger(&sets.ledger_b, &settings.ledger_b, &settings.weight),
        shared: place_shared(&sets.shared, &settings.shared, &settings.weight),
    }
}
