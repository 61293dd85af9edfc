//! Metric tables governing tick density
//!
//! Each measurement unit maps to one immutable table: a list of candidate
//! scales (value units per major tick) and the subdivision counts a major
//! tick can be split into. Inch units use a power-of-two progression so the
//! subdivisions land on halves, quarters and eighths; everything else uses
//! the familiar 1, 2, 5, 10 progression.

use crate::types::Unit;

/// Scale and subdivision table for one unit system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerMetric {
    /// Candidate scales in value units per major tick, ascending
    pub scales: [f64; 16],
    /// Subdivision counts per major tick; levels are visited from the last
    /// entry down to the first when generating ticks
    pub subdivide: [u32; 5],
}

/// Metric for general (base-10) use
pub const METRIC_GENERAL: RulerMetric = RulerMetric {
    scales: [
        1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
        25000.0, 50000.0, 100000.0,
    ],
    subdivide: [1, 5, 10, 50, 100],
};

/// Metric for inch scales
pub const METRIC_INCHES: RulerMetric = RulerMetric {
    scales: [
        1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0, 2048.0, 4096.0, 8192.0,
        16384.0, 32768.0,
    ],
    subdivide: [1, 2, 4, 8, 16],
};

impl Unit {
    /// The metric table active for this unit
    pub fn metric(self) -> &'static RulerMetric {
        match self {
            Unit::Inches => &METRIC_INCHES,
            Unit::Decimal => &METRIC_GENERAL,
        }
    }
}
