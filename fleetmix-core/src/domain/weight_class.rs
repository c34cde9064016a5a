//! The weight-class taxonomy — the contract between binning, sorting, and
//! chart styling.
//!
//! One static table defines the ordered classes with their bounds, labels,
//! and display colors. Everything downstream (binning, output ordering,
//! the JSON chart payload) derives from it, so the taxonomy cannot drift
//! between the aggregator and the renderers.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::fmt;

/// Ordered weight classes in pounds of unladen weight. Bins are half-open:
/// lower bound inclusive, upper bound exclusive, last bin unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightClass {
    Under2750,
    From2750To3000,
    From3000To3500,
    From3500To4000,
    From4000To4500,
    From4500To5000,
    From5000To5500,
    From5500To6000,
    Over6000,
}

/// One row of the taxonomy table.
#[derive(Debug, Clone, Copy)]
pub struct WeightClassSpec {
    pub class: WeightClass,
    pub label: &'static str,
    pub lower_bound: f64,
    /// `None` marks the open-ended last bin.
    pub upper_bound: Option<f64>,
    pub display_color: &'static str,
}

/// The canonical taxonomy, in display order.
pub const WEIGHT_CLASS_TABLE: &[WeightClassSpec] = &[
    WeightClassSpec {
        class: WeightClass::Under2750,
        label: "<2750",
        lower_bound: 0.0,
        upper_bound: Some(2750.0),
        display_color: "#440154",
    },
    WeightClassSpec {
        class: WeightClass::From2750To3000,
        label: "2750-3000",
        lower_bound: 2750.0,
        upper_bound: Some(3000.0),
        display_color: "#472d7b",
    },
    WeightClassSpec {
        class: WeightClass::From3000To3500,
        label: "3000-3500",
        lower_bound: 3000.0,
        upper_bound: Some(3500.0),
        display_color: "#3b528b",
    },
    WeightClassSpec {
        class: WeightClass::From3500To4000,
        label: "3500-4000",
        lower_bound: 3500.0,
        upper_bound: Some(4000.0),
        display_color: "#2c728e",
    },
    WeightClassSpec {
        class: WeightClass::From4000To4500,
        label: "4000-4500",
        lower_bound: 4000.0,
        upper_bound: Some(4500.0),
        display_color: "#21918c",
    },
    WeightClassSpec {
        class: WeightClass::From4500To5000,
        label: "4500-5000",
        lower_bound: 4500.0,
        upper_bound: Some(5000.0),
        display_color: "#28ae80",
    },
    WeightClassSpec {
        class: WeightClass::From5000To5500,
        label: "5000-5500",
        lower_bound: 5000.0,
        upper_bound: Some(5500.0),
        display_color: "#5ec962",
    },
    WeightClassSpec {
        class: WeightClass::From5500To6000,
        label: "5500-6000",
        lower_bound: 5500.0,
        upper_bound: Some(6000.0),
        display_color: "#addc30",
    },
    WeightClassSpec {
        class: WeightClass::Over6000,
        label: ">=6000",
        lower_bound: 6000.0,
        upper_bound: None,
        display_color: "#fde725",
    },
];

impl WeightClass {
    /// All classes in bin order.
    pub const ALL: [WeightClass; 9] = [
        WeightClass::Under2750,
        WeightClass::From2750To3000,
        WeightClass::From3000To3500,
        WeightClass::From3500To4000,
        WeightClass::From4000To4500,
        WeightClass::From4500To5000,
        WeightClass::From5000To5500,
        WeightClass::From5500To6000,
        WeightClass::Over6000,
    ];

    /// Bin a weight. Returns `None` for NaN or weights below the first bin
    /// (callers filter non-positive weights before binning; this guards
    /// malformed values that slip past anyway).
    pub fn classify(weight: f64) -> Option<WeightClass> {
        if weight.is_nan() {
            return None;
        }
        WEIGHT_CLASS_TABLE
            .iter()
            .find(|spec| {
                weight >= spec.lower_bound
                    && spec.upper_bound.map_or(true, |upper| weight < upper)
            })
            .map(|spec| spec.class)
    }

    /// Position of this class in the canonical ordering (0..9).
    pub fn bin_index(self) -> usize {
        self as usize
    }

    fn spec(self) -> &'static WeightClassSpec {
        &WEIGHT_CLASS_TABLE[self.bin_index()]
    }

    /// Human-readable bin label, e.g. `"2750-3000"`.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    /// Fixed hex color for chart renderers.
    pub fn display_color(self) -> &'static str {
        self.spec().display_color
    }

    pub fn lower_bound(self) -> f64 {
        self.spec().lower_bound
    }

    pub fn upper_bound(self) -> Option<f64> {
        self.spec().upper_bound
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the bin label so exported rows and the taxonomy list agree.
impl Serialize for WeightClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for WeightClass {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        WEIGHT_CLASS_TABLE
            .iter()
            .find(|spec| spec.label == label)
            .map(|spec| spec.class)
            .ok_or_else(|| de::Error::custom(format!("unknown weight class label: {label}")))
    }
}
