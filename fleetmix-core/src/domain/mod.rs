//! Domain types: records, the weight-class taxonomy, and aggregates.

pub mod aggregate;
pub mod record;
pub mod weight_class;

pub use aggregate::{ClassSummary, FleetSummary, YearClassAggregate};
pub use record::{CleanRecord, RawVehicleRecord};
pub use weight_class::{WeightClass, WeightClassSpec, WEIGHT_CLASS_TABLE};
