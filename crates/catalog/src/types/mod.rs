//! Types shared across ingestion, filtering and rendering.

mod facet;
mod filter_state;
mod record;

pub use facet::{Facet, FacetRow};
pub use filter_state::FilterState;
pub use record::{DEFAULT_YEAR, RawVehicle, Scalar, VehicleRecord};
