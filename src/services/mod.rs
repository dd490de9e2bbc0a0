//! Service layer for postal-distance business logic.
//!
//! Domain logic separated from transport concerns, shared by the CLI and the
//! web server.

pub mod address;
pub mod distance;
pub mod geocode;

pub use address::{AddressError, AddressService};
pub use distance::{distance_to_reference, round_to_tenth, ReferencePoint};
pub use geocode::{GeocodeClient, GeocodeError, Geocoder};
