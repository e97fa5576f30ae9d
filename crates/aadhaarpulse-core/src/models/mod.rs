//! Domain models for the AadhaarPulse analytics core.

mod cleaning;
mod record;
mod station;

pub use cleaning::*;
pub use record::*;
pub use station::*;
