//! Data-quality policies: duplicate-district detection and state-name
//! normalization.

mod duplicates;
mod states;

pub use duplicates::*;
pub use states::*;
