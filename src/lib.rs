//! rucities
//! ========
//!
//! Umbrella crate re-exporting [`rucities_core`], so demos and downstream
//! users can depend on a single name.

pub use rucities_core::*;
