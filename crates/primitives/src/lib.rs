//! Identity handles for conditional binding resolution.
//!
//! Everything a binding can be keyed on is an opaque, identity-compared
//! handle: [`Token`] names a dependency slot, [`Target`] names a consumer,
//! and [`Tag`] groups consumers. Handles carry a human-readable label for
//! diagnostics, but labels never participate in comparison — two handles
//! created with the same label are distinct.

mod condition;
mod id;
mod token;

pub use condition::{Condition, Tag, Target};
pub use id::RawId;
pub use token::{Token, TokenId};
