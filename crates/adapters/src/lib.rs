//! Position adapters for the Stepwise framework.
//!
//! Adapters wrap a position and change how it moves while keeping it usable
//! with the generic algorithms of [`stepwise_core`].
//!
//! - [`ReverseBidirectional`] — walks a bidirectional position backward
//! - [`ReverseRandomAccess`] — walks a random-access position backward in O(1)

mod reverse;

pub use reverse::{ReverseBidirectional, ReverseRandomAccess};
