//! Capability-tiered positions for the Stepwise framework.
//!
//! A position is an opaque, comparable cursor into some sequence.
//! This crate classifies positions into three capability tiers, each a
//! refinement of the previous one:
//!
//! - [`Steppable`] — can step forward to a successor
//! - [`Bidirectional`] — can also step backward to a predecessor
//! - [`RandomAccess`] — can also measure and jump any distance in O(1)
//!
//! The generic algorithms [`distance`], [`advance`] and [`advance_bounded`]
//! work for every tier and pick the cheapest correct implementation from the
//! tier a position declares.
//! The choice is made at compile time through [`Dispatch`]; there is no
//! run-time branching on the tier and no dynamic dispatch.
//!
//! Every built-in integer type is a [`RandomAccess`] position.
//!
//! # Example
//!
//! ```
//! use stepwise_core::{
//!     Bidirectional, BidirectionalTier, Steppable, TierKind, advance, advance_bounded,
//!     distance, tier_of,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Floor(i32);
//!
//! impl Steppable for Floor {
//!     type Distance = i32;
//!     type Tier = BidirectionalTier;
//!
//!     fn successor(self) -> Self {
//!         Floor(self.0 + 1)
//!     }
//! }
//!
//! impl Bidirectional for Floor {
//!     fn predecessor(self) -> Self {
//!         Floor(self.0 - 1)
//!     }
//! }
//!
//! assert_eq!(tier_of::<Floor>(), TierKind::Bidirectional);
//! assert_eq!(distance(Floor(1), Floor(4)), 3);
//! assert_eq!(advance(Floor(1), -2), Floor(-1));
//! assert_eq!(advance_bounded(Floor(1), -5, Floor(0)), Floor(0));
//! ```

mod algorithm;
pub mod dispatch;
mod error;
mod fatal;
pub mod ops;
mod position;
mod primitive;
pub mod tier;

#[cfg(test)]
mod test_utils;

pub use dispatch::Dispatch;
pub use error::PreconditionViolation;
pub use fatal::precondition_failure;
pub use ops::{
    advance, advance_bounded, distance, step_backward, step_backward_returning_prior,
    step_forward, step_forward_returning_prior, try_advance, try_advance_bounded,
};
pub use position::{Bidirectional, DistanceOf, RandomAccess, Steppable};
pub use tier::{
    BackwardCapable, BidirectionalTier, ForwardTier, RandomAccessTier, Tier, TierKind, tier_of,
};
