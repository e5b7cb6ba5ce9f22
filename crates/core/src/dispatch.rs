//! Static selection of an algorithm variant per capability tier.
//!
//! Stable Rust has no specialization, so the richest applicable algorithm is
//! picked through the tier marker a position names instead.
//! Each marker implements [`Dispatch`] for exactly the positions that can run
//! its algorithms:
//!
//! | Marker                | Implemented for       | `distance` | `advance` |
//! |-----------------------|-----------------------|------------|-----------|
//! | [`ForwardTier`]       | every `Steppable`     | O(n)       | O(n), `n >= 0` |
//! | [`BidirectionalTier`] | every `Bidirectional` | O(n)       | O(n)      |
//! | [`RandomAccessTier`]  | every `RandomAccess`  | O(1)       | O(1)      |
//!
//! The public functions in [`ops`](crate::ops) call through
//! `<P::Tier as Dispatch<P>>`, which the compiler resolves once per position
//! type.

use crate::{
    Bidirectional, RandomAccess, Steppable,
    algorithm::{backward, forward, random_access},
    error::PreconditionViolation,
    tier::{BidirectionalTier, ForwardTier, RandomAccessTier, Tier},
};

/// The algorithm family a tier marker provides for positions of type `P`.
///
/// This trait is sealed through [`Tier`]; it is only implemented by the
/// markers in [`tier`](crate::tier).
pub trait Dispatch<P: Steppable>: Tier {
    /// Counts the steps from `start` to `end`.
    fn distance(start: P, end: P) -> P::Distance;

    /// Moves `start` by `n` steps.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionViolation::NegativeOffset`] if the tier cannot
    /// step backward and `n` is negative.
    fn advance(start: P, n: P::Distance) -> Result<P, PreconditionViolation>;

    /// Moves `start` by `n` steps, stopping at `end` if it comes first.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionViolation::NegativeOffset`] if the tier cannot
    /// step backward and `n` is negative.
    fn advance_bounded(start: P, n: P::Distance, end: P) -> Result<P, PreconditionViolation>;
}

impl<P: Steppable> Dispatch<P> for ForwardTier {
    #[track_caller]
    fn distance(start: P, end: P) -> P::Distance {
        forward::distance(start, end)
    }

    fn advance(start: P, n: P::Distance) -> Result<P, PreconditionViolation> {
        forward::advance(start, n)
    }

    fn advance_bounded(start: P, n: P::Distance, end: P) -> Result<P, PreconditionViolation> {
        forward::advance_bounded(start, n, end)
    }
}

/// Bidirectional positions measure distance the same way forward-only ones do.
impl<P: Bidirectional> Dispatch<P> for BidirectionalTier {
    #[track_caller]
    fn distance(start: P, end: P) -> P::Distance {
        forward::distance(start, end)
    }

    fn advance(start: P, n: P::Distance) -> Result<P, PreconditionViolation> {
        Ok(backward::advance(start, n))
    }

    fn advance_bounded(start: P, n: P::Distance, end: P) -> Result<P, PreconditionViolation> {
        Ok(backward::advance_bounded(start, n, end))
    }
}

impl<P: RandomAccess> Dispatch<P> for RandomAccessTier {
    fn distance(start: P, end: P) -> P::Distance {
        start.distance_to(&end)
    }

    fn advance(start: P, n: P::Distance) -> Result<P, PreconditionViolation> {
        Ok(start.advanced_by(n))
    }

    fn advance_bounded(start: P, n: P::Distance, end: P) -> Result<P, PreconditionViolation> {
        Ok(random_access::advance_bounded(start, n, end))
    }
}
