//! Type-level capability tiers.
//!
//! Every position names one of the zero-sized markers in this module through
//! [`Steppable::Tier`].
//! The marker is what the public algorithms project through to reach a
//! single implementation, so the choice costs nothing at run time.
//!
//! The set of tiers is closed: [`Tier`] is sealed, and only the three markers
//! below implement it.

use std::fmt;

use crate::Steppable;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ForwardTier {}
    impl Sealed for super::BidirectionalTier {}
    impl Sealed for super::RandomAccessTier {}
}

/// A capability tier marker.
pub trait Tier: sealed::Sealed {
    /// The tier this marker stands for.
    const KIND: TierKind;
}

/// Implemented by the tiers whose positions can step backward.
///
/// [`Bidirectional`](crate::Bidirectional) requires its implementors to name
/// one of these tiers.
pub trait BackwardCapable: Tier {}

/// Tier of positions that only implement [`Steppable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTier;

/// Tier of positions that implement [`Bidirectional`](crate::Bidirectional)
/// but not [`RandomAccess`](crate::RandomAccess).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTier;

/// Tier of positions that implement [`RandomAccess`](crate::RandomAccess).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTier;

impl Tier for ForwardTier {
    const KIND: TierKind = TierKind::Steppable;
}

impl Tier for BidirectionalTier {
    const KIND: TierKind = TierKind::Bidirectional;
}

impl Tier for RandomAccessTier {
    const KIND: TierKind = TierKind::RandomAccess;
}

impl BackwardCapable for BidirectionalTier {}
impl BackwardCapable for RandomAccessTier {}

/// A value-level description of a capability tier.
///
/// Tiers are ordered by refinement, so `Steppable < Bidirectional < RandomAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TierKind {
    /// Forward steps only; distance and advance walk one step at a time.
    Steppable,
    /// Forward and backward steps; negative offsets walk backward.
    Bidirectional,
    /// Constant-time distance and offset.
    RandomAccess,
}

impl TierKind {
    /// Returns true if positions of this tier can step backward.
    #[must_use]
    pub fn is_bidirectional(self) -> bool {
        self >= TierKind::Bidirectional
    }

    /// Returns true if positions of this tier measure and jump in constant time.
    #[must_use]
    pub fn is_random_access(self) -> bool {
        self == TierKind::RandomAccess
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TierKind::Steppable => "steppable",
            TierKind::Bidirectional => "bidirectional",
            TierKind::RandomAccess => "random access",
        };
        f.write_str(name)
    }
}

/// Returns the tier the algorithms resolve to for positions of type `P`.
///
/// # Example
///
/// ```
/// use stepwise_core::{TierKind, tier_of};
///
/// assert_eq!(tier_of::<i32>(), TierKind::RandomAccess);
/// ```
#[must_use]
pub fn tier_of<P: Steppable>() -> TierKind {
    <P::Tier as Tier>::KIND
}
