//! Reverse views over bidirectional positions.
//!
//! Stepping a reverse view forward steps its base backward, so any algorithm
//! written against [`Steppable`] can walk a sequence from the back.
//!
//! There are two views because a position names a single tier:
//! [`ReverseBidirectional`] works for every bidirectional base, and
//! [`ReverseRandomAccess`] keeps the constant-time operations of a
//! random-access base.

use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stepwise_core::{Bidirectional, BidirectionalTier, RandomAccess, RandomAccessTier, Steppable};

/// A bidirectional position that walks its base in the opposite direction.
///
/// # Example
///
/// ```
/// use stepwise_adapters::ReverseBidirectional;
/// use stepwise_core::advance;
///
/// let end = advance(ReverseBidirectional::new(10), 3);
/// assert_eq!(end.into_base(), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ReverseBidirectional<P>(P);

impl<P: Bidirectional> ReverseBidirectional<P> {
    /// Creates a reverse view positioned at `base`.
    pub fn new(base: P) -> Self {
        Self(base)
    }

    /// Returns a reference to the underlying position.
    pub fn base(&self) -> &P {
        &self.0
    }

    /// Consumes the view and returns the underlying position.
    pub fn into_base(self) -> P {
        self.0
    }
}

impl<P: Bidirectional> From<P> for ReverseBidirectional<P> {
    fn from(base: P) -> Self {
        Self::new(base)
    }
}

impl<P: Bidirectional> Steppable for ReverseBidirectional<P> {
    type Distance = P::Distance;
    type Tier = BidirectionalTier;

    fn successor(self) -> Self {
        Self(self.0.predecessor())
    }
}

impl<P: Bidirectional> Bidirectional for ReverseBidirectional<P> {
    fn predecessor(self) -> Self {
        Self(self.0.successor())
    }
}

/// A random-access position that walks its base in the opposite direction.
///
/// Distances measured on the view are the negated distances of the base.
///
/// # Example
///
/// ```
/// use stepwise_adapters::ReverseRandomAccess;
/// use stepwise_core::{advance_bounded, distance};
///
/// let first = ReverseRandomAccess::new(9_u32);
/// let last = ReverseRandomAccess::new(0_u32);
///
/// assert_eq!(distance(first, last), 9);
/// assert_eq!(advance_bounded(first, 20, last), last);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ReverseRandomAccess<P>(P);

impl<P: RandomAccess> ReverseRandomAccess<P> {
    /// Creates a reverse view positioned at `base`.
    pub fn new(base: P) -> Self {
        Self(base)
    }

    /// Returns a reference to the underlying position.
    pub fn base(&self) -> &P {
        &self.0
    }

    /// Consumes the view and returns the underlying position.
    pub fn into_base(self) -> P {
        self.0
    }
}

impl<P: RandomAccess> From<P> for ReverseRandomAccess<P> {
    fn from(base: P) -> Self {
        Self::new(base)
    }
}

impl<P: RandomAccess> Steppable for ReverseRandomAccess<P> {
    type Distance = P::Distance;
    type Tier = RandomAccessTier;

    fn successor(self) -> Self {
        Self(self.0.predecessor())
    }
}

impl<P: RandomAccess> Bidirectional for ReverseRandomAccess<P> {
    fn predecessor(self) -> Self {
        Self(self.0.successor())
    }
}

impl<P: RandomAccess> RandomAccess for ReverseRandomAccess<P> {
    fn distance_to(&self, other: &Self) -> P::Distance {
        other.0.distance_to(&self.0)
    }

    fn advanced_by(self, n: P::Distance) -> Self {
        // Negating `n` would overflow for `Distance::MIN`.
        let zero = P::Distance::zero();
        if n < zero {
            Self(self.0.advanced_by(zero - (n + P::Distance::one())).successor())
        } else {
            Self(self.0.advanced_by(zero - n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stepwise_core::{
        TierKind, advance, advance_bounded, distance, step_backward, step_forward, tier_of,
    };

    #[test]
    fn reverse_views_keep_base_tier() {
        assert_eq!(
            tier_of::<ReverseBidirectional<i32>>(),
            TierKind::Bidirectional
        );
        assert_eq!(
            tier_of::<ReverseRandomAccess<i32>>(),
            TierKind::RandomAccess
        );
    }

    #[test]
    fn bidirectional_view_swaps_direction() {
        let mut position = ReverseBidirectional::new(5_i32);
        assert_eq!(step_forward(&mut position).into_base(), 4);
        assert_eq!(step_backward(&mut position).into_base(), 5);
        assert_eq!(position.base(), &5);
    }

    #[test]
    fn bidirectional_view_measures_by_stepping() {
        let first = ReverseBidirectional::new(8_i64);
        let last = ReverseBidirectional::new(2_i64);
        assert_eq!(distance(first, last), 6);
        assert_eq!(advance(first, -2).into_base(), 10);
        assert_eq!(advance_bounded(first, 50, last), last);
    }

    #[test]
    fn random_access_view_negates_distance() {
        let first = ReverseRandomAccess::new(-4_i32);
        let last = ReverseRandomAccess::from(-10_i32);
        assert_eq!(distance(first, last), 6);
        assert_eq!(distance(last, first), -6);
        assert_eq!(first.distance_to(&first.successor()), 1);
        assert_eq!(first.distance_to(&first.predecessor()), -1);
    }

    #[test]
    fn random_access_view_jumps_backward_in_base() {
        let position = ReverseRandomAccess::new(100_u8);
        assert_eq!(position.advanced_by(30).into_base(), 70);
        assert_eq!(position.advanced_by(-30).into_base(), 130);
        assert_eq!(position.advanced_by(0), position);
    }

    #[test]
    fn random_access_view_handles_distance_min() {
        let position = ReverseRandomAccess::new(0_i32);
        assert_eq!(position.advanced_by(i32::MIN + 1).into_base(), i32::MAX);

        let position = ReverseRandomAccess::new(-1_i32);
        assert_eq!(position.advanced_by(i32::MIN).into_base(), i32::MAX);
    }

    #[test]
    fn reversing_twice_restores_direction() {
        let position = ReverseBidirectional::new(ReverseBidirectional::new(3_i16));
        assert_eq!(position.successor().into_base().into_base(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_base() {
        let position = ReverseRandomAccess::new(42_u32);
        let json = serde_json::to_string(&position).unwrap();
        assert_eq!(json, "42");

        let back: ReverseRandomAccess<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, position);
    }
}
