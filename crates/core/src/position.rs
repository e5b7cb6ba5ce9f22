use std::fmt::Debug;

use num_traits::{PrimInt, Signed};

use crate::{
    dispatch::Dispatch,
    tier::{BackwardCapable, RandomAccessTier},
};

/// A position that can step forward to its successor.
///
/// This is the minimal capability a type needs to take part in the generic
/// algorithms of this crate.
/// A position is plain value data: it is cloned, compared, and consumed by
/// stepping, never mutated behind the caller's back.
///
/// # Choosing a tier
///
/// [`Tier`](Steppable::Tier) names the richest capability the type
/// implements, and it is what [`distance`](crate::distance) and
/// [`advance`](crate::advance) use to pick an algorithm:
///
/// - [`ForwardTier`](crate::ForwardTier) for types that only implement `Steppable`,
/// - [`BidirectionalTier`](crate::BidirectionalTier) for types that also implement [`Bidirectional`],
/// - [`RandomAccessTier`](crate::RandomAccessTier) for types that also implement [`RandomAccess`].
///
/// Naming a tier the type does not implement, or a weaker tier than the one
/// it does, is rejected by the compiler.
///
/// # Example
///
/// ```
/// use stepwise_core::{ForwardTier, Steppable, advance, distance};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Line(u32);
///
/// impl Steppable for Line {
///     type Distance = i64;
///     type Tier = ForwardTier;
///
///     fn successor(self) -> Self {
///         Line(self.0 + 1)
///     }
/// }
///
/// assert_eq!(distance(Line(3), Line(7)), 4);
/// assert_eq!(advance(Line(3), 2), Line(5));
/// ```
pub trait Steppable: Clone + PartialEq + Sized {
    /// Signed count of steps between two positions of this type.
    type Distance: PrimInt + Signed + Debug;

    /// Marker naming the richest capability tier of this type.
    type Tier: Dispatch<Self>;

    /// Returns the next position.
    ///
    /// The caller must only ask for the successor of a position that has one.
    /// Implementations report a missing successor through
    /// [`precondition_failure`](crate::precondition_failure).
    #[must_use]
    fn successor(self) -> Self;
}

/// A position that can also step backward to its predecessor.
///
/// Where both are defined, `successor` and `predecessor` are inverses:
///
/// ```text
/// x.predecessor().successor() == x
/// x.successor().predecessor() == x
/// ```
pub trait Bidirectional: Steppable<Tier: BackwardCapable> {
    /// Returns the previous position.
    ///
    /// The caller must only ask for the predecessor of a position that has one.
    #[must_use]
    fn predecessor(self) -> Self;
}

/// A position that can measure and jump any distance in constant time.
///
/// Implementations must keep the two operations consistent with each other
/// and with single steps:
///
/// ```text
/// x.clone().advanced_by(x.distance_to(&y)) == y
/// x.distance_to(&x.clone().successor()) == 1
/// x.distance_to(&x.clone().predecessor()) == -1
/// x.clone().advanced_by(0) == x
/// ```
///
/// The generic algorithms assume these hold and never check them.
pub trait RandomAccess: Bidirectional + Steppable<Tier = RandomAccessTier> {
    /// Returns the signed number of steps from `self` to `other`. O(1).
    fn distance_to(&self, other: &Self) -> Self::Distance;

    /// Returns the position `n` steps away, backward when `n` is negative. O(1).
    #[must_use]
    fn advanced_by(self, n: Self::Distance) -> Self;
}

/// Type alias for the distance type of a `Steppable` position.
///
/// A convenience for the [`Steppable::Distance`] associated type without the
/// fully qualified syntax.
pub type DistanceOf<P> = <P as Steppable>::Distance;
