use thiserror::Error;

/// A contract the caller of a position operation failed to uphold.
///
/// These are programming errors, not runtime conditions to recover from.
/// The panicking entry points such as [`advance`](crate::advance) report them
/// through [`precondition_failure`](crate::precondition_failure), while
/// [`try_advance`](crate::try_advance) and
/// [`try_advance_bounded`](crate::try_advance_bounded) hand them back.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PreconditionViolation {
    /// A forward-only position was asked to move backward.
    #[error("only bidirectional positions can be advanced by a negative offset")]
    NegativeOffset,
    /// The position is the last one in its domain.
    #[error("position has no successor")]
    NoSuccessor,
    /// The position is the first one in its domain.
    #[error("position has no predecessor")]
    NoPredecessor,
    /// The offset leads outside the positions the type can represent.
    #[error("offset moves the position outside its domain")]
    OutOfDomain,
    /// The distance between two positions does not fit the distance type.
    #[error("distance between positions does not fit the distance type")]
    DistanceOverflow,
}
