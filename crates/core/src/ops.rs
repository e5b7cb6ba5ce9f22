//! The uniform call surface over every capability tier.
//!
//! Each function resolves to the algorithm of the position's tier at compile
//! time; see [`dispatch`](crate::dispatch) for the table of variants.
//!
//! Functions that walk one step at a time never return if `end` cannot be
//! reached from `start`.
//! Avoiding that is the caller's responsibility; no step limit is imposed.

use std::mem;

use crate::{
    Bidirectional, Steppable, dispatch::Dispatch, error::PreconditionViolation,
    fatal::precondition_failure,
};

/// Returns the number of steps from `start` to `end`.
///
/// Runs in O(1) for [`RandomAccess`](crate::RandomAccess) positions.
/// Other positions count successors, which takes O(n) and requires `end` to
/// be reachable from `start` by stepping forward.
///
/// # Panics
///
/// Panics if the number of steps does not fit `P::Distance`.
///
/// # Example
///
/// ```
/// use stepwise_core::distance;
///
/// assert_eq!(distance(0, 5), 5);
/// assert_eq!(distance(5, 0), -5);
/// ```
#[must_use]
#[track_caller]
pub fn distance<P: Steppable>(start: P, end: P) -> P::Distance {
    <P::Tier as Dispatch<P>>::distance(start, end)
}

/// Returns the position `n` steps from `start`.
///
/// Negative offsets step backward and require a
/// [`Bidirectional`] position.
///
/// # Panics
///
/// Panics if `n` is negative and `P` can only step forward, or if `P` reports
/// a step outside its domain.
///
/// # Example
///
/// ```
/// use stepwise_core::advance;
///
/// assert_eq!(advance(0, 3), 3);
/// assert_eq!(advance(0, -3), -3);
/// ```
#[must_use]
#[track_caller]
pub fn advance<P: Steppable>(start: P, n: P::Distance) -> P {
    match try_advance(start, n) {
        Ok(position) => position,
        Err(violation) => precondition_failure(violation),
    }
}

/// Returns the position `n` steps from `start`, or a violation for negative
/// offsets on forward-only positions.
///
/// # Errors
///
/// Returns [`PreconditionViolation::NegativeOffset`] if `n` is negative and
/// `P` can only step forward.
pub fn try_advance<P: Steppable>(start: P, n: P::Distance) -> Result<P, PreconditionViolation> {
    <P::Tier as Dispatch<P>>::advance(start, n)
}

/// Returns the position `n` steps from `start`, or `end` if it comes first.
///
/// An `n` of zero returns `start` unchanged.
/// An `end` that does not lie in the direction of travel has no effect.
///
/// # Panics
///
/// Panics if `n` is negative and `P` can only step forward, or if `P` reports
/// a step outside its domain.
///
/// # Example
///
/// ```
/// use stepwise_core::advance_bounded;
///
/// assert_eq!(advance_bounded(0, 100, 10), 10);
/// assert_eq!(advance_bounded(5, -10, 0), 0);
/// assert_eq!(advance_bounded(0, 4, 10), 4);
/// ```
#[must_use]
#[track_caller]
pub fn advance_bounded<P: Steppable>(start: P, n: P::Distance, end: P) -> P {
    match try_advance_bounded(start, n, end) {
        Ok(position) => position,
        Err(violation) => precondition_failure(violation),
    }
}

/// Returns the position `n` steps from `start`, or `end` if it comes first,
/// or a violation for negative offsets on forward-only positions.
///
/// # Errors
///
/// Returns [`PreconditionViolation::NegativeOffset`] if `n` is negative and
/// `P` can only step forward.
pub fn try_advance_bounded<P: Steppable>(
    start: P,
    n: P::Distance,
    end: P,
) -> Result<P, PreconditionViolation> {
    <P::Tier as Dispatch<P>>::advance_bounded(start, n, end)
}

/// Moves `position` to its successor and returns the new value.
///
/// # Example
///
/// ```
/// use stepwise_core::step_forward;
///
/// let mut i = 4;
/// assert_eq!(step_forward(&mut i), 5);
/// assert_eq!(i, 5);
/// ```
pub fn step_forward<P: Steppable>(position: &mut P) -> P {
    *position = position.clone().successor();
    position.clone()
}

/// Moves `position` to its successor and returns the value it held before.
pub fn step_forward_returning_prior<P: Steppable>(position: &mut P) -> P {
    let next = position.clone().successor();
    mem::replace(position, next)
}

/// Moves `position` to its predecessor and returns the new value.
pub fn step_backward<P: Bidirectional>(position: &mut P) -> P {
    *position = position.clone().predecessor();
    position.clone()
}

/// Moves `position` to its predecessor and returns the value it held before.
///
/// # Example
///
/// ```
/// use stepwise_core::step_backward_returning_prior;
///
/// let mut i = 4;
/// assert_eq!(step_backward_returning_prior(&mut i), 4);
/// assert_eq!(i, 3);
/// ```
pub fn step_backward_returning_prior<P: Bidirectional>(position: &mut P) -> P {
    let previous = position.clone().predecessor();
    mem::replace(position, previous)
}
