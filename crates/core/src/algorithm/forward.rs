use num_traits::{CheckedAdd, One, Signed, Zero};
use tracing::trace;

use crate::{Steppable, error::PreconditionViolation, fatal::precondition_failure};

/// Counts successor steps from `start` until the cursor equals `end`.
///
/// Never returns if `end` is not reachable from `start`.
/// A count that does not fit `Distance` is a precondition failure.
#[track_caller]
pub(crate) fn distance<P: Steppable>(start: P, end: P) -> P::Distance {
    let mut count = P::Distance::zero();
    let mut cursor = start;

    while cursor != end {
        cursor = cursor.successor();
        count = match count.checked_add(&P::Distance::one()) {
            Some(count) => count,
            None => precondition_failure(PreconditionViolation::DistanceOverflow),
        };
    }

    trace!(steps = ?count, "measured distance by stepping forward");
    count
}

pub(crate) fn advance<P: Steppable>(start: P, n: P::Distance) -> Result<P, PreconditionViolation> {
    if n.is_negative() {
        return Err(PreconditionViolation::NegativeOffset);
    }
    Ok(step_forward_by(start, n))
}

pub(crate) fn advance_bounded<P: Steppable>(
    start: P,
    n: P::Distance,
    end: P,
) -> Result<P, PreconditionViolation> {
    if n.is_negative() {
        return Err(PreconditionViolation::NegativeOffset);
    }
    Ok(step_forward_bounded(start, n, end))
}

/// Applies `successor` exactly `n` times. `n` must not be negative.
pub(super) fn step_forward_by<P: Steppable>(start: P, n: P::Distance) -> P {
    let mut cursor = start;
    let mut remaining = n;

    while remaining > P::Distance::zero() {
        cursor = cursor.successor();
        remaining = remaining - P::Distance::one();
    }

    trace!(steps = ?n, "advanced by stepping forward");
    cursor
}

/// Applies `successor` up to `n` times, stopping early at `end`.
pub(super) fn step_forward_bounded<P: Steppable>(start: P, n: P::Distance, end: P) -> P {
    let mut cursor = start;
    let mut remaining = n;

    while remaining > P::Distance::zero() && cursor != end {
        cursor = cursor.successor();
        remaining = remaining - P::Distance::one();
    }

    trace!(steps = ?(n - remaining), "advanced toward bound by stepping forward");
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils::{Knot, Ticks};

    #[test]
    fn distance_counts_steps() {
        assert_eq!(distance(Ticks(0), Ticks(5)), 5);
        assert_eq!(distance(Ticks(7), Ticks(7)), 0);
    }

    #[test]
    fn advance_steps_exactly_n_times() {
        assert_eq!(advance(Ticks(0), 3), Ok(Ticks(3)));
        assert_eq!(advance(Ticks(4), 0), Ok(Ticks(4)));
    }

    #[test]
    fn advance_rejects_negative_offset() {
        assert_eq!(
            advance(Ticks(0), -1),
            Err(PreconditionViolation::NegativeOffset)
        );
    }

    #[test]
    fn bounded_advance_stops_at_end() {
        assert_eq!(advance_bounded(Ticks(0), 100, Ticks(10)), Ok(Ticks(10)));
        assert_eq!(advance_bounded(Ticks(0), 4, Ticks(10)), Ok(Ticks(4)));
        assert_eq!(advance_bounded(Ticks(0), 10, Ticks(10)), Ok(Ticks(10)));
    }

    #[test]
    fn bounded_advance_ignores_end_behind_start() {
        // An end that is never met does not stop the walk.
        assert_eq!(advance_bounded(Ticks(5), 3, Ticks(2)), Ok(Ticks(8)));
    }

    #[test]
    #[should_panic(expected = "does not fit the distance type")]
    fn distance_overflowing_distance_type() {
        // `Knot` counts in `i8`, so 200 steps cannot be represented.
        let _ = distance(Knot(0), Knot(200));
    }

    #[test]
    fn distance_at_distance_type_limit() {
        assert_eq!(distance(Knot(0), Knot(127)), i8::MAX);
    }

    #[test]
    fn bounded_advance_with_end_at_start_returns_start() {
        assert_eq!(advance_bounded(Ticks(4), 6, Ticks(4)), Ok(Ticks(4)));
    }

    #[test]
    fn bounded_advance_with_zero_offset_returns_start() {
        assert_eq!(advance_bounded(Ticks(3), 0, Ticks(9)), Ok(Ticks(3)));
    }

    #[test]
    fn bounded_advance_rejects_negative_offset() {
        assert_eq!(
            advance_bounded(Ticks(5), -2, Ticks(0)),
            Err(PreconditionViolation::NegativeOffset)
        );
    }
}
