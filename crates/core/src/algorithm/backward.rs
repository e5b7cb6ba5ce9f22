use num_traits::{One, Signed, Zero};
use tracing::trace;

use super::forward;
use crate::Bidirectional;

/// Steps forward for non-negative `n` and backward for negative `n`.
pub(crate) fn advance<P: Bidirectional>(start: P, n: P::Distance) -> P {
    if !n.is_negative() {
        return forward::step_forward_by(start, n);
    }

    let mut cursor = start;
    let mut remaining = n;

    // Counting up toward zero keeps `Distance::MIN` from overflowing.
    while remaining < P::Distance::zero() {
        cursor = cursor.predecessor();
        remaining = remaining + P::Distance::one();
    }

    trace!(steps = ?n, "advanced by stepping backward");
    cursor
}

pub(crate) fn advance_bounded<P: Bidirectional>(start: P, n: P::Distance, end: P) -> P {
    if !n.is_negative() {
        return forward::step_forward_bounded(start, n, end);
    }

    let mut cursor = start;
    let mut remaining = n;

    while remaining < P::Distance::zero() && cursor != end {
        cursor = cursor.predecessor();
        remaining = remaining + P::Distance::one();
    }

    trace!(steps = ?(n - remaining), "advanced toward bound by stepping backward");
    cursor
}
