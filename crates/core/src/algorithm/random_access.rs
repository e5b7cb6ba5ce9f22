use num_traits::Zero;

use crate::RandomAccess;

/// Jumps `n` steps in constant time, clamping to `end` when it lies in the
/// direction of travel no further away than `n`.
///
/// An `end` equal to `start` clamps every nonzero offset, matching the step
/// by step tiers, which stop before taking their first step.
pub(crate) fn advance_bounded<P: RandomAccess>(start: P, n: P::Distance, end: P) -> P {
    let zero = P::Distance::zero();
    if n == zero {
        return start;
    }

    let d = start.distance_to(&end);
    let clamped = if n > zero {
        zero <= d && d < n
    } else {
        n < d && d <= zero
    };

    if clamped { end } else { start.advanced_by(n) }
}
