use std::panic::Location;

use tracing::error;

use crate::error::PreconditionViolation;

/// Halts on a violated precondition.
///
/// Logs the violation and the caller's location as a `tracing` error event,
/// then panics.
/// Position types use this to report a step outside their domain, so every
/// contract violation in the crate fails the same way.
///
/// # Panics
///
/// Always.
///
/// # Example
///
/// ```should_panic
/// use stepwise_core::{PreconditionViolation, precondition_failure};
///
/// precondition_failure(PreconditionViolation::NoSuccessor);
/// ```
#[cold]
#[track_caller]
pub fn precondition_failure(violation: PreconditionViolation) -> ! {
    let location = Location::caller();
    error!(%location, %violation, "precondition violated");
    panic!("precondition violated: {violation}");
}
