//! Algorithm variants, one module per capability tier.
//!
//! Each variant relies only on the capabilities of its tier.
//! They are reached through [`Dispatch`](crate::Dispatch) and are not part of
//! the public API.

pub(crate) mod backward;
pub(crate) mod forward;
pub(crate) mod random_access;
