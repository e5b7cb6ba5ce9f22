//! Built-in integers as random-access positions.
//!
//! Signed integers measure distance in their own type.
//! Unsigned integers use the next wider signed type, or `isize` for `usize`,
//! so that a backward distance is representable.
//!
//! Leaving the integer's range is a precondition failure.

use crate::{
    Bidirectional, PreconditionViolation, RandomAccess, Steppable, fatal::precondition_failure,
    tier::RandomAccessTier,
};

macro_rules! signed_position {
    ($($t:ty),* $(,)?) => {$(
        impl Steppable for $t {
            type Distance = $t;
            type Tier = RandomAccessTier;

            #[track_caller]
            fn successor(self) -> Self {
                match self.checked_add(1) {
                    Some(next) => next,
                    None => precondition_failure(PreconditionViolation::NoSuccessor),
                }
            }
        }

        impl Bidirectional for $t {
            #[track_caller]
            fn predecessor(self) -> Self {
                match self.checked_sub(1) {
                    Some(previous) => previous,
                    None => precondition_failure(PreconditionViolation::NoPredecessor),
                }
            }
        }

        impl RandomAccess for $t {
            #[track_caller]
            fn distance_to(&self, other: &Self) -> $t {
                match other.checked_sub(*self) {
                    Some(d) => d,
                    None => precondition_failure(PreconditionViolation::DistanceOverflow),
                }
            }

            #[track_caller]
            fn advanced_by(self, n: $t) -> Self {
                match self.checked_add(n) {
                    Some(position) => position,
                    None => precondition_failure(PreconditionViolation::OutOfDomain),
                }
            }
        }
    )*};
}

macro_rules! unsigned_position {
    ($($t:ty => $d:ty),* $(,)?) => {$(
        impl Steppable for $t {
            type Distance = $d;
            type Tier = RandomAccessTier;

            #[track_caller]
            fn successor(self) -> Self {
                match self.checked_add(1) {
                    Some(next) => next,
                    None => precondition_failure(PreconditionViolation::NoSuccessor),
                }
            }
        }

        impl Bidirectional for $t {
            #[track_caller]
            fn predecessor(self) -> Self {
                match self.checked_sub(1) {
                    Some(previous) => previous,
                    None => precondition_failure(PreconditionViolation::NoPredecessor),
                }
            }
        }

        impl RandomAccess for $t {
            #[track_caller]
            fn distance_to(&self, other: &Self) -> $d {
                let magnitude = <$d>::try_from(self.abs_diff(*other)).ok();
                let d = if other >= self {
                    magnitude
                } else {
                    magnitude.and_then(<$d>::checked_neg)
                };
                match d {
                    Some(d) => d,
                    None => precondition_failure(PreconditionViolation::DistanceOverflow),
                }
            }

            #[track_caller]
            fn advanced_by(self, n: $d) -> Self {
                let position = <$t>::try_from(n.unsigned_abs()).ok().and_then(|step| {
                    if n >= 0 {
                        self.checked_add(step)
                    } else {
                        self.checked_sub(step)
                    }
                });
                match position {
                    Some(position) => position,
                    None => precondition_failure(PreconditionViolation::OutOfDomain),
                }
            }
        }
    )*};
}

signed_position!(i8, i16, i32, i64, i128, isize);

unsigned_position!(
    u8 => i16,
    u16 => i32,
    u32 => i64,
    u64 => i128,
    usize => isize,
);
