//! Position fixtures shared by the unit tests, one per tier.

use std::{cell::Cell, rc::Rc};

use crate::{
    Bidirectional, RandomAccess, Steppable,
    tier::{BidirectionalTier, ForwardTier, RandomAccessTier},
};

/// A forward-only position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ticks(pub u32);

impl Steppable for Ticks {
    type Distance = i32;
    type Tier = ForwardTier;

    fn successor(self) -> Self {
        Ticks(self.0 + 1)
    }
}

/// A bidirectional position with a narrow distance type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Knot(pub i32);

impl Steppable for Knot {
    type Distance = i8;
    type Tier = BidirectionalTier;

    fn successor(self) -> Self {
        Knot(self.0 + 1)
    }
}

impl Bidirectional for Knot {
    fn predecessor(self) -> Self {
        Knot(self.0 - 1)
    }
}

/// A random-access position that counts the single steps taken from it.
///
/// Positions derived from the same [`Counted::start`] share one counter.
/// Equality only looks at `value`.
#[derive(Debug, Clone)]
pub(crate) struct Counted {
    pub value: i64,
    steps: Rc<Cell<usize>>,
}

impl Counted {
    pub fn start(value: i64) -> (Self, Rc<Cell<usize>>) {
        let steps = Rc::new(Cell::new(0));
        let position = Self {
            value,
            steps: Rc::clone(&steps),
        };
        (position, steps)
    }

    fn moved_to(self, value: i64) -> Self {
        Self { value, ..self }
    }

    fn count_step(&self) {
        self.steps.set(self.steps.get() + 1);
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Steppable for Counted {
    type Distance = i64;
    type Tier = RandomAccessTier;

    fn successor(self) -> Self {
        self.count_step();
        let value = self.value + 1;
        self.moved_to(value)
    }
}

impl Bidirectional for Counted {
    fn predecessor(self) -> Self {
        self.count_step();
        let value = self.value - 1;
        self.moved_to(value)
    }
}

impl RandomAccess for Counted {
    fn distance_to(&self, other: &Self) -> i64 {
        other.value - self.value
    }

    fn advanced_by(self, n: i64) -> Self {
        let value = self.value + n;
        self.moved_to(value)
    }
}
