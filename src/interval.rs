use std::fmt::Debug;

/// An interval which has an inclusive min and inclusive max value.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Interval<T: PartialOrd + Copy + Debug> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy + Debug> Interval<T> {
    /// Creates an interval. Panics if `min` is greater than `max`.
    pub fn new(min: T, max: T) -> Interval<T> {
        assert!(
            min <= max,
            "min = {:?} is greater than max = {:?}",
            min,
            max
        );
        Interval { min, max }
    }

    /// Creates an interval from two bounds in arbitrary order.
    pub fn new_auto(bound_1: T, bound_2: T) -> Interval<T> {
        Interval {
            min: if bound_1 <= bound_2 { bound_1 } else { bound_2 },
            max: if bound_1 >= bound_2 { bound_1 } else { bound_2 },
        }
    }

    /// Checks if this interval contains the given value.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns the low bound of this interval.
    pub fn min_val(&self) -> T {
        self.min
    }

    /// Returns the high bound of this interval.
    pub fn max_val(&self) -> T {
        self.max
    }
}
