use derive_more::Display;
use std::convert::TryFrom;

/// A discrete control position with 7-bit resolution, the common currency between physical
/// controls and host parameter values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct RawValue(u8);

impl RawValue {
    pub const MIN: RawValue = RawValue(0);
    pub const MAX: RawValue = RawValue(127);

    /// Creates the raw value. Panics if the given number exceeds 127.
    pub fn new(value: u8) -> RawValue {
        assert!(value <= RawValue::MAX.0, "raw value {} exceeds 127", value);
        RawValue(value)
    }

    /// Creates the raw value, clamping the given number into the 7-bit range.
    pub fn clamped(value: i32) -> RawValue {
        RawValue(value.clamp(0, RawValue::MAX.0 as i32) as u8)
    }

    /// Returns the underlying number.
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns whether this is 0.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Applies a signed delta, saturating at the range bounds.
    pub fn saturating_add(&self, delta: i32) -> RawValue {
        RawValue::clamped(self.0 as i32 + delta)
    }
}

impl TryFrom<u8> for RawValue {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > RawValue::MAX.0 {
            return Err("value exceeds 7-bit range");
        }
        Ok(RawValue(value))
    }
}

impl From<RawValue> for u8 {
    fn from(value: RawValue) -> u8 {
        value.0
    }
}

/// A signed change reported by an endless encoder, never 0 (otherwise it wouldn't be an
/// increment after all).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display)]
pub struct Increment(i32);

impl Increment {
    /// Creates the increment. Panics if the given number is 0.
    pub fn new(increment: i32) -> Increment {
        assert_ne!(increment, 0, "increment must not be zero");
        Increment(increment)
    }

    /// Returns the underlying number.
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Returns if this increment is positive.
    pub fn is_positive(&self) -> bool {
        self.0 >= 0
    }

    /// Returns the signum (-1 if it's a negative increment, otherwise +1).
    pub fn signum(&self) -> i32 {
        if self.is_positive() {
            1
        } else {
            -1
        }
    }

    /// Switches the direction of this increment (makes a positive one negative and vice versa).
    pub fn inverse(&self) -> Increment {
        Increment(-self.0)
    }
}

impl TryFrom<i32> for Increment {
    type Error = &'static str;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err("zero is not an increment");
        }
        Ok(Increment(value))
    }
}

/// The number of steps a control or host value can distinguish.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Display)]
pub struct Resolution(u32);

impl Resolution {
    /// 7-bit MIDI resolution, the default everywhere in this crate.
    pub const DEFAULT: Resolution = Resolution(128);

    /// Creates the resolution. Panics if the given step count is 0.
    pub fn new(steps: u32) -> Resolution {
        assert!(steps > 0, "resolution must have at least one step");
        Resolution(steps)
    }

    /// Returns the underlying step count.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::DEFAULT
    }
}
