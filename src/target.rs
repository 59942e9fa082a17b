use crate::{Increment, RawValue, Resolution};

/// A host-side value that can be read directly.
pub trait ReadableValue {
    /// Returns the current value in 7-bit resolution.
    fn get(&self) -> RawValue;
}

/// A host-side value that can be changed from the controller side.
///
/// Implementations forward to the host object model. The host confirms changes asynchronously
/// through the change observer of the binding, so these methods have no return value.
pub trait SettableValue {
    /// Sets an absolute value with the given resolution.
    fn set(&self, value: RawValue, resolution: Resolution);

    /// Applies a signed increment, scaled by the given resolution.
    fn inc(&self, delta: Increment, resolution: Resolution);
}

/// A host-side object which can visually mark a parameter as being remote-controlled.
pub trait IndicateableValue {
    fn set_indication(&self, on: bool);
}

/// A host value that can be both read and written, the minimum a binding needs.
pub trait RangedParameter: ReadableValue + SettableValue {}

impl<T: ReadableValue + SettableValue> RangedParameter for T {}

/// The full contract a bound host parameter usually fulfills. Parameters which cannot indicate
/// themselves get a separate indication receiver attached to the binding instead.
pub trait HostParameter: RangedParameter + IndicateableValue {}

impl<T: RangedParameter + IndicateableValue> HostParameter for T {}
