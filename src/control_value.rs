use crate::{Increment, RawValue, Resolution};
use derive_more::Display;
use enum_iterator::IntoEnumIterator;
use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde_repr")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Value coming from a physical control which is supposed to change something on the host side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControlValue {
    /// Absolute position report (e.g. a fader which knows where it stands).
    Absolute {
        value: RawValue,
        /// Whether the emitting control can be physically out of position relative to the host
        /// value and should therefore negotiate takeover before its value is applied.
        takeover_advised: bool,
    },
    /// Relative movement report (e.g. an endless encoder tick).
    Relative { delta: Increment, range: Resolution },
}

impl ControlValue {
    /// Convenience method for creating an absolute control value without takeover negotiation.
    pub fn absolute(value: u8) -> ControlValue {
        ControlValue::Absolute {
            value: RawValue::new(value),
            takeover_advised: false,
        }
    }

    /// Convenience method for creating an absolute control value that advises takeover.
    pub fn absolute_with_takeover(value: u8) -> ControlValue {
        ControlValue::Absolute {
            value: RawValue::new(value),
            takeover_advised: true,
        }
    }

    /// Convenience method for creating a relative control value with default resolution.
    pub fn relative(delta: i32) -> ControlValue {
        ControlValue::Relative {
            delta: Increment::new(delta),
            range: Resolution::DEFAULT,
        }
    }
}

/// The kinds of physical controls a binding can be attached to.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, Debug, IntoEnumIterator, TryFromPrimitive, IntoPrimitive,
    Display,
)]
#[cfg_attr(feature = "serde_repr", derive(Serialize_repr, Deserialize_repr))]
#[repr(usize)]
pub enum ControlKind {
    #[display(fmt = "Button")]
    Button,
    #[display(fmt = "Fader")]
    Fader,
    #[display(fmt = "Motor fader")]
    MotorFader,
    #[display(fmt = "Encoder")]
    Encoder,
}

impl ControlKind {
    /// Whether absolute moves of such a control should negotiate takeover before being applied.
    /// Motorized faders follow the host value by themselves, so they cannot be out of position.
    pub fn advises_takeover(self) -> bool {
        matches!(self, ControlKind::Fader)
    }

    /// Whether such a control reports absolute positions (as opposed to relative ticks).
    pub fn emits_absolute_values(self) -> bool {
        matches!(self, ControlKind::Fader | ControlKind::MotorFader)
    }
}
