use crate::{
    ControlValue, HostParameter, Increment, IndicateableValue, Notifier, RawValue, Resolution,
    TakeoverState, DEFAULT_RECENT_SYNC_CAPACITY,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Initial configuration of a bound value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundValueSettings {
    /// Human-readable identifier, used in logs and notifications.
    pub name: String,
    /// Whether the takeover discipline starts enabled.
    pub takeover_enabled: bool,
    /// Capacity of the per-value set of recently synced values.
    pub recent_sync_capacity: usize,
}

impl Default for BoundValueSettings {
    fn default() -> Self {
        BoundValueSettings {
            name: String::new(),
            takeover_enabled: false,
            recent_sync_capacity: DEFAULT_RECENT_SYNC_CAPACITY,
        }
    }
}

/// A logical control value kept in agreement between a host-side parameter and a physical
/// control.
///
/// Control input goes to the host through [`control`](Self::control), host changes come back
/// through [`on_host_value_changed`](Self::on_host_value_changed) and are answered with the
/// feedback value for the control. The optional takeover discipline keeps out-of-position
/// controls from causing value jumps.
pub struct BoundValue {
    name: String,
    parameter: Rc<dyn HostParameter>,
    /// Separate indication receiver for parameters that cannot indicate themselves.
    indicateable: Option<Rc<dyn IndicateableValue>>,
    /// Last host value confirmed through the change observer.
    value: RawValue,
    indication: bool,
    takeover: Option<TakeoverState>,
    recent_sync_capacity: usize,
}

impl BoundValue {
    /// Binds a host parameter which also receives the indication toggles (the usual case).
    pub fn new(settings: BoundValueSettings, parameter: Rc<dyn HostParameter>) -> BoundValue {
        BoundValue::create(settings, parameter, None)
    }

    /// Binds a host parameter whose indication marker lives on a different host object, e.g. a
    /// user control whose value object cannot indicate.
    pub fn with_indicateable(
        settings: BoundValueSettings,
        parameter: Rc<dyn HostParameter>,
        indicateable: Rc<dyn IndicateableValue>,
    ) -> BoundValue {
        BoundValue::create(settings, parameter, Some(indicateable))
    }

    fn create(
        settings: BoundValueSettings,
        parameter: Rc<dyn HostParameter>,
        indicateable: Option<Rc<dyn IndicateableValue>>,
    ) -> BoundValue {
        let value = parameter.get();
        let mut bound_value = BoundValue {
            name: settings.name,
            parameter,
            indicateable,
            value,
            indication: false,
            takeover: None,
            recent_sync_capacity: settings.recent_sync_capacity,
        };
        bound_value.set_takeover_enabled(settings.takeover_enabled);
        bound_value
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last host value confirmed through the change observer.
    pub fn value(&self) -> RawValue {
        self.value
    }

    /// Feeds a control-originated value into the binding.
    pub fn control(&mut self, value: ControlValue, notifier: &dyn Notifier) {
        match value {
            ControlValue::Relative { delta, range } => self.on_relative_value_received(delta, range),
            ControlValue::Absolute {
                value,
                takeover_advised,
            } => self.on_absolute_value_received(value, takeover_advised, notifier),
        }
    }

    /// Sets the value programmatically, i.e. neither control- nor host-originated.
    pub fn set_value(&self, value: RawValue, resolution: Resolution) {
        self.parameter.set(value, resolution);
    }

    /// Incremental change from an endless encoder. Such a control cannot be out of position, so
    /// an active takeover negotiation is obsolete the moment it is turned.
    pub fn on_relative_value_received(&mut self, delta: Increment, range: Resolution) {
        if self.takeover.is_some() {
            self.set_takeover_enabled(false);
        }
        self.parameter.inc(delta, range);
    }

    /// Absolute position report from a fader or pot.
    ///
    /// With takeover enabled and advised, the value has to pass the takeover negotiation first;
    /// rejected values leave the host untouched. A freshly determined catch-up direction is
    /// announced through the notifier.
    pub fn on_absolute_value_received(
        &mut self,
        absolute_value: RawValue,
        is_takeover_advised: bool,
        notifier: &dyn Notifier,
    ) {
        if is_takeover_advised {
            let host_value = self.value;
            if let Some(takeover) = self.takeover.as_mut() {
                let decision = takeover.offer_control_value(absolute_value, host_value);
                if let Some(direction) = decision.determined_direction {
                    notifier.notify(&direction.to_string());
                }
                if !decision.accepted {
                    debug!(
                        name = %self.name,
                        value = %absolute_value,
                        "rejected control value outside takeover range"
                    );
                    return;
                }
            }
        }
        self.parameter.set(absolute_value, Resolution::DEFAULT);
    }

    /// Enables or disables the takeover discipline. Enabling (re)arms with a fresh undetermined
    /// state, disabling throws away all negotiation state immediately.
    pub fn set_takeover_enabled(&mut self, enabled: bool) {
        self.takeover = if enabled {
            Some(TakeoverState::with_recent_capacity(
                self.recent_sync_capacity,
            ))
        } else {
            None
        };
    }

    pub fn takeover_enabled(&self) -> bool {
        self.takeover.is_some()
    }

    pub fn takeover(&self) -> Option<&TakeoverState> {
        self.takeover.as_ref()
    }

    /// Forwards the indication toggle to the bound host object.
    pub fn set_indication(&mut self, on: bool) {
        self.indication = on;
        match &self.indicateable {
            Some(indicateable) => indicateable.set_indication(on),
            None => self.parameter.set_indication(on),
        }
    }

    pub fn indication(&self) -> bool {
        self.indication
    }

    /// Host-side change observer. Refreshes the cached value, re-evaluates takeover sync and
    /// returns the feedback value for the physical control.
    pub fn on_host_value_changed(&mut self, new_value: RawValue) -> RawValue {
        self.value = new_value;
        if let Some(takeover) = self.takeover.as_mut() {
            let was_synced = takeover.is_synced();
            takeover.on_host_value_changed(new_value);
            if was_synced && !takeover.is_synced() {
                debug!(name = %self.name, value = %new_value, "control went off sync");
            }
        }
        new_value
    }
}

impl fmt::Debug for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BoundValue")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("indication", &self.indication)
            .field("takeover", &self.takeover)
            .finish()
    }
}
