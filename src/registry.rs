use crate::{BoundValue, Notifier};
use tracing::debug;

/// Identifier of a bound value within its registry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BoundValueId(usize);

/// Owns all bound values of a controller script.
///
/// Bindings are created once at script initialization and live until the process exits, so ids
/// stay valid forever. Process-wide operations like the global takeover preference have an
/// explicit target here instead of ambient global state.
#[derive(Debug, Default)]
pub struct BoundValueRegistry {
    values: Vec<BoundValue>,
    takeover_enabled: bool,
}

impl BoundValueRegistry {
    pub fn new() -> BoundValueRegistry {
        Default::default()
    }

    /// Adds a bound value and returns its id. The value keeps its own takeover setting; the
    /// global preference applies to registered values at toggle time.
    pub fn register(&mut self, value: BoundValue) -> BoundValueId {
        self.values.push(value);
        BoundValueId(self.values.len() - 1)
    }

    pub fn get(&self, id: BoundValueId) -> Option<&BoundValue> {
        self.values.get(id.0)
    }

    pub fn get_mut(&mut self, id: BoundValueId) -> Option<&mut BoundValue> {
        self.values.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &BoundValue> {
        self.values.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut BoundValue> {
        self.values.iter_mut()
    }

    /// The global takeover preference. Enabling arms every registered value with a fresh
    /// undetermined takeover state, disabling clears them all. The change is announced through
    /// the notifier.
    pub fn set_takeover_enabled(&mut self, enabled: bool, notifier: &dyn Notifier) {
        for value in &mut self.values {
            value.set_takeover_enabled(enabled);
        }
        self.takeover_enabled = enabled;
        debug!(enabled, count = self.values.len(), "global takeover toggled");
        notifier.notify(if enabled {
            "Takeover enabled"
        } else {
            "Takeover disabled"
        });
    }

    pub fn takeover_enabled(&self) -> bool {
        self.takeover_enabled
    }
}
