use crate::{Interval, RawValue};
use derive_more::Display;
use std::collections::VecDeque;

/// Default capacity of the per-binding set of recently synced values.
pub const DEFAULT_RECENT_SYNC_CAPACITY: usize = 8;

/// Direction the operator has to move a control in order to catch up with the host value.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Display)]
pub enum TakeoverDirection {
    #[display(fmt = "Takeover ↑↑")]
    MoveUp,
    #[display(fmt = "Takeover ↓↓")]
    MoveDown,
}

/// Outcome of offering an absolute control value to the takeover discipline.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TakeoverDecision {
    /// Whether the incoming value may be forwarded to the host.
    pub accepted: bool,
    /// Set when this very value determined the catch-up direction, for user feedback.
    pub determined_direction: Option<TakeoverDirection>,
}

#[derive(Clone, Debug)]
enum SyncState {
    /// No relation between control position and host value established yet.
    Undetermined,
    /// Catch-up range locked, control still outside of it.
    Chasing(Interval<RawValue>),
    /// Control and host agree. Values accepted meanwhile tolerate late host echoes.
    Synced(RecentSyncedValues),
}

/// Tracks whether a physical control and the host value are currently in agreement, so that an
/// out-of-position control doesn't cause an abrupt value jump.
#[derive(Clone, Debug)]
pub struct TakeoverState {
    sync: SyncState,
    recent_capacity: usize,
}

impl TakeoverState {
    pub fn new() -> TakeoverState {
        TakeoverState::with_recent_capacity(DEFAULT_RECENT_SYNC_CAPACITY)
    }

    /// Creates the state with a custom echo-tolerance capacity. Panics if the capacity is 0.
    pub fn with_recent_capacity(capacity: usize) -> TakeoverState {
        assert!(capacity > 0, "recent-sync capacity must be positive");
        TakeoverState {
            sync: SyncState::Undetermined,
            recent_capacity: capacity,
        }
    }

    pub fn is_synced(&self) -> bool {
        matches!(self.sync, SyncState::Synced(_))
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self.sync, SyncState::Undetermined)
    }

    /// Returns the locked catch-up range while the control is chasing the host value.
    pub fn locked_range(&self) -> Option<&Interval<RawValue>> {
        match &self.sync {
            SyncState::Chasing(range) => Some(range),
            _ => None,
        }
    }

    /// Throws away all negotiation state.
    pub fn reset(&mut self) {
        self.sync = SyncState::Undetermined;
    }

    /// Decides whether an absolute control value may pass through to the host, given the last
    /// host value known to the binding.
    ///
    /// In undetermined state, an incoming value below the host value means the control
    /// approaches from below, which locks the acceptable range to `[host_value, 127]`; a value
    /// at or above the host value locks `[0, host_value]`. The range stays locked until a value
    /// falls inside it; everything outside is rejected without host mutation.
    pub fn offer_control_value(
        &mut self,
        incoming: RawValue,
        host_value: RawValue,
    ) -> TakeoverDecision {
        match &mut self.sync {
            SyncState::Undetermined => {
                let (range, direction) = if incoming < host_value {
                    (
                        Interval::new(host_value, RawValue::MAX),
                        TakeoverDirection::MoveUp,
                    )
                } else {
                    (
                        Interval::new(RawValue::MIN, host_value),
                        TakeoverDirection::MoveDown,
                    )
                };
                let accepted = range.contains(incoming);
                if accepted {
                    self.enter_synced(incoming);
                } else {
                    self.sync = SyncState::Chasing(range);
                }
                TakeoverDecision {
                    accepted,
                    determined_direction: Some(direction),
                }
            }
            SyncState::Chasing(range) => {
                let accepted = range.contains(incoming);
                if accepted {
                    self.enter_synced(incoming);
                }
                TakeoverDecision {
                    accepted,
                    determined_direction: None,
                }
            }
            SyncState::Synced(recent) => {
                recent.remember(incoming);
                TakeoverDecision {
                    accepted: true,
                    determined_direction: None,
                }
            }
        }
    }

    /// Digests a host-originated change. A change matching a recently accepted control value is
    /// just the host echoing our own update; anything else means control and host diverged, so
    /// sync drops back to undetermined and negotiation restarts.
    pub fn on_host_value_changed(&mut self, new_value: RawValue) {
        if let SyncState::Synced(recent) = &mut self.sync {
            if !recent.consume(new_value) {
                self.sync = SyncState::Undetermined;
            }
        }
    }

    fn enter_synced(&mut self, accepted: RawValue) {
        let mut recent = RecentSyncedValues::new(self.recent_capacity);
        recent.remember(accepted);
        self.sync = SyncState::Synced(recent);
    }
}

impl Default for TakeoverState {
    fn default() -> Self {
        TakeoverState::new()
    }
}

/// Bounded FIFO set of control values accepted while in sync.
///
/// MIDI feedback loops can echo accepted values back late and out of order. Remembering a
/// handful of them keeps such echoes from being mistaken for foreign host changes.
#[derive(Clone, Debug)]
pub struct RecentSyncedValues {
    values: VecDeque<RawValue>,
    capacity: usize,
}

impl RecentSyncedValues {
    /// Creates the set. Panics if the capacity is 0.
    pub fn new(capacity: usize) -> RecentSyncedValues {
        assert!(capacity > 0, "capacity must be positive");
        RecentSyncedValues {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Remembers an accepted value. Already remembered values are kept as-is; the oldest entry
    /// gives way when the set is full.
    pub fn remember(&mut self, value: RawValue) {
        if self.values.contains(&value) {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    /// Removes the given value and reports whether it was remembered.
    pub fn consume(&mut self, value: RawValue) -> bool {
        if let Some(i) = self.values.iter().position(|v| *v == value) {
            self.values.remove(i);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: u8) -> RawValue {
        RawValue::new(value)
    }

    #[test]
    fn lower_value_locks_upward_range_and_rejects() {
        // Given
        let mut state = TakeoverState::new();
        // When
        let decision = state.offer_control_value(raw(30), raw(64));
        // Then
        assert!(!decision.accepted);
        assert_eq!(
            decision.determined_direction,
            Some(TakeoverDirection::MoveUp)
        );
        assert_eq!(
            state.locked_range(),
            Some(&Interval::new(raw(64), RawValue::MAX))
        );
        assert!(!state.is_synced());
    }

    #[test]
    fn higher_value_locks_downward_range_and_rejects() {
        // Given
        let mut state = TakeoverState::new();
        // When
        let decision = state.offer_control_value(raw(100), raw(64));
        // Then
        assert!(!decision.accepted);
        assert_eq!(
            decision.determined_direction,
            Some(TakeoverDirection::MoveDown)
        );
        assert_eq!(
            state.locked_range(),
            Some(&Interval::new(RawValue::MIN, raw(64)))
        );
    }

    #[test]
    fn equal_value_syncs_immediately() {
        // Given
        let mut state = TakeoverState::new();
        // When
        let decision = state.offer_control_value(raw(64), raw(64));
        // Then
        assert!(decision.accepted);
        assert_eq!(
            decision.determined_direction,
            Some(TakeoverDirection::MoveDown)
        );
        assert!(state.is_synced());
    }

    #[test]
    fn value_entering_locked_range_syncs() {
        // Given
        let mut state = TakeoverState::new();
        state.offer_control_value(raw(30), raw(64));
        // When
        let still_outside = state.offer_control_value(raw(50), raw(64));
        let inside = state.offer_control_value(raw(70), raw(64));
        // Then
        assert!(!still_outside.accepted);
        assert_eq!(still_outside.determined_direction, None);
        assert!(inside.accepted);
        assert_eq!(inside.determined_direction, None);
        assert!(state.is_synced());
    }

    #[test]
    fn host_echo_of_accepted_value_keeps_sync() {
        // Given
        let mut state = TakeoverState::new();
        state.offer_control_value(raw(64), raw(64));
        state.offer_control_value(raw(70), raw(64));
        state.offer_control_value(raw(72), raw(64));
        // When: echoes arrive out of order
        state.on_host_value_changed(raw(72));
        state.on_host_value_changed(raw(70));
        // Then
        assert!(state.is_synced());
    }

    #[test]
    fn foreign_host_change_drops_back_to_undetermined() {
        // Given
        let mut state = TakeoverState::new();
        state.offer_control_value(raw(64), raw(64));
        // When
        state.on_host_value_changed(raw(90));
        // Then
        assert!(state.is_undetermined());
        assert_eq!(state.locked_range(), None);
    }

    #[test]
    fn host_change_while_chasing_leaves_range_alone() {
        // Given
        let mut state = TakeoverState::new();
        state.offer_control_value(raw(30), raw(64));
        // When: host value moves while the operator is still catching up
        state.on_host_value_changed(raw(80));
        // Then
        assert_eq!(
            state.locked_range(),
            Some(&Interval::new(raw(64), RawValue::MAX))
        );
    }

    #[test]
    fn evicted_value_is_no_longer_tolerated() {
        // Given
        let mut state = TakeoverState::with_recent_capacity(2);
        state.offer_control_value(raw(10), raw(10));
        state.offer_control_value(raw(11), raw(10));
        state.offer_control_value(raw(12), raw(10));
        // When: the oldest accepted value (10) has been evicted by now
        state.on_host_value_changed(raw(10));
        // Then
        assert!(state.is_undetermined());
    }

    #[test]
    fn remember_is_idempotent() {
        // Given
        let mut recent = RecentSyncedValues::new(4);
        // When
        recent.remember(raw(5));
        recent.remember(raw(5));
        // Then
        assert_eq!(recent.len(), 1);
        assert!(recent.consume(raw(5)));
        assert!(!recent.consume(raw(5)));
    }
}
