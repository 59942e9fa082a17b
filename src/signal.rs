use std::cell::{Cell, RefCell};
use std::fmt;

/// Identifier of a subscription, needed for unsubscribing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

struct Subscriber<T> {
    id: SubscriptionId,
    callback: Box<dyn Fn(&T)>,
}

/// A single-threaded observable value with explicit publish/subscribe.
///
/// Subscribers run synchronously and in subscription order after the value has been stored.
/// Setting a value equal to the current one does not notify. Handlers run to completion on the
/// dispatch thread; subscribing or unsubscribing from within a notification is not supported.
pub struct Signal<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
    next_id: Cell<usize>,
}

impl<T> Signal<T> {
    pub fn new(initial: T) -> Signal<T> {
        Signal {
            value: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Registers a change handler. It will be called on every actual value change, in the order
    /// subscriptions were made.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes the subscription with the given id. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|s| s.id != id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl<T: Clone> Signal<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Stores the given value and notifies all subscribers if it differs from the current one.
    pub fn set(&self, new_value: T) {
        {
            let mut value = self.value.borrow_mut();
            if *value == new_value {
                return;
            }
            *value = new_value.clone();
        }
        // Notify from a local copy so handlers may read or even set this signal again.
        for subscriber in self.subscribers.borrow().iter() {
            (subscriber.callback)(&new_value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value.borrow())
            .field("subscriber_count", &self.subscribers.borrow().len())
            .finish()
    }
}
