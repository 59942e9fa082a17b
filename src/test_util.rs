use crate::{Increment, IndicateableValue, Notifier, RawValue, ReadableValue, Resolution,
    SettableValue};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Host parameter double which applies changes immediately instead of asynchronously.
#[derive(Debug, Default)]
pub struct TestParameter {
    pub value: Cell<u8>,
    pub indication: Cell<bool>,
    pub set_count: Cell<usize>,
}

impl TestParameter {
    pub fn with_value(value: u8) -> Rc<TestParameter> {
        Rc::new(TestParameter {
            value: Cell::new(value),
            ..Default::default()
        })
    }
}

impl ReadableValue for TestParameter {
    fn get(&self) -> RawValue {
        RawValue::new(self.value.get())
    }
}

impl SettableValue for TestParameter {
    fn set(&self, value: RawValue, _resolution: Resolution) {
        self.value.set(value.get());
        self.set_count.set(self.set_count.get() + 1);
    }

    fn inc(&self, delta: Increment, resolution: Resolution) {
        // One incoming step covers 128 / resolution of the 7-bit range.
        let step = (128 / resolution.get()) as i32;
        let next = RawValue::clamped(self.value.get() as i32 + delta.get() * step);
        self.value.set(next.get());
    }
}

impl IndicateableValue for TestParameter {
    fn set_indication(&self, on: bool) {
        self.indication.set(on);
    }
}

/// Notifier double collecting all messages.
#[derive(Debug, Default)]
pub struct TestNotifier {
    messages: RefCell<Vec<String>>,
}

impl TestNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for TestNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
