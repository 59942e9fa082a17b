use crate::{RawValue, Signal};
use std::fmt;
use std::rc::Rc;

/// A button-backed value that is "on" while a shared observable carries its own value.
///
/// Covers plain toggles as well as groups of selector buttons sharing one observable, e.g.
/// eight buttons selecting the active value page.
pub struct SelectValue<T: Clone + PartialEq + 'static> {
    name: String,
    own_value: T,
    reference: Rc<Signal<T>>,
    click_action: Option<Box<dyn Fn(&Signal<T>)>>,
}

impl<T: Clone + PartialEq + 'static> SelectValue<T> {
    /// Creates a selector which writes its own value into the shared observable when clicked.
    pub fn new(name: impl Into<String>, own_value: T, reference: Rc<Signal<T>>) -> SelectValue<T> {
        SelectValue {
            name: name.into(),
            own_value,
            reference,
            click_action: None,
        }
    }

    /// Creates a selector with a custom click action instead of the plain assignment.
    pub fn with_click_action(
        name: impl Into<String>,
        own_value: T,
        reference: Rc<Signal<T>>,
        click_action: impl Fn(&Signal<T>) + 'static,
    ) -> SelectValue<T> {
        SelectValue {
            name: name.into(),
            own_value,
            reference,
            click_action: Some(Box::new(click_action)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn own_value(&self) -> &T {
        &self.own_value
    }

    /// The physical button was pressed.
    pub fn on_click(&self) {
        match &self.click_action {
            Some(action) => action(&self.reference),
            None => self.reference.set(self.own_value.clone()),
        }
    }

    /// Whether the button's LED should currently be lit.
    pub fn is_active(&self) -> bool {
        self.reference.get() == self.own_value
    }

    /// Feedback value for the control, full on or full off.
    pub fn feedback_value(&self) -> RawValue {
        if self.is_active() {
            RawValue::MAX
        } else {
            RawValue::MIN
        }
    }
}

impl SelectValue<bool> {
    /// Creates a plain toggle flipping the observable on every click.
    pub fn toggle(name: impl Into<String>, reference: Rc<Signal<bool>>) -> SelectValue<bool> {
        SelectValue::with_click_action(name, true, reference, |signal| signal.set(!signal.get()))
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for SelectValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SelectValue")
            .field("name", &self.name)
            .field("own_value", &self.own_value)
            .field("active", &self.is_active())
            .finish()
    }
}
