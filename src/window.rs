use crate::{Interval, Notifier, Signal};
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum WindowError {
    #[error("window size must be at least 1")]
    InvalidWindowSize,
    #[error("scroll size {actual} not in 1..={max}")]
    InvalidScrollSize { actual: usize, max: usize },
}

/// A fixed-size view scrolling over a larger indexed collection, e.g. 8 visible tracks of a
/// far bigger track bank.
///
/// The collection itself lives on the host side; the window only tracks the scroll position
/// and which scroll affordances are currently available. Scroll requests beyond the bounds are
/// clamped, never rejected.
#[derive(Debug)]
pub struct ScrollableWindow {
    name: String,
    window_size: usize,
    total_items: usize,
    position: usize,
    scroll_size: usize,
    can_move_back: Rc<Signal<bool>>,
    can_move_forth: Rc<Signal<bool>>,
}

impl ScrollableWindow {
    pub fn new(
        name: impl Into<String>,
        window_size: usize,
        total_items: usize,
    ) -> Result<ScrollableWindow, WindowError> {
        if window_size == 0 {
            return Err(WindowError::InvalidWindowSize);
        }
        let window = ScrollableWindow {
            name: name.into(),
            window_size,
            total_items,
            position: 0,
            scroll_size: 1,
            can_move_back: Rc::new(Signal::new(false)),
            can_move_forth: Rc::new(Signal::new(total_items > window_size)),
        };
        Ok(window)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Index of the first visible item, always within `[0, max(0, total - window)]`.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn scroll_size(&self) -> usize {
        self.scroll_size
    }

    /// Observable scroll affordance towards lower indexes, meant for binding a button LED.
    pub fn can_move_back(&self) -> &Rc<Signal<bool>> {
        &self.can_move_back
    }

    /// Observable scroll affordance towards higher indexes.
    pub fn can_move_forth(&self) -> &Rc<Signal<bool>> {
        &self.can_move_forth
    }

    pub fn move_forth(&mut self) {
        self.scroll_to(self.position + self.scroll_size);
    }

    pub fn move_back(&mut self) {
        self.scroll_to(self.position.saturating_sub(self.scroll_size));
    }

    pub fn move_page_forth(&mut self) {
        self.scroll_to(self.position + self.window_size);
    }

    pub fn move_page_back(&mut self) {
        self.scroll_to(self.position.saturating_sub(self.window_size));
    }

    /// Scrolls to the given position, clamped into the valid range.
    pub fn scroll_to(&mut self, position: usize) {
        let clamped = position.min(self.max_position());
        if clamped != self.position {
            debug!(
                name = %self.name,
                requested = position,
                position = clamped,
                "window scrolled"
            );
            self.position = clamped;
        }
        self.update_affordances();
    }

    /// The host collection grew or shrank. Re-clamps the position if necessary.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.scroll_to(self.position);
    }

    /// Changes the per-step scroll distance. Valid values are 1 up to the window size; the
    /// change is announced through the notifier.
    pub fn set_scroll_size(
        &mut self,
        scroll_size: usize,
        notifier: &dyn Notifier,
    ) -> Result<(), WindowError> {
        let valid = Interval::new(1, self.window_size);
        if !valid.contains(scroll_size) {
            return Err(WindowError::InvalidScrollSize {
                actual: scroll_size,
                max: self.window_size,
            });
        }
        self.scroll_size = scroll_size;
        notifier.notify(&format!("{}: scroll by {}", self.name, scroll_size));
        Ok(())
    }

    fn max_position(&self) -> usize {
        self.total_items.saturating_sub(self.window_size)
    }

    fn update_affordances(&self) {
        self.can_move_back.set(self.position > 0);
        self.can_move_forth.set(self.position < self.max_position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::TestNotifier;
    use crate::NullNotifier;
    use std::cell::Cell;

    fn tracks_window(window_size: usize, total_items: usize) -> ScrollableWindow {
        ScrollableWindow::new("Tracks", window_size, total_items).unwrap()
    }

    #[test]
    fn page_scrolling_clamps_at_the_end() {
        // Given: window of 8 over 20 items
        let mut window = tracks_window(8, 20);
        // When / Then: positions visited are 0, 8, 12, 12
        window.move_page_forth();
        assert_eq!(window.position(), 8);
        window.move_page_forth();
        assert_eq!(window.position(), 12);
        window.move_page_forth();
        assert_eq!(window.position(), 12);
    }

    #[test]
    fn move_back_at_start_is_a_no_op() {
        // Given
        let mut window = tracks_window(8, 20);
        // When
        window.move_back();
        window.move_page_back();
        // Then
        assert_eq!(window.position(), 0);
    }

    #[test]
    fn single_steps_respect_scroll_size() {
        // Given
        let mut window = tracks_window(8, 20);
        window.set_scroll_size(4, &NullNotifier).unwrap();
        // When
        window.move_forth();
        window.move_forth();
        window.move_forth();
        // Then
        assert_eq!(window.position(), 12);
        // When
        window.move_back();
        // Then
        assert_eq!(window.position(), 8);
    }

    #[test]
    fn affordance_signals_follow_position() {
        // Given
        let mut window = tracks_window(8, 20);
        let back_changes = Rc::new(Cell::new(0));
        let back_changes_in_handler = back_changes.clone();
        window
            .can_move_back()
            .subscribe(move |_| back_changes_in_handler.set(back_changes_in_handler.get() + 1));
        assert!(!window.can_move_back().get());
        assert!(window.can_move_forth().get());
        // When
        window.move_page_forth();
        // Then
        assert!(window.can_move_back().get());
        assert_eq!(back_changes.get(), 1);
        // When: scroll all the way to the end
        window.move_page_forth();
        window.move_page_forth();
        // Then
        assert!(!window.can_move_forth().get());
        assert!(window.can_move_back().get());
    }

    #[test]
    fn window_larger_than_collection_cannot_scroll() {
        // Given
        let mut window = tracks_window(8, 5);
        // When
        window.move_page_forth();
        // Then
        assert_eq!(window.position(), 0);
        assert!(!window.can_move_forth().get());
    }

    #[test]
    fn shrinking_collection_re_clamps_position() {
        // Given
        let mut window = tracks_window(8, 32);
        window.move_page_forth();
        window.move_page_forth();
        assert_eq!(window.position(), 16);
        // When
        window.set_total_items(12);
        // Then
        assert_eq!(window.position(), 4);
        assert!(window.can_move_back().get());
        assert!(!window.can_move_forth().get());
    }

    #[test]
    fn scroll_size_is_validated_and_announced() {
        // Given
        let mut window = tracks_window(8, 20);
        let notifier = TestNotifier::default();
        // When / Then
        assert_eq!(
            window.set_scroll_size(0, &notifier),
            Err(WindowError::InvalidScrollSize { actual: 0, max: 8 })
        );
        assert_eq!(
            window.set_scroll_size(9, &notifier),
            Err(WindowError::InvalidScrollSize { actual: 9, max: 8 })
        );
        assert_eq!(window.scroll_size(), 1);
        assert!(window.set_scroll_size(8, &notifier).is_ok());
        assert_eq!(notifier.messages(), vec!["Tracks: scroll by 8".to_string()]);
    }

    #[test]
    fn zero_window_size_is_a_configuration_error() {
        assert_eq!(
            ScrollableWindow::new("Tracks", 0, 20).unwrap_err(),
            WindowError::InvalidWindowSize
        );
    }
}
