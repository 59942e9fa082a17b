use tracing::info;

/// Receiver for short user-facing status messages, typically shown as popup notifications by
/// the host.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Discards all messages.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}

/// Routes messages to the log instead of the host UI, e.g. for headless operation.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}
