use serde::Serialize;
use tracing::info;

/// Acknowledgement events the store emits after a mutation.
///
/// These are fire-and-forget: a sink must not block and cannot fail the
/// mutation that triggered the event. How they are rendered (toast, log
/// line, nothing) is entirely the host's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub summary: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    /// Caution framing for destructive acknowledgements (the source shows
    /// removals as a destructive toast). Still an ack, not an error.
    Failure,
}

impl Notification {
    pub fn success(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn failure(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

/// Receiver of store acknowledgements.
pub trait NotificationSink {
    fn notify(&self, event: Notification);
}

/// Sink that emits notifications as structured tracing events.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, event: Notification) {
        info!(
            notify.kind = ?event.kind,
            notify.summary = %event.summary,
            notify.detail = %event.detail,
            "spellbook notification"
        );
    }
}
