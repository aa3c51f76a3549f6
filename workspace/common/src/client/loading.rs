/// State of the full-screen loading overlay.
///
/// Every request calls `begin` before dispatch and `finish` when it settles,
/// whether it succeeded or failed. The overlay stays up while any call is
/// outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingTracker {
    pending: u32,
    message: Option<String>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, message: impl Into<String>) {
        self.pending += 1;
        self.message = Some(message.into());
    }

    pub fn finish(&mut self) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.message = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pending > 0
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
