/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: usize,
    pub message: String,
    pub level: NotificationLevel,
}

/// Ordered set of visible notifications.
///
/// The dashboard keeps one queue in a context; auto-dismiss timers call
/// [`NotificationQueue::dismiss`] with the id returned by `push`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: usize,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            level,
        });
        id
    }

    /// Removes a notification. Dismissing an unknown id is a no-op.
    pub fn dismiss(&mut self, id: usize) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
