#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique for the lifetime of the queue; never reused.
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Ordered list of live notifications, oldest first.
///
/// Entries are addressed by id rather than by position so that a dismissal
/// racing with a push always removes the entry the user saw.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove the notification with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Remove the notification at `position`, if any.
    pub fn dismiss_at(&mut self, position: usize) -> Option<Notification> {
        (position < self.items.len()).then(|| self.items.remove(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}
