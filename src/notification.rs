//! Notification State
//!
//! A single transient message slot: `empty -> shown -> empty`.
//!
//! Every [`NotificationCenter::show`] returns a [`Ticket`]. The caller arms a
//! timer for [`NOTIFICATION_DURATION_MS`] and hands the ticket back to
//! [`NotificationCenter::expire`]; a newer message invalidates older tickets,
//! so a stale timer never clears a message it did not start.

/// How long a notification stays visible
pub const NOTIFICATION_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Font Awesome icon class
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Generation number of a shown notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    current: Option<(Ticket, Notification)>,
    generation: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any visible one
    ///
    /// An empty message dismisses instead and returns `None`.
    pub fn show(&mut self, notification: Notification) -> Option<Ticket> {
        if notification.message.trim().is_empty() {
            self.dismiss();
            return None;
        }
        self.generation += 1;
        let ticket = Ticket(self.generation);
        self.current = Some((ticket, notification));
        Some(ticket)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Option<Ticket> {
        self.show(Notification::success(message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> Option<Ticket> {
        self.show(Notification::error(message))
    }

    /// Timer expiry; clears only if `ticket` is still current
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        match &self.current {
            Some((current, _)) if *current == ticket => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Explicit dismissal
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(_, n)| n)
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
