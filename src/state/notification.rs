//! Toast notification model.
//!
//! DESIGN
//! ======
//! Only the newest notification is ever on the page. Every `show` issues a
//! fresh id and replaces whatever was current; auto-dismiss timers carry the
//! id they were scheduled for and become no-ops once that notification has
//! been replaced or closed.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use crate::config::NotificationConfig;

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Background color of the banner.
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Info => "#3b82f6",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    /// Class attribute of the banner root.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

/// Identifier of one shown notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
}

/// What the caller should do in response to a dismiss timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissStep {
    /// Start the fade-out animation and schedule removal after `fade_ms`.
    Fade { fade_ms: u32 },
    /// Remove the node now.
    Remove,
    /// The notification is already gone.
    Stale,
}

/// Tracks the single visible notification.
#[derive(Clone, Debug)]
pub struct NotificationCenter {
    config: NotificationConfig,
    next_id: u64,
    current: Option<Notification>,
    fading: bool,
}

impl NotificationCenter {
    #[must_use]
    pub fn new(config: NotificationConfig) -> Self {
        Self { config, next_id: 0, current: None, fading: false }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn lifetime_ms(&self) -> u32 {
        self.config.lifetime_ms
    }

    /// Show a new notification, returning it and the one it replaced.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> (Notification, Option<Notification>) {
        self.next_id += 1;
        let notification = Notification { id: NotificationId(self.next_id), kind, message: message.into() };
        self.fading = false;
        let replaced = self.current.replace(notification.clone());
        (notification, replaced)
    }

    /// The user clicked the close button. Returns `true` when `id` was the
    /// visible notification.
    pub fn close(&mut self, id: NotificationId) -> bool {
        if self.is_current(id) {
            self.current = None;
            self.fading = false;
            return true;
        }
        false
    }

    /// The auto-dismiss timer for `id` fired.
    pub fn lifetime_elapsed(&mut self, id: NotificationId) -> DismissStep {
        if !self.is_current(id) {
            return DismissStep::Stale;
        }
        self.fading = true;
        DismissStep::Fade { fade_ms: self.config.fade_ms }
    }

    /// The fade for `id` finished.
    pub fn fade_finished(&mut self, id: NotificationId) -> DismissStep {
        if !self.is_current(id) || !self.fading {
            return DismissStep::Stale;
        }
        self.current = None;
        self.fading = false;
        DismissStep::Remove
    }

    fn is_current(&self, id: NotificationId) -> bool {
        self.current.as_ref().is_some_and(|n| n.id == id)
    }
}

/// Receiver of notification requests. The browser layer renders banners;
/// tests record them.
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Element id of the shared notification stylesheet.
pub const STYLE_ELEMENT_ID: &str = "portfolio-notification-styles";

/// Inline style of a banner of the given kind.
#[must_use]
pub fn banner_css(kind: NotificationKind) -> String {
    format!(
        "position: fixed; top: 90px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
         z-index: 1001; max-width: 400px; animation: slideInRight 0.3s ease; \
         display: flex; align-items: center; gap: 0.75rem;",
        kind.color()
    )
}

/// Animation applied when a banner starts fading out.
pub const FADE_OUT_ANIMATION: &str = "slideOutRight 0.3s ease";

/// Keyframes and content styles shared by banners and the demo modal.
pub const NOTIFICATION_STYLES: &str = r"
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fadeOut {
    from { opacity: 1; }
    to { opacity: 0; }
}

.notification-content {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.notification-close {
    background: none;
    border: none;
    color: inherit;
    cursor: pointer;
    font-size: 1.25rem;
    padding: 0;
    margin-left: auto;
    width: 20px;
    height: 20px;
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 50%;
    transition: all 0.15s ease;
}

.notification-close:hover {
    background: rgba(255, 255, 255, 0.2);
}
";
