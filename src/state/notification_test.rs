use super::*;

fn center() -> NotificationCenter {
    NotificationCenter::new(NotificationConfig::default())
}

// =============================================================
// Kinds
// =============================================================

#[test]
fn kind_styles_match_banner_palette() {
    assert_eq!(NotificationKind::Success.color(), "#10b981");
    assert_eq!(NotificationKind::Error.color(), "#ef4444");
    assert_eq!(NotificationKind::Warning.color(), "#f59e0b");
    assert_eq!(NotificationKind::Info.color(), "#3b82f6");
    assert_eq!(NotificationKind::Success.icon(), "✓");
    assert_eq!(NotificationKind::Error.icon(), "✗");
}

#[test]
fn class_name_includes_kind() {
    assert_eq!(NotificationKind::Warning.class_name(), "notification notification-warning");
}

// =============================================================
// Single visible notification
// =============================================================

#[test]
fn show_sets_current_without_replacement() {
    let mut c = center();
    let (shown, replaced) = c.show(NotificationKind::Info, "Sending message...");
    assert!(replaced.is_none());
    assert_eq!(c.current(), Some(&shown));
}

#[test]
fn second_show_replaces_first() {
    let mut c = center();
    let (first, _) = c.show(NotificationKind::Info, "one");
    let (second, replaced) = c.show(NotificationKind::Error, "two");
    assert_eq!(replaced, Some(first.clone()));
    assert_ne!(first.id, second.id);
    assert_eq!(c.current().map(|n| n.kind), Some(NotificationKind::Error));
}

#[test]
fn ids_increase_monotonically() {
    let mut c = center();
    let (a, _) = c.show(NotificationKind::Info, "a");
    let (b, _) = c.show(NotificationKind::Info, "b");
    assert!(b.id > a.id);
}

// =============================================================
// Dismissal
// =============================================================

#[test]
fn lifetime_then_fade_removes_notification() {
    let mut c = center();
    let (n, _) = c.show(NotificationKind::Success, "done");
    assert_eq!(c.lifetime_ms(), 5_000);
    assert_eq!(c.lifetime_elapsed(n.id), DismissStep::Fade { fade_ms: 300 });
    assert!(c.current().is_some());
    assert_eq!(c.fade_finished(n.id), DismissStep::Remove);
    assert!(c.current().is_none());
}

#[test]
fn timer_for_replaced_notification_is_stale() {
    let mut c = center();
    let (old, _) = c.show(NotificationKind::Info, "old");
    let (new, _) = c.show(NotificationKind::Success, "new");
    assert_eq!(c.lifetime_elapsed(old.id), DismissStep::Stale);
    assert_eq!(c.current().map(|n| n.id), Some(new.id));
}

#[test]
fn manual_close_makes_timer_stale() {
    let mut c = center();
    let (n, _) = c.show(NotificationKind::Error, "oops");
    assert!(c.close(n.id));
    assert!(c.current().is_none());
    assert_eq!(c.lifetime_elapsed(n.id), DismissStep::Stale);
    assert!(!c.close(n.id));
}

#[test]
fn replacement_during_fade_keeps_new_notification() {
    let mut c = center();
    let (old, _) = c.show(NotificationKind::Info, "old");
    c.lifetime_elapsed(old.id);
    let (new, _) = c.show(NotificationKind::Success, "new");
    assert_eq!(c.fade_finished(old.id), DismissStep::Stale);
    assert_eq!(c.current().map(|n| n.id), Some(new.id));
}

#[test]
fn fade_without_lifetime_is_stale() {
    let mut c = center();
    let (n, _) = c.show(NotificationKind::Info, "x");
    assert_eq!(c.fade_finished(n.id), DismissStep::Stale);
    assert!(c.current().is_some());
}

#[test]
fn banner_css_uses_kind_color() {
    let css = banner_css(NotificationKind::Error);
    assert!(css.contains("background: #ef4444;"));
    assert!(css.contains("animation: slideInRight 0.3s ease;"));
}
