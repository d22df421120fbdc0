//! Browser bindings: one controller per page component.
//!
//! ARCHITECTURE
//! ============
//! Each controller looks up the elements it owns, wires DOM events to the
//! matching `state` machine, and writes the result back to the page. A
//! controller whose anchor elements are missing is skipped; nothing here is
//! fatal to the page.

pub mod contact_form;
pub mod demo_modal;
pub mod navigation;
pub mod notification;
pub mod parallax;
pub mod projects_filter;
pub mod resources;
pub mod scroll_reveal;
pub mod skills;
pub mod typing;
