//! Page state machines, one per interactive component.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module holds the plain-Rust model of one component. None of them
//! touch the DOM, so every rule here is exercised by native tests; the
//! `components` modules translate browser events into calls on these types
//! and write the results back to the page.

pub mod contact;
pub mod filter;
pub mod modal;
pub mod nav;
pub mod notification;
pub mod parallax;
pub mod resources;
pub mod reveal;
pub mod typing;
