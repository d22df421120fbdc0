//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` wraps the small set of browser calls every component repeats;
//! `page` holds the helpers the page exports to hand-written scripts.

#[cfg(feature = "browser")]
pub mod dom;
pub mod page;
