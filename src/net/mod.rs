//! Networking: the contact form's relay transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page has no backend. Its only outbound request is the contact form
//! POST to a hosted relay, handled by `relay`.

pub mod relay;
