//! Profile section: FAQ, contact support, logout
//!
//! Everything here sits outside the wizard core; the FAQ content lives in
//! the content module alongside the guides.

pub mod contact;

pub use contact::{open_link, ContactKind, ContactLink, CONTACT_LINKS};
