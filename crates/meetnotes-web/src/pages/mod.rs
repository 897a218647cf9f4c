//! Page-level views for the web interface

pub mod layout;
pub mod not_found;
