//! HTTP handlers

pub mod meetings;
pub mod pages;
