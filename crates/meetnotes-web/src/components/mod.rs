//! Reusable view components for the web interface

pub mod empty_state;
pub mod loading;
pub mod meeting_card;
pub mod new_meeting_form;
pub mod notices;
