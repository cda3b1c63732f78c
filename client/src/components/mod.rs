//! Reusable UI components for the dashboard screens.

pub mod chatbot_card;
pub mod create_chatbot_form;
pub mod dashboard_shell;
pub mod document_card;
pub mod mobile_nav;
