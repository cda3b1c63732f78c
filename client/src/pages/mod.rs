//! Route components.
//!
//! One canonical implementation per route: `/`, `/auth`, `/auth/callback`,
//! `/auth/reset-password`, and the `/dashboard` tree.

pub mod auth;
pub mod auth_callback;
pub mod chatbot_detail;
pub mod chatbot_preview;
pub mod dashboard;
pub mod help;
pub mod landing;
pub mod reset_password;
pub mod settings;
