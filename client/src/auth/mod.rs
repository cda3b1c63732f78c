//! Auth provider integration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The external identity service owns sign-in, sign-up, OAuth, password
//! reset, and session persistence. This module consumes its public contract
//! through the narrow [`provider::AuthProvider`] interface and mirrors its
//! event stream into the session store via [`listener::AuthListener`].

pub mod gotrue;
pub mod listener;
pub mod provider;

#[cfg(test)]
pub mod mock;
