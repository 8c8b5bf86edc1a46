//! # Handlers for linkbot
//!
//! This crate provides the two command handlers (`/start`, `/links`) and the command catalog
//! used to build the router and to register commands with Telegram.

mod commands;
mod links;
mod start;

#[cfg(test)]
mod test;

pub use commands::{build_router, Command};
pub use links::{default_links, LinksHandler, LINKS_TEXT};
pub use start::{StartHandler, WELCOME_TEXT};
