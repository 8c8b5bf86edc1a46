//! # linkbot-core
//!
//! Core types and traits for the link bot: [`Bot`], [`Handler`], [`Update`], [`Reply`],
//! command parsing, webhook payload normalization and tracing initialization.
//! Transport-agnostic; used by command-router, handlers and linkbot-telegram.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod transport;
pub mod types;

pub use bot::Bot;
pub use command::{parse_command, ParsedCommand};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use transport::{normalize_payload, parse_body, parse_update};
pub use types::{Handler, HandlerResponse, Link, Reply, ToCoreUpdate, Update};
