//! Test doubles shared by the router and dispatcher tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use linkbot_core::{Bot, BotError, Handler, HandlerError, HandlerResponse, Link, Reply, Update};

/// Records every reply instead of sending it; optionally fails every send.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<Reply>>,
    pub fail: bool,
}

impl RecordingBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Reply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, reply: &Reply) -> linkbot_core::Result<()> {
        if self.fail {
            return Err(BotError::Send("Forbidden: bot was blocked by the user".to_string()));
        }
        self.sent.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

/// Replies with fixed text (and links) to the update's chat; counts calls.
pub struct FixedReplyHandler {
    pub text: String,
    pub links: Vec<Link>,
    pub calls: Arc<AtomicUsize>,
}

impl FixedReplyHandler {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            links: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for FixedReplyHandler {
    async fn handle(&self, update: &Update) -> linkbot_core::Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Reply(
            Reply::text(update.chat_id, self.text.clone()).with_links(self.links.clone()),
        ))
    }
}

/// Always fails.
pub struct FailingHandler;

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(&self, _update: &Update) -> linkbot_core::Result<HandlerResponse> {
        Err(HandlerError::NoLinks.into())
    }
}

/// Always declines to reply.
pub struct IgnoringHandler;

#[async_trait]
impl Handler for IgnoringHandler {
    async fn handle(&self, _update: &Update) -> linkbot_core::Result<HandlerResponse> {
        Ok(HandlerResponse::Ignore)
    }
}
