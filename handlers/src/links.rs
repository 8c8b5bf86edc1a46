use async_trait::async_trait;
use linkbot_core::{Handler, HandlerError, HandlerResponse, Link, Reply, Result, Update};
use tracing::debug;

pub const LINKS_TEXT: &str = "Here are some useful links:";

/// Google, Telegram, Vercel, in that order.
pub fn default_links() -> Vec<Link> {
    vec![
        Link::new("Google", "https://www.google.com"),
        Link::new("Telegram", "https://telegram.org"),
        Link::new("Vercel", "https://vercel.com"),
    ]
}

/// `/links`: short text plus one navigation button per link, stacked vertically.
pub struct LinksHandler {
    text: String,
    links: Vec<Link>,
}

impl LinksHandler {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            text: LINKS_TEXT.to_string(),
            links,
        }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }
}

impl Default for LinksHandler {
    fn default() -> Self {
        Self::new(default_links())
    }
}

#[async_trait]
impl Handler for LinksHandler {
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        if self.links.is_empty() {
            return Err(HandlerError::NoLinks.into());
        }
        debug!(chat_id = update.chat_id, links = self.links.len(), "Building links reply");
        Ok(HandlerResponse::Reply(
            Reply::text(update.chat_id, self.text.clone()).with_links(self.links.clone()),
        ))
    }
}
