//! Chat endpoints: conversations and direct messages.

use crate::client::{parse_envelope, PortalClient};
use crate::error::Result;
use crate::types::{MessagesQuery, SendMessageRequest};
use gurukul_core::types::{ChatMessage, Conversation, ConversationId, Page};
use tracing::debug;

/// Client for the partner's chat inbox.
pub struct ChatClient<'a> {
    portal: &'a PortalClient,
    base_url: String,
    access_token: String,
}

impl<'a> ChatClient<'a> {
    pub(crate) fn new(portal: &'a PortalClient, base_url: String, access_token: String) -> Self {
        Self {
            portal,
            base_url,
            access_token,
        }
    }

    /// List the partner's conversations, most recently active first.
    pub async fn conversations(&self) -> Result<Page<Conversation>> {
        let url = format!("{}/api/v1/chat/conversations", self.base_url);
        debug!(url = %url, "Listing conversations");

        let response = self
            .portal
            .http()
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "conversation list").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Page through the messages of one conversation, newest first.
    pub async fn messages(
        &self,
        conversation_id: &ConversationId,
        query: &MessagesQuery,
    ) -> Result<Page<ChatMessage>> {
        let url = format!(
            "{}/api/v1/chat/conversations/{}/messages",
            self.base_url, conversation_id
        );
        debug!(url = %url, "Fetching messages");

        let response = self
            .portal
            .http()
            .get(&url)
            .query(&query.query_pairs())
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "message page").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }

    /// Send a direct message to another account.
    pub async fn send(&self, receiver_id: &str, text: &str) -> Result<ChatMessage> {
        let url = format!("{}/api/v1/chat/message", self.base_url);
        debug!(url = %url, receiver_id = %receiver_id, "Sending message");

        let request = SendMessageRequest {
            receiver_id: receiver_id.to_string(),
            text: text.to_string(),
        };

        let response = self
            .portal
            .http()
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&request)
            .send()
            .await?;

        if response.status().is_success() {
            parse_envelope(response, "sent message").await
        } else {
            Err(self.portal.response_error(response).await)
        }
    }
}
