//! # Help Assistant Endpoint
//!
//! Sends the user's message, with optional conversation history, to the
//! chat assistant.

use shared::dto::chat::{ChatRequest, ChatResponse, ChatTurn};

use super::client::{ApiClient, ApiResult};

/// Send a message to the help assistant.
///
/// `history` carries the prior turns of the conversation so the assistant
/// keeps context; the first message of a conversation sends none.
pub async fn send_chat_message(
    client: &ApiClient,
    message: String,
    history: Option<Vec<ChatTurn>>,
) -> ApiResult<ChatResponse> {
    let request = ChatRequest { message, history };

    client
        .execute(client.http().post(client.url("/chat")).json(&request))
        .await
}
