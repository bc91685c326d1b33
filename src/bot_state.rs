use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::RwLock;

use crate::models::PendingIntent;

type PendingMap = Arc<RwLock<HashMap<ChatId, PendingIntent>>>;

/// Per-user conversation state: which follow-up question, if any, the bot
/// is waiting to have answered. In-memory only; a restart drops all
/// pending intents.
#[derive(Clone, Default)]
pub struct BotState {
    pending: PendingMap,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `chat_id` owes us an answer. A single slot per user:
    /// a second prompt before the first is answered overwrites it.
    /// Intents never expire on their own; they live until the user's
    /// next plain message consumes them.
    pub async fn set_pending(&self, chat_id: ChatId, intent: PendingIntent) {
        let mut pending = self.pending.write().await;
        if let Some(previous) = pending.insert(chat_id, intent) {
            log::debug!(
                "Pending intent for {} replaced: {:?} -> {:?}",
                chat_id,
                previous,
                intent
            );
        }
    }

    /// Read and clear in one step. Holding the write lock for the
    /// remove means no second message from the same user can observe a
    /// stale flag after this returns.
    pub async fn take_pending(&self, chat_id: ChatId) -> Option<PendingIntent> {
        self.pending.write().await.remove(&chat_id)
    }

    pub async fn pending(&self, chat_id: ChatId) -> Option<PendingIntent> {
        self.pending.read().await.get(&chat_id).copied()
    }
}
