use std::error::Error;

use teloxide::prelude::*;

use crate::advice;
use crate::bot_state::BotState;
use crate::handlers::utils::{normalize_key, send_apology, send_payload, weather_reply};
use crate::knowledge::KnowledgeBase;
use crate::models::PendingIntent;
use crate::weather::WeatherClient;

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: BotState,
    kb: KnowledgeBase,
    weather: WeatherClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Err(err) = handle_message(&bot, &msg, &state, &kb, &weather).await {
        log::error!("Message handler failed for {}: {}", msg.chat.id, err);
        send_apology(&bot, msg.chat.id).await;
    }
    Ok(())
}

/// Plain text is only meaningful as the answer to a clarifying question.
/// Anything else is ignored on purpose: unsolicited free text has no
/// command context to dispatch against.
async fn handle_message(
    bot: &Bot,
    msg: &Message,
    state: &BotState,
    kb: &KnowledgeBase,
    weather: &WeatherClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    // Commands are handled by the command branch.
    if text.starts_with('/') {
        return Ok(());
    }

    let chat_id = msg.chat.id;
    let Some(intent) = state.take_pending(chat_id).await else {
        log::debug!("Ignoring unsolicited text from {}", chat_id);
        return Ok(());
    };

    let reply = match intent {
        PendingIntent::AwaitingWeatherCity => weather_reply(weather, kb, text.trim()).await,
        PendingIntent::AwaitingCropName => advice::compose_crop_advice(kb, &normalize_key(text)),
        PendingIntent::AwaitingCommodity => advice::compose_price_advice(kb, &normalize_key(text)),
        PendingIntent::AwaitingSymptoms => {
            advice::compose_disease_advice(kb, &normalize_key(text))
        }
    };
    send_payload(bot, chat_id, reply).await
}

#[cfg(test)]
mod tests {
    use teloxide::types::ChatId;

    use crate::advice;
    use crate::bot_state::BotState;
    use crate::handlers::utils::normalize_key;
    use crate::knowledge::KnowledgeBase;
    use crate::models::PendingIntent;

    /// Routing used for non-weather follow-ups, factored for testing the
    /// two dispatch paths against each other.
    fn follow_up_reply(kb: &KnowledgeBase, intent: PendingIntent, text: &str) -> String {
        match intent {
            PendingIntent::AwaitingCropName => advice::compose_crop_advice(kb, &normalize_key(text)),
            PendingIntent::AwaitingCommodity => {
                advice::compose_price_advice(kb, &normalize_key(text))
            }
            PendingIntent::AwaitingSymptoms => {
                advice::compose_disease_advice(kb, &normalize_key(text))
            }
            PendingIntent::AwaitingWeatherCity => unreachable!("weather path needs the gateway"),
        }
        .text
    }

    #[tokio::test]
    async fn follow_up_reply_matches_direct_command() {
        let kb = KnowledgeBase::load();
        let state = BotState::new();
        let chat = ChatId(42);

        // Direct path: `/price urea`.
        let direct = advice::compose_price_advice(&kb, &normalize_key("urea")).text;

        // Two-step path: `/price`, then the reply "Urea".
        state.set_pending(chat, PendingIntent::AwaitingCommodity).await;
        let intent = state.take_pending(chat).await.expect("intent was set");
        let follow_up = follow_up_reply(&kb, intent, "Urea");

        assert_eq!(direct, follow_up);
    }

    #[tokio::test]
    async fn free_text_always_returns_the_user_to_idle() {
        let kb = KnowledgeBase::load();
        let state = BotState::new();
        let chat = ChatId(43);

        state.set_pending(chat, PendingIntent::AwaitingCropName).await;
        let intent = state.take_pending(chat).await.expect("intent was set");
        // Even a failed lookup consumes the intent.
        let reply = follow_up_reply(&kb, intent, "dragonfruit");
        assert!(reply.contains("Sorry, no data"));
        assert_eq!(state.pending(chat).await, None);
    }
}
