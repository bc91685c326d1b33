use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};

use crate::advice;
use crate::knowledge::KnowledgeBase;
use crate::models::ResponsePayload;
use crate::weather::WeatherClient;

/// Main menu: one button per quick-action command.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback("Weather", "cmd_weather")],
        vec![InlineKeyboardButton::callback("Recommend crop", "cmd_recommend")],
        vec![InlineKeyboardButton::callback("Market price", "cmd_price")],
        vec![InlineKeyboardButton::callback("Report disease", "cmd_disease")],
    ])
}

/// Deliver one composed payload to a chat.
pub async fn send_payload(
    bot: &Bot,
    chat_id: ChatId,
    payload: ResponsePayload,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut request = bot
        .send_message(chat_id, payload.text)
        .parse_mode(ParseMode::Markdown);
    if let Some(buttons) = payload.buttons {
        request = request.reply_markup(buttons);
    }
    request.await?;
    Ok(())
}

/// Fetch weather for `city` and compose the reply, logging the failure
/// the user only sees a summary of. Shared by both dispatch paths.
pub async fn weather_reply(
    weather: &WeatherClient,
    kb: &KnowledgeBase,
    city: &str,
) -> ResponsePayload {
    let result = weather.fetch(city).await;
    if let Err(err) = &result {
        log::warn!("Weather fetch for '{}' failed: {}", city, err);
    }
    advice::compose_weather_reply(kb, city, result)
}

/// Normalise a lookup argument: trim and lower-case. The weather city is
/// the one argument this must NOT be applied to — its casing is kept for
/// display.
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Sent when a handler fails for a reason the user cannot act on.
pub async fn send_apology(bot: &Bot, chat_id: ChatId) {
    if let Err(err) = bot
        .send_message(chat_id, "Sorry, an error occurred. Please try again.")
        .await
    {
        log::error!("Failed to send apology to {}: {}", chat_id, err);
    }
}
