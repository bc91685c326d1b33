use std::error::Error;

use teloxide::prelude::*;

use crate::advice;
use crate::bot_state::BotState;
use crate::handlers::utils::{main_menu_keyboard, normalize_key, send_apology, send_payload, weather_reply};
use crate::knowledge::KnowledgeBase;
use crate::models::{PendingIntent, ResponsePayload};
use crate::weather::WeatherClient;
use crate::Command;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: BotState,
    kb: KnowledgeBase,
    weather: WeatherClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Err(err) = handle_command(&bot, &msg, cmd, &state, &kb, &weather).await {
        log::error!("Command handler failed for {}: {}", msg.chat.id, err);
        send_apology(&bot, msg.chat.id).await;
    }
    Ok(())
}

async fn handle_command(
    bot: &Bot,
    msg: &Message,
    cmd: Command,
    state: &BotState,
    kb: &KnowledgeBase,
    weather: &WeatherClient,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let chat_id = msg.chat.id;
    match cmd {
        Command::Start => {
            let first_name = msg
                .from
                .as_ref()
                .map(|user| user.first_name.as_str())
                .unwrap_or("friend");
            let greeting = format!(
                "🙏 Namaste {}!\n\n\
                 🌾 *Welcome to Kisan Mitra Bot!*\n\n\
                 I am here to help:\n\
                 ✔ Farmers with crop information\n\
                 ✔ Shop owners with product updates\n\
                 ✔ Weather, fertilizers, seeds & more\n\n\
                 Type /help to see all commands or use the buttons below.",
                first_name
            );
            send_payload(
                bot,
                chat_id,
                ResponsePayload::with_buttons(greeting, main_menu_keyboard()),
            )
            .await?;
        }
        Command::Help => {
            send_payload(bot, chat_id, ResponsePayload::text(HELP_TEXT)).await?;
        }
        Command::Farmer => {
            send_payload(bot, chat_id, ResponsePayload::text(FARMER_TEXT)).await?;
        }
        Command::Shop => {
            send_payload(bot, chat_id, ResponsePayload::text(SHOP_TEXT)).await?;
        }
        Command::Weather(arg) => {
            let city = arg.trim();
            if city.is_empty() {
                prompt_for(bot, state, chat_id, PendingIntent::AwaitingWeatherCity).await?;
            } else {
                // City keeps the user's casing; the provider matches it
                // case-insensitively.
                let payload = weather_reply(weather, kb, city).await;
                send_payload(bot, chat_id, payload).await?;
            }
        }
        Command::Recommend(arg) => {
            let crop = normalize_key(&arg);
            if crop.is_empty() {
                prompt_for(bot, state, chat_id, PendingIntent::AwaitingCropName).await?;
            } else {
                send_payload(bot, chat_id, advice::compose_crop_advice(kb, &crop)).await?;
            }
        }
        Command::Price(arg) => {
            let commodity = normalize_key(&arg);
            if commodity.is_empty() {
                prompt_for(bot, state, chat_id, PendingIntent::AwaitingCommodity).await?;
            } else {
                send_payload(bot, chat_id, advice::compose_price_advice(kb, &commodity)).await?;
            }
        }
        Command::Disease(arg) => {
            let symptoms = normalize_key(&arg);
            if symptoms.is_empty() {
                prompt_for(bot, state, chat_id, PendingIntent::AwaitingSymptoms).await?;
            } else {
                send_payload(bot, chat_id, advice::compose_disease_advice(kb, &symptoms)).await?;
            }
        }
    }
    Ok(())
}

/// Command invoked without its argument: ask the clarifying question and
/// remember which answer we are waiting for.
async fn prompt_for(
    bot: &Bot,
    state: &BotState,
    chat_id: ChatId,
    intent: PendingIntent,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.send_message(chat_id, intent.prompt()).await?;
    state.set_pending(chat_id, intent).await;
    Ok(())
}

const HELP_TEXT: &str = "📌 *Kisan Mitra Commands*\n\n\
    /start - Start the bot\n\
    /help - List of commands\n\
    /farmer - Get help for farmers\n\
    /shop - Help for shop owners\n\n\
    *Quick actionable commands:*\n\
    /weather <city> - Get weather\n\
    /recommend <crop> - Fertilizer & seed tips\n\
    /price <commodity> - Market price (sample)\n\
    /disease <symptoms> - Get possible causes";

const FARMER_TEXT: &str = "👨‍🌾 *Farmer Support*\n\n\
    You can ask me:\n\
    - Seeds information\n\
    - Fertilizer suggestions\n\
    - Weather updates\n\
    - Crop disease help\n\n\
    Example: *What fertilizer is best for wheat?*\n\
    Try: `/recommend wheat`";

const SHOP_TEXT: &str = "🛒 *Shop Owner Help*\n\n\
    You can ask:\n\
    - Product prices\n\
    - Buyers nearby\n\
    - Fertilizer/seed demand\n\
    - Market trends\n\n\
    Example: *What is the price of urea?*\n\
    Try: `/price urea`";
