use std::env;

use teloxide::{prelude::*, utils::command::BotCommands};

mod advice;
mod bot_state;
mod handlers;
mod knowledge;
mod models;
mod weather;

use crate::bot_state::BotState;
use crate::handlers::{callback_handler, command_handler, message_handler};
use crate::knowledge::KnowledgeBase;
use crate::weather::WeatherClient;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Kisan Mitra commands:")]
pub enum Command {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "list of commands")]
    Help,
    #[command(description = "get help for farmers")]
    Farmer,
    #[command(description = "help for shop owners")]
    Shop,
    #[command(description = "get weather for a city")]
    Weather(String),
    #[command(description = "fertilizer & seed tips for a crop")]
    Recommend(String),
    #[command(description = "market price for a commodity")]
    Price(String),
    #[command(description = "possible causes for crop symptoms")]
    Disease(String),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Starting Kisan Mitra bot...");

    let token = env::var("BOT_TOKEN").expect("BOT_TOKEN must be set");
    let bot = Bot::new(token);

    let kb = KnowledgeBase::load();
    let state = BotState::new();
    let weather = WeatherClient::from_env();

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_callback_query().endpoint(callback_handler))
        .branch(Update::filter_message().endpoint(message_handler));

    log::info!("🚀 Kisan Mitra bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state, kb, weather])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
