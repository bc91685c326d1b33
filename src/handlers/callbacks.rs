use std::error::Error;

use teloxide::prelude::*;

use crate::handlers::utils::send_apology;

/// Inline menu presses. The press is acknowledged first (stops the
/// client's loading spinner), then the message is edited into an
/// instruction naming the matching slash command. Pending state is never
/// touched here.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let chat_id = q.message.as_ref().map(|m| m.chat().id);
    if let Err(err) = handle_callback(&bot, &q).await {
        log::error!("Callback handler failed: {}", err);
        if let Some(chat_id) = chat_id {
            send_apology(&bot, chat_id).await;
        }
    }
    Ok(())
}

async fn handle_callback(bot: &Bot, q: &CallbackQuery) -> Result<(), Box<dyn Error + Send + Sync>> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let Some(message) = &q.message else {
        return Ok(());
    };

    bot.edit_message_text(message.chat().id, message.id(), instruction_for(data))
        .await?;
    Ok(())
}

fn instruction_for(data: &str) -> &'static str {
    match data {
        "cmd_weather" => "Send /weather <city>\nExample: /weather Delhi",
        "cmd_recommend" => "Send /recommend <crop>\nExample: /recommend wheat",
        "cmd_price" => "Send /price <commodity>\nExample: /price urea",
        "cmd_disease" => "Send /disease <symptoms>\nExample: /disease brown spots",
        other => {
            log::debug!("Unrecognized callback payload: {}", other);
            "Unknown command."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_token_maps_to_its_command() {
        assert_eq!(
            instruction_for("cmd_weather"),
            "Send /weather <city>\nExample: /weather Delhi"
        );
        assert!(instruction_for("cmd_recommend").contains("/recommend wheat"));
        assert!(instruction_for("cmd_price").contains("/price urea"));
        assert!(instruction_for("cmd_disease").contains("/disease brown spots"));
    }

    #[test]
    fn unknown_token_gets_a_generic_reply() {
        assert_eq!(instruction_for("cmd_bogus"), "Unknown command.");
    }
}
