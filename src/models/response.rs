use teloxide::types::InlineKeyboardMarkup;

/// One outbound reply: formatted text plus an optional inline keyboard.
///
/// Composers build it, the send helper in `handlers::utils` consumes it.
#[derive(Debug, Clone)]
pub struct ResponsePayload {
    pub text: String,
    pub buttons: Option<InlineKeyboardMarkup>,
}

impl ResponsePayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: None,
        }
    }

    pub fn with_buttons(text: impl Into<String>, buttons: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            buttons: Some(buttons),
        }
    }
}
