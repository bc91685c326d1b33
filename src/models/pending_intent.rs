/// What the bot asked the user and is now waiting for.
///
/// One command without an argument maps to exactly one variant; adding a
/// new two-step command means adding a variant here plus its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingIntent {
    AwaitingWeatherCity,
    AwaitingCropName,
    AwaitingCommodity,
    AwaitingSymptoms,
}

impl PendingIntent {
    /// The clarifying question sent when the command arrived without its argument.
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingIntent::AwaitingWeatherCity => {
                "Which city would you like weather for? (Example: Delhi)"
            }
            PendingIntent::AwaitingCropName => {
                "Which crop do you want recommendations for? (Example: wheat)"
            }
            PendingIntent::AwaitingCommodity => {
                "Which commodity price would you like? (Example: urea)"
            }
            PendingIntent::AwaitingSymptoms => {
                "Please describe the symptoms (e.g. 'yellow leaves' or 'brown spots'):"
            }
        }
    }
}
