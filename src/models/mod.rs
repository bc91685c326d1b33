pub mod pending_intent;
pub mod response;

pub use pending_intent::PendingIntent;
pub use response::ResponsePayload;
