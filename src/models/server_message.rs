use serde::{Deserialize, Serialize};

/// Walk status reported as `active` by the backend.
pub const SESSION_STATUS_ACTIVE: &str = "active";

/// Walk status reported as `paused` by the backend.
pub const SESSION_STATUS_PAUSED: &str = "paused";

/// Walk status reported as `completed` by the backend.
pub const SESSION_STATUS_COMPLETED: &str = "completed";

/// Messages sent from the tracking backend to the client.
///
/// The `type` field is the discriminator; frames whose payload carries no
/// recognizable discriminator fail decode and are dropped by the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Acknowledgement of a received location batch.
    BatchAck {
        #[serde(rename = "sessionId")]
        session_id: String,
        /// Number of samples the backend accepted from the batch.
        received: u32,
    },

    /// Backend-driven change of the walk's status
    /// (`active`, `paused`, `completed`).
    SessionStatus {
        #[serde(rename = "sessionId")]
        session_id: String,
        status: String,
    },

    /// Backend-reported error scoped to this session.
    Error {
        #[serde(rename = "sessionId", skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        message: String,
    },
}
