use crate::error::ProtocolError;
use crate::traits::Frame;
use crate::types::{Color, Operation, UserId, UserSummary};
use serde::{Deserialize, Serialize};

/// Inbound frame from a client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Draw { operation: Operation },
    /// Coordinates are relayed as sent; a missing one stays missing.
    Cursor {
        #[serde(default)]
        x: Option<serde_json::Value>,
        #[serde(default)]
        y: Option<serde_json::Value>,
    },
    Undo,
    Redo,
    Clear,
    #[serde(other)]
    Unknown,
}

impl ClientMessage {
    pub fn parse(frame: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(frame)?)
    }
}

/// Outbound frame produced by the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    Init { user_id: UserId, color: Color },
    UsersList { users: Vec<UserSummary> },
    UserJoined { user: UserSummary },
    #[serde(rename_all = "camelCase")]
    UserLeft { user_id: UserId },
    History { operations: Vec<Operation> },
    HistoryUpdate { operations: Vec<Operation> },
    #[serde(rename_all = "camelCase")]
    Cursor {
        user_id: UserId,
        user_name: String,
        color: Color,
        #[serde(skip_serializing_if = "Option::is_none")]
        x: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        y: Option<serde_json::Value>,
    },
    Clear,
}

impl ServerMessage {
    pub fn to_frame(&self) -> Result<Frame, ProtocolError> {
        Ok(Frame::from(serde_json::to_string(self)?))
    }
}
