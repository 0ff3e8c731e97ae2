use crate::broadcast::broadcast;
use crate::message::ServerMessage;
use crate::operation_log::OperationLog;
use crate::traits::Channel;
use crate::types::SessionSummary;
use crate::user_registry::{Participant, UserRegistry};

/// The shared drawing session: who is connected and what has been drawn.
///
/// A `Session` must be driven by one owner at a time; every method runs to
/// completion before the next inbound event is looked at.
pub struct Session<C> {
    pub(crate) users: UserRegistry<C>,
    pub(crate) log: OperationLog,
}

impl<C: Channel> Session<C> {
    pub fn new() -> Self {
        Self {
            users: UserRegistry::new(),
            log: OperationLog::new(),
        }
    }

    pub fn users(&self) -> &UserRegistry<C> {
        &self.users
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            users: self.users.list_all(),
            operations: self.log.len(),
            active_operations: self.log.active_slice().len(),
            can_undo: self.log.can_undo(),
            can_redo: self.log.can_redo(),
        }
    }

    /// Registers a freshly accepted connection, greets it with the current
    /// roster and canvas, then announces it to everyone else.
    pub fn connect(&mut self, participant: Participant<C>) {
        let user_id = participant.id.clone();
        let color = participant.color;
        let summary = participant.summary();
        self.users.add(participant);
        log::info!("{} joined ({} online)", user_id, self.users.len());

        self.send_to(&user_id, &ServerMessage::Init {
            user_id: user_id.clone(),
            color,
        });
        let users = self.users.list_all();
        self.send_to(&user_id, &ServerMessage::UsersList { users });
        let operations = self.log.active_slice().to_vec();
        self.send_to(&user_id, &ServerMessage::History { operations });

        broadcast(
            &mut self.users,
            &ServerMessage::UserJoined { user: summary },
            Some(&user_id),
        );
    }

    /// Returns false if the participant was already gone, in which case
    /// nothing is announced.
    pub fn disconnect(&mut self, user_id: &str) -> bool {
        if self.users.remove(user_id).is_none() {
            log::debug!("{} was not registered", user_id);
            return false;
        }
        log::info!("{} left ({} online)", user_id, self.users.len());
        broadcast(
            &mut self.users,
            &ServerMessage::UserLeft {
                user_id: user_id.to_string(),
            },
            None,
        );
        true
    }

    pub(crate) fn send_to(&mut self, user_id: &str, message: &ServerMessage) {
        let frame = match message.to_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Failed to encode {:?}: {}", message, e);
                return;
            }
        };
        if let Some(participant) = self.users.get_mut(user_id) {
            if let Err(e) = participant.channel.send(frame) {
                log::debug!("Could not greet {}: {}", user_id, e);
            }
        } else {
            log::warn!("{} is not registered", user_id);
        }
    }

    /// Re-syncs every client with the active prefix of the log.
    pub(crate) fn broadcast_history(&mut self) {
        let message = ServerMessage::HistoryUpdate {
            operations: self.log.active_slice().to_vec(),
        };
        broadcast(&mut self.users, &message, None);
    }
}

impl<C: Channel> Default for Session<C> {
    fn default() -> Self {
        Self::new()
    }
}
