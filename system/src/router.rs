use crate::broadcast::{broadcast, broadcast_frame};
use crate::message::{ClientMessage, ServerMessage};
use crate::session::Session;
use crate::traits::{Channel, Frame};

impl<C: Channel> Session<C> {
    /// Parses one inbound text frame and routes it. Frames that do not
    /// decode are dropped without a reply.
    pub fn handle_frame(&mut self, from: &str, frame: &str) {
        match ClientMessage::parse(frame) {
            Ok(message) => self.dispatch(from, message, frame),
            Err(e) => log::debug!("Dropping frame from {}: {}", from, e),
        }
    }

    /// `raw` is the frame `message` was decoded from; a draw is forwarded
    /// to the other participants exactly as received.
    pub fn dispatch(&mut self, from: &str, message: ClientMessage, raw: &str) {
        match message {
            ClientMessage::Draw { operation } => {
                self.log.append(operation);
                broadcast_frame(&mut self.users, &Frame::from(raw), Some(from));
                self.broadcast_history();
            }
            ClientMessage::Cursor { x, y } => {
                let message = match self.users.get(from) {
                    Some(sender) => ServerMessage::Cursor {
                        user_id: sender.id.clone(),
                        user_name: sender.name.clone(),
                        color: sender.color,
                        x,
                        y,
                    },
                    None => {
                        log::debug!("Cursor from unknown participant {}", from);
                        return;
                    }
                };
                broadcast(&mut self.users, &message, Some(from));
            }
            ClientMessage::Undo => {
                if self.log.undo() {
                    self.broadcast_history();
                }
            }
            ClientMessage::Redo => {
                if self.log.redo() {
                    self.broadcast_history();
                }
            }
            ClientMessage::Clear => {
                self.log.clear();
                broadcast(&mut self.users, &ServerMessage::Clear, None);
            }
            ClientMessage::Unknown => {
                log::debug!("Ignoring unrecognized message from {}", from);
            }
        }
    }
}
