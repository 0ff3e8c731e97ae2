use crate::message::ServerMessage;
use crate::traits::{Channel, Frame};
use crate::user_registry::UserRegistry;

/// Encodes `message` once and fans it out to every live participant except
/// `without`. Returns how many recipients accepted the frame.
pub fn broadcast<C: Channel>(
    users: &mut UserRegistry<C>,
    message: &ServerMessage,
    without: Option<&str>,
) -> usize {
    match message.to_frame() {
        Ok(frame) => broadcast_frame(users, &frame, without),
        Err(e) => {
            log::error!("Failed to encode {:?}: {}", message, e);
            0
        }
    }
}

/// Fans out an already encoded frame. A failing recipient is skipped; it
/// gets removed once its connection reports the close.
pub fn broadcast_frame<C: Channel>(
    users: &mut UserRegistry<C>,
    frame: &Frame,
    without: Option<&str>,
) -> usize {
    let mut delivered = 0;
    users.for_each_live_channel(|user_id, channel| {
        if without.map_or(false, |w| w == user_id.as_str()) {
            return;
        }
        match channel.send(frame.clone()) {
            Ok(()) => delivered += 1,
            Err(e) => log::debug!("Skipping {}: {}", user_id, e),
        }
    });
    delivered
}
