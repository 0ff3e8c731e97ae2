use crate::connection::ConnectionEvent;
use system::{Channel, ChannelClosed, Frame};
use tokio::sync::mpsc::UnboundedSender;

/// Send half of a connection actor's egress queue, as held by the session.
pub struct ConnectionTx {
    tx: UnboundedSender<ConnectionEvent>,
    open: bool,
}

impl ConnectionTx {
    pub fn new(tx: UnboundedSender<ConnectionEvent>) -> Self {
        Self { tx, open: true }
    }
}

impl Channel for ConnectionTx {
    fn is_open(&self) -> bool {
        self.open
    }

    fn send(&mut self, frame: Frame) -> Result<(), ChannelClosed> {
        if self.tx.send(ConnectionEvent::Frame(frame)).is_err() {
            // the actor dropped its receiver; its Disconnect is on the way
            self.open = false;
            return Err(ChannelClosed);
        }
        Ok(())
    }
}
