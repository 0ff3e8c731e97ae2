use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tokio::sync::oneshot;

use system::{Participant, Session, SessionSummary, UserId};

use crate::connection::{ConnectionEvent, ConnectionId};
use crate::connection_tx::ConnectionTx;
use crate::identity::{display_name, generate_user_id, pick_color};

pub type ServerTx = UnboundedSender<ServerCommand>;

/// Commands from connection actors and HTTP handlers. Commands of one
/// connection are handled in the order that connection sent them, so an
/// `Inbound` or `Disconnect` never overtakes its `Connect`.
#[derive(Debug)]
pub enum ServerCommand {
    Connect {
        from: ConnectionId,
        tx: UnboundedSender<ConnectionEvent>,
    },
    Disconnect {
        from: ConnectionId,
    },
    Inbound {
        from: ConnectionId,
        text: String,
    },
    Describe {
        tx: oneshot::Sender<SessionSummary>,
    },
}

/// Sole owner of the shared session. Commands are handled one at a time,
/// in arrival order.
struct Server {
    session: Session<ConnectionTx>,
    connections: HashMap<ConnectionId, UserId>,
    rng: StdRng,
}

impl Server {
    fn new() -> Self {
        Self {
            session: Session::new(),
            connections: HashMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    fn handle_command(&mut self, command: ServerCommand) {
        match command {
            ServerCommand::Connect { from, tx } => {
                if self.connections.contains_key(&from) {
                    log::warn!("Connection {} is already joined", from);
                    return;
                }
                let users = self.session.users();
                let user_id = generate_user_id(&mut self.rng, |id| users.contains(id));
                let name = display_name(&user_id);
                let color = pick_color(&mut self.rng);
                self.connections.insert(from, user_id.clone());
                self.session.connect(Participant::new(
                    user_id,
                    name,
                    color,
                    ConnectionTx::new(tx),
                ));
            }
            ServerCommand::Disconnect { from } => {
                if let Some(user_id) = self.connections.remove(&from) {
                    self.session.disconnect(&user_id);
                } else {
                    log::debug!("Connection {} was not joined", from);
                }
            }
            ServerCommand::Inbound { from, text } => {
                if let Some(user_id) = self.connections.get(&from) {
                    self.session.handle_frame(user_id, &text);
                } else {
                    log::debug!("Dropping frame from unknown connection {}", from);
                }
            }
            ServerCommand::Describe { tx } => {
                if tx.send(self.session.summary()).is_err() {
                    log::debug!("Describe requester went away");
                }
            }
        }
    }
}

pub fn spawn_server() -> ServerTx {
    let (srv_tx, mut srv_rx) = unbounded_channel::<ServerCommand>();

    tokio::spawn(async move {
        let mut server = Server::new();

        while let Some(command) = srv_rx.recv().await {
            server.handle_command(command);
        }
        log::info!("Server task terminated");
    });

    srv_tx
}
