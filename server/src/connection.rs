use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix::{Actor, ActorContext, AsyncContext, Handler, Message, Running, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;

use system::Frame;

use crate::server::{ServerCommand, ServerTx};

/// Transport-level handle for one WebSocket, unique for the process lifetime.
pub type ConnectionId = usize;

/// Source of `ConnectionId`s, shared between HTTP workers.
pub type ConnectionIdSource = Arc<AtomicUsize>;

#[derive(Debug)]
pub enum ConnectionEvent {
    Frame(Frame),
}

#[derive(Message)]
#[rtype(result = "()")]
struct ConnectionActorMessage(ConnectionEvent);

struct ConnectionActor {
    id: ConnectionId,
    registered: bool,
    srv_tx: ServerTx,
}

impl Actor for ConnectionActor {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<ConnectionEvent>();

        if self
            .srv_tx
            .send(ServerCommand::Connect { from: self.id, tx })
            .is_err()
        {
            log::error!("Server is gone, refusing connection {}", self.id);
            ctx.stop();
            return;
        }
        self.registered = true;

        let addr = ctx.address().recipient();

        tokio::spawn(async move {
            log::debug!("connection green thread - started");
            while let Some(event) = rx.recv().await {
                if addr.do_send(ConnectionActorMessage(event)).is_err() {
                    break;
                }
            }
            log::debug!("connection green thread - terminated");
        });
    }

    fn stopping(&mut self, _: &mut Self::Context) -> Running {
        if self.registered {
            self.registered = false;
            if self
                .srv_tx
                .send(ServerCommand::Disconnect { from: self.id })
                .is_err()
            {
                log::warn!("Server is gone, could not report {} leaving", self.id);
            }
        }

        Running::Stop
    }
}

/// Ingress
impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ConnectionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Text(text)) => {
                log::trace!("Ingress from {}: {}", self.id, text);
                let command = ServerCommand::Inbound {
                    from: self.id,
                    text: text.to_string(),
                };
                if self.srv_tx.send(command).is_err() {
                    log::warn!("Server is gone, closing connection {}", self.id);
                    ctx.stop();
                }
            }
            Ok(ws::Message::Binary(bin)) => {
                log::debug!("Ignoring binary frame of {} bytes", bin.len());
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(_) => (),
            Err(e) => {
                log::warn!("WebSocket protocol error on {}: {}", self.id, e);
                ctx.stop();
            }
        }
    }
}

/// Egress
impl Handler<ConnectionActorMessage> for ConnectionActor {
    type Result = ();

    fn handle(
        &mut self,
        msg: ConnectionActorMessage,
        ctx: &mut ws::WebsocketContext<Self>,
    ) -> Self::Result {
        match msg.0 {
            ConnectionEvent::Frame(frame) => {
                log::trace!("Egress {}", frame);
                ctx.text(&*frame);
            }
        }
    }
}

pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    srv_tx: web::Data<ServerTx>,
    ids: web::Data<ConnectionIdSource>,
) -> Result<HttpResponse, Error> {
    let id = ids.fetch_add(1, Ordering::SeqCst);
    ws::start(
        ConnectionActor {
            id,
            registered: false,
            srv_tx: srv_tx.get_ref().clone(),
        },
        &req,
        stream,
    )
}
