use std::time::Duration;

use actix_web::{test, App};
use awc::ws;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::oneshot;

use server::connection::ConnectionIdSource;
use server::handlers;
use server::server::{spawn_server, ServerCommand, ServerTx};
use system::serde_json::{self, json, Value};
use system::SessionSummary;

fn start(srv_tx: &ServerTx) -> test::TestServer {
    let srv_tx = srv_tx.clone();
    let ids = ConnectionIdSource::default();
    test::start(move || {
        App::new()
            .data(srv_tx.clone())
            .data(ids.clone())
            .configure(handlers::root)
    })
}

async fn describe(srv_tx: &ServerTx) -> SessionSummary {
    let (tx, rx) = oneshot::channel();
    srv_tx.send(ServerCommand::Describe { tx }).unwrap();
    rx.await.unwrap()
}

/// Polls the session until `done` holds, giving actors time to notice
/// closed sockets.
async fn wait_for<F>(srv_tx: &ServerTx, done: F) -> SessionSummary
where
    F: Fn(&SessionSummary) -> bool,
{
    for _ in 0..100 {
        let summary = describe(srv_tx).await;
        if done(&summary) {
            return summary;
        }
        actix_rt::time::delay_for(Duration::from_millis(50)).await;
    }
    describe(srv_tx).await
}

async fn next_json<S, E>(framed: &mut S) -> Value
where
    S: futures_util::Stream<Item = Result<ws::Frame, E>> + Unpin,
    E: std::fmt::Debug,
{
    match framed.next().await {
        Some(Ok(ws::Frame::Text(bytes))) => serde_json::from_slice(&bytes).unwrap(),
        other => panic!("unexpected {:?}", other),
    }
}

#[actix_rt::test]
async fn it_forgets_clients_that_close_right_after_the_handshake() {
    let srv_tx = spawn_server();
    let mut srv = start(&srv_tx);

    for _ in 0..50 {
        let framed = srv.ws_at("/ws").await.unwrap();
        drop(framed);
    }

    let summary = wait_for(&srv_tx, |s| s.users.is_empty()).await;
    assert!(summary.users.is_empty(), "left behind: {:?}", summary.users);
}

#[actix_rt::test]
async fn it_routes_frames_sent_before_the_greeting_arrives() {
    let srv_tx = spawn_server();
    let mut srv = start(&srv_tx);

    let mut clients = Vec::new();
    for n in 0..20 {
        let mut framed = srv.ws_at("/ws").await.unwrap();
        let draw = json!({ "type": "draw", "operation": { "n": n } }).to_string();
        framed.send(ws::Message::Text(draw)).await.unwrap();
        clients.push(framed);
    }

    let summary = wait_for(&srv_tx, |s| s.operations == 20).await;
    assert_eq!(summary.operations, 20);
    assert_eq!(summary.users.len(), 20);
}

#[actix_rt::test]
async fn it_greets_and_announces_departure_over_websocket() {
    let srv_tx = spawn_server();
    let mut srv = start(&srv_tx);

    let mut alice = srv.ws_at("/ws").await.unwrap();
    let init = next_json(&mut alice).await;
    assert_eq!(init["type"], "init");
    assert_eq!(next_json(&mut alice).await["type"], "usersList");
    assert_eq!(next_json(&mut alice).await["type"], "history");

    let mut bob = srv.ws_at("/ws").await.unwrap();
    let bob_init = next_json(&mut bob).await;
    let joined = next_json(&mut alice).await;
    assert_eq!(joined["type"], "userJoined");
    assert_eq!(joined["user"]["id"], bob_init["userId"]);

    drop(bob);
    assert_eq!(
        next_json(&mut alice).await,
        json!({ "type": "userLeft", "userId": bob_init["userId"] })
    );

    let summary = wait_for(&srv_tx, |s| s.users.len() == 1).await;
    assert_eq!(summary.users[0].id, init["userId"].as_str().unwrap());
}
