//! RPC Round-trip Tests
//!
//! Real JSON-RPC server on an ephemeral port, driven through the SDK client.

use baton_api_rpc::{RpcServer, RpcServerConfig};
use baton_core::application::{ChatService, KeywordIntentParser, ReservationRegistry};
use baton_core::port::id_provider::mocks::SequentialIdProvider;
use baton_core::port::phrase_picker::mocks::FirstPhrasePicker;
use baton_core::port::time_provider::mocks::MockTimeProvider;
use baton_sdk::{code, BatonClient};
use jsonrpsee::server::ServerHandle;
use std::sync::Arc;

/// Server on an ephemeral port plus a connected client.
/// Keep the handle alive for the duration of the test.
async fn start_server() -> (BatonClient, ServerHandle) {
    let registry = Arc::new(ReservationRegistry::new(Arc::new(MockTimeProvider::new(
        1_700_000_000_000,
    ))));
    let chat = Arc::new(ChatService::new(
        registry.clone(),
        Arc::new(KeywordIntentParser::default()),
        Arc::new(Default::default()),
        Arc::new(FirstPhrasePicker),
        Arc::new(SequentialIdProvider::default()),
    ));

    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let (addr, server) = RpcServer::new(config, registry, chat)
        .start()
        .await
        .unwrap();

    let client = BatonClient::connect(format!("http://{}", addr)).await.unwrap();
    (client, server)
}

#[tokio::test]
async fn test_handoff_over_rpc() {
    let (client, _server) = start_server().await;

    let a = client.acquire("R", "A").await.unwrap();
    assert!(a.is_owner());
    assert_eq!(a.owner, "A");
    assert!(a.ahead.is_empty());

    let b = client.acquire("R", "B").await.unwrap();
    assert_eq!(b.status, "QUEUED");
    assert_eq!(b.owner, "A");
    assert!(b.ahead.is_empty());

    let c = client.acquire("R", "C").await.unwrap();
    assert_eq!(c.ahead, vec!["B"]);

    let snapshot = client.query("R").await.unwrap();
    assert_eq!(snapshot.owner, "A");
    assert_eq!(snapshot.waiters, vec!["B", "C"]);
    assert_eq!(snapshot.owner_since_ms, 1_700_000_000_000);

    let first = client.release("R", "A").await.unwrap();
    assert_eq!(first.status, "HANDED_OFF");
    assert_eq!(first.previous_owner, "A");
    assert_eq!(first.new_owner.as_deref(), Some("B"));
    assert_eq!(first.remaining, vec!["C"]);

    let second = client.release("R", "B").await.unwrap();
    assert_eq!(second.new_owner.as_deref(), Some("C"));
    assert!(second.remaining.is_empty());

    let last = client.release("R", "C").await.unwrap();
    assert_eq!(last.status, "RELEASED");
    assert_eq!(last.new_owner, None);

    let err = client.query("R").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_error_codes() {
    let (client, _server) = start_server().await;

    let err = client.acquire("", "A").await.unwrap_err();
    assert_eq!(err.code(), Some(code::VALIDATION_ERROR));

    let err = client.release("R2", "A").await.unwrap_err();
    assert_eq!(err.code(), Some(code::NOT_FOUND));

    client.acquire("R", "A").await.unwrap();
    client.acquire("R", "B").await.unwrap();

    let err = client.acquire("R", "A").await.unwrap_err();
    assert_eq!(err.code(), Some(code::CONFLICT));

    let err = client.acquire("R", "B").await.unwrap_err();
    assert_eq!(err.code(), Some(code::CONFLICT));

    let err = client.release("R", "B").await.unwrap_err();
    assert_eq!(err.code(), Some(code::FORBIDDEN));

    // Rejected calls changed nothing
    let snapshot = client.query("R").await.unwrap();
    assert_eq!(snapshot.owner, "A");
    assert_eq!(snapshot.waiters, vec!["B"]);
}

#[tokio::test]
async fn test_list_and_stats() {
    let (client, _server) = start_server().await;

    assert!(client.list().await.unwrap().is_empty());

    client.acquire("zeta", "A").await.unwrap();
    client.acquire("alpha", "B").await.unwrap();
    client.acquire("alpha", "C").await.unwrap();

    let queues = client.list().await.unwrap();
    let names: Vec<&str> = queues.iter().map(|q| q.resource.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.active_resources, 2);
    assert_eq!(stats.waiting_users, 1);
}

#[tokio::test]
async fn test_chat_message_over_rpc() {
    let (client, _server) = start_server().await;

    let replies = client.send_message("ana", "pido printer").await.unwrap();
    assert_eq!(replies, vec!["printer ha sido reservado por ana"]);

    let replies = client.send_message("bea", "pido printer").await.unwrap();
    assert_eq!(
        replies,
        vec![
            "Actualmente printer está siendo utilizado por @ana",
            "Eres la siguiente en la lista",
        ]
    );

    // Chat and direct calls share one registry
    let snapshot = client.query("printer").await.unwrap();
    assert_eq!(snapshot.waiters, vec!["bea"]);

    let replies = client.send_message("bea", "buenos días").await.unwrap();
    assert_eq!(replies, vec!["Error al procesar texto"]);
}
