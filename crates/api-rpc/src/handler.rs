//! RPC Method Handlers
//!
//! Thin adapters from JSON-RPC params to the registry and the chat service.

use crate::error::to_rpc_error;
use crate::types::{
    AcquireResponse, ChatMessageRequest, ChatMessageResponse, ListResponse, QueryRequest,
    ReleaseResponse, ReservationRequest, StatsResponse,
};
use baton_core::application::{ChatService, ReservationRegistry};
use baton_core::domain::{QueueSnapshot, ReservationError};
use jsonrpsee::types::ErrorObjectOwned;
use std::sync::Arc;
use tracing::debug;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    registry: Arc<ReservationRegistry>,
    chat: Arc<ChatService>,
    start_time: std::time::Instant,
}

impl RpcHandler {
    pub fn new(registry: Arc<ReservationRegistry>, chat: Arc<ChatService>) -> Self {
        Self {
            registry,
            chat,
            start_time: std::time::Instant::now(),
        }
    }

    /// reservation.acquire.v1
    pub async fn acquire(
        &self,
        params: ReservationRequest,
    ) -> Result<AcquireResponse, ErrorObjectOwned> {
        let outcome = self
            .registry
            .acquire(&params.resource, &params.user)
            .map_err(rpc_error)?;

        Ok(outcome.into())
    }

    /// reservation.release.v1
    pub async fn release(
        &self,
        params: ReservationRequest,
    ) -> Result<ReleaseResponse, ErrorObjectOwned> {
        let outcome = self
            .registry
            .release(&params.resource, &params.user)
            .map_err(rpc_error)?;

        Ok(outcome.into())
    }

    /// reservation.query.v1
    pub async fn query(&self, params: QueryRequest) -> Result<QueueSnapshot, ErrorObjectOwned> {
        self.registry.query(&params.resource).map_err(rpc_error)
    }

    /// reservation.list.v1
    pub async fn list(&self) -> Result<ListResponse, ErrorObjectOwned> {
        Ok(ListResponse {
            queues: self.registry.list(),
        })
    }

    /// chat.message.v1
    pub async fn chat_message(
        &self,
        params: ChatMessageRequest,
    ) -> Result<ChatMessageResponse, ErrorObjectOwned> {
        let messages = self.chat.handle(&params.user, &params.text);
        debug!(user = %params.user, replies = messages.len(), "Chat message handled");

        Ok(ChatMessageResponse { messages })
    }

    /// admin.stats.v1
    pub async fn stats(&self) -> Result<StatsResponse, ErrorObjectOwned> {
        let queues = self.registry.list();

        Ok(StatsResponse {
            active_resources: queues.len(),
            waiting_users: queues.iter().map(|q| q.waiters.len()).sum(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }
}

fn rpc_error(err: ReservationError) -> ErrorObjectOwned {
    to_rpc_error(err.into())
}
