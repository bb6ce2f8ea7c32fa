//! JSON-RPC Server
//!
//! Serves the reservation API over HTTP on localhost.

use crate::error::ServerError;
use crate::handler::RpcHandler;
use crate::types::{ChatMessageRequest, QueryRequest, ReservationRequest};
use baton_core::application::{ChatService, ReservationRegistry};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9531;

/// RPC Server Configuration
pub struct RpcServerConfig {
    pub host: String,
    /// 0 picks an ephemeral port
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        registry: Arc<ReservationRegistry>,
        chat: Arc<ChatService>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(registry, chat)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful when port 0 was requested) and the
    /// handle used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = server
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;

        let module = self.build_module()?;

        let handle = server.start(module);
        info!(addr = %local_addr, "JSON-RPC server started successfully");
        Ok((local_addr, handle))
    }

    fn build_module(&self) -> Result<RpcModule<()>, ServerError> {
        let mut module = RpcModule::new(());

        let handler = self.handler.clone();
        module
            .register_async_method("reservation.acquire.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ReservationRequest = params.parse()?;
                    handler.acquire(req).await
                }
            })
            .map_err(|e| register_error("reservation.acquire.v1", e))?;

        let handler = self.handler.clone();
        module
            .register_async_method("reservation.release.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ReservationRequest = params.parse()?;
                    handler.release(req).await
                }
            })
            .map_err(|e| register_error("reservation.release.v1", e))?;

        let handler = self.handler.clone();
        module
            .register_async_method("reservation.query.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: QueryRequest = params.parse()?;
                    handler.query(req).await
                }
            })
            .map_err(|e| register_error("reservation.query.v1", e))?;

        let handler = self.handler.clone();
        module
            .register_async_method("reservation.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list().await }
            })
            .map_err(|e| register_error("reservation.list.v1", e))?;

        let handler = self.handler.clone();
        module
            .register_async_method("chat.message.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: ChatMessageRequest = params.parse()?;
                    handler.chat_message(req).await
                }
            })
            .map_err(|e| register_error("chat.message.v1", e))?;

        let handler = self.handler.clone();
        module
            .register_async_method("admin.stats.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.stats().await }
            })
            .map_err(|e| register_error("admin.stats.v1", e))?;

        Ok(module)
    }
}

fn register_error(method: &'static str, err: impl std::fmt::Display) -> ServerError {
    ServerError::Register {
        method,
        reason: err.to_string(),
    }
}
