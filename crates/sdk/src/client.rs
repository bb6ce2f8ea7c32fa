//! Baton Client Implementation

use crate::error::Result;
use crate::error::SdkError;
use crate::types::{
    AcquireResponse, ChatMessageResponse, ListResponse, QueueSnapshot, ReleaseResponse,
    StatsResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Serialize;
use std::time::Duration;

/// Baton daemon client
///
/// # Example
///
/// ```no_run
/// use baton_sdk::BatonClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BatonClient::connect("http://127.0.0.1:9531").await?;
/// let response = client.acquire("staging-db", "ana").await?;
/// println!("{} -> {}", response.resource, response.status);
/// # Ok(())
/// # }
/// ```
pub struct BatonClient {
    client: HttpClient,
}

impl BatonClient {
    /// Connect to the Baton daemon
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9531`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Acquire a resource, or join its waiting list when it is held
    pub async fn acquire(
        &self,
        resource: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<AcquireResponse> {
        let params = named(&[("resource", resource.into()), ("user", user.into())])?;
        Ok(self.client.request("reservation.acquire.v1", params).await?)
    }

    /// Release a resource held by `user`
    pub async fn release(
        &self,
        resource: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<ReleaseResponse> {
        let params = named(&[("resource", resource.into()), ("user", user.into())])?;
        Ok(self.client.request("reservation.release.v1", params).await?)
    }

    /// Current owner and waiters of a resource
    ///
    /// Fails with code 4001 (see [`SdkError::is_not_found`]) when nobody holds it.
    pub async fn query(&self, resource: impl Into<String>) -> Result<QueueSnapshot> {
        let params = named(&[("resource", resource.into())])?;
        Ok(self.client.request("reservation.query.v1", params).await?)
    }

    /// All held resources, ordered by name
    pub async fn list(&self) -> Result<Vec<QueueSnapshot>> {
        let response: ListResponse = self
            .client
            .request("reservation.list.v1", ObjectParams::new())
            .await?;
        Ok(response.queues)
    }

    /// Send one line of chat text on behalf of `user` and get the replies
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use baton_sdk::BatonClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = BatonClient::connect("http://127.0.0.1:9531").await?;
    /// for line in client.send_message("ana", "pido staging-db").await? {
    ///     println!("{}", line);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message(
        &self,
        user: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Vec<String>> {
        let params = named(&[("user", user.into()), ("text", text.into())])?;
        let response: ChatMessageResponse =
            self.client.request("chat.message.v1", params).await?;
        Ok(response.messages)
    }

    /// Daemon statistics
    pub async fn stats(&self) -> Result<StatsResponse> {
        Ok(self
            .client
            .request("admin.stats.v1", ObjectParams::new())
            .await?)
    }
}

fn named<V: Serialize>(fields: &[(&str, V)]) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    for (name, value) in fields {
        params.insert(name, value)?;
    }
    Ok(params)
}
