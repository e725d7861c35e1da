//! Shared web state

use std::sync::Arc;

use foodie_client::{Anonymous, ClientResult, FoodieClient, MemorySession, Session, SessionSource, Transport};

use crate::Config;

/// State shared by every handler
///
/// Holds the transport only; each request gets its own [`FoodieClient`]
/// (and cache) bound to the caller's session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<Config>,
    pub transport: Transport,
}

impl AppState {
    /// State talking to the configured backend over the network
    pub fn new(config: Config) -> ClientResult<Self> {
        let transport = Transport::network(config.backend.clone())?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn with_transport(config: Config, transport: Transport) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Request-scoped client for `session`
    pub fn client_for(&self, session: Option<Session>) -> FoodieClient {
        let source: Arc<dyn SessionSource> = match session {
            Some(s) => Arc::new(MemorySession::with_session(s)),
            None => Arc::new(Anonymous),
        };
        FoodieClient::connect(&self.transport, source)
    }
}
