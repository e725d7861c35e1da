//! Request dispatch
//!
//! Every resource client sends its requests through one [`BaseQuery`]. The
//! dispatcher resolves the current session, attaches the bearer token when
//! there is one, sends the request and unwraps the response envelope.
//!
//! Two transports implement the seam:
//! - [`DynamicBaseQuery`] talks to the backend over the network (reqwest)
//! - [`OneshotBaseQuery`] drives an axum [`Router`] in process

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use crate::session::SessionSource;
use crate::{ClientConfig, ClientError, ClientResult};

/// One API call, relative to the API root
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            method,
            path: if path.starts_with('/') { path } else { format!("/{}", path) },
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query parameters
    pub fn with_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Attach a JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ClientResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path plus encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let qs = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, qs)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}

/// The request-construction seam shared by all resource clients
///
/// Returns the whole response body of a successful envelope; decoding
/// `data` (and `meta` for paged lists) is left to the caller.
#[async_trait]
pub trait BaseQuery: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value>;
}

/// Turn a status + raw body into the envelope value or a [`ClientError`]
pub(crate) fn decode_response(status: StatusCode, bytes: &[u8]) -> ClientResult<Value> {
    let body: Option<Value> = if bytes.is_empty() {
        None
    } else {
        Some(
            serde_json::from_slice(bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned())),
        )
    };

    if !status.is_success() {
        return Err(ClientError::from_body(status.as_u16(), body));
    }

    match body {
        // 204 and friends
        None => Ok(Value::Null),
        Some(Value::Object(map)) => {
            if map.get("success").and_then(Value::as_bool) == Some(false) {
                return Err(ClientError::from_body(status.as_u16(), Some(Value::Object(map))));
            }
            Ok(Value::Object(map))
        }
        Some(other) => Err(ClientError::InvalidResponse(format!(
            "expected a JSON envelope, got {}",
            other
        ))),
    }
}

async fn bearer(session: &dyn SessionSource) -> Option<String> {
    match session.session().await {
        Ok(Some(s)) => Some(format!("Bearer {}", s.access_token)),
        Ok(None) => None,
        Err(e) => {
            // Unauthenticated requests still go out; the backend decides
            tracing::warn!(error = %e, "session lookup failed, sending request without token");
            None
        }
    }
}

/// Network dispatcher
#[derive(Clone)]
pub struct DynamicBaseQuery {
    client: Client,
    config: ClientConfig,
    session: Arc<dyn SessionSource>,
}

impl DynamicBaseQuery {
    pub fn new(config: ClientConfig, session: Arc<dyn SessionSource>) -> ClientResult<Self> {
        Ok(Self::with_client(build_http_client(&config)?, config, session))
    }

    /// Reuse an existing connection pool
    pub fn with_client(client: Client, config: ClientConfig, session: Arc<dyn SessionSource>) -> Self {
        Self {
            client,
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Build the reqwest client for a configuration
pub fn build_http_client(config: &ClientConfig) -> ClientResult<Client> {
    Ok(Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout))
        .build()?)
}

#[async_trait]
impl BaseQuery for DynamicBaseQuery {
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
        let url = format!("{}{}", self.config.api_base(), request.path);
        let mut req = self
            .client
            .request(request.method.clone(), &url)
            .query(&request.query);

        if let Some(auth) = bearer(self.session.as_ref()).await {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        tracing::debug!(request = %request, "dispatching");
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        decode_response(status, &bytes)
    }
}

/// In-process dispatcher
///
/// Calls the router directly with `oneshot`, no network involved. Handy for
/// tests and for embedding a backend in the same binary.
#[derive(Clone)]
pub struct OneshotBaseQuery {
    router: Router,
    api_prefix: String,
    session: Arc<dyn SessionSource>,
}

impl OneshotBaseQuery {
    /// `router` must already have its state applied
    pub fn new(router: Router, session: Arc<dyn SessionSource>) -> Self {
        Self {
            router,
            api_prefix: "/api".to_string(),
            session,
        }
    }

    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into().trim_end_matches('/').to_string();
        self
    }

    async fn build_request(&self, request: &ApiRequest) -> ClientResult<Request<Body>> {
        let uri = format!("{}{}", self.api_prefix, request.path_and_query());
        let mut builder = Request::builder().method(request.method.clone()).uri(uri);

        if let Some(auth) = bearer(self.session.as_ref()).await {
            builder = builder.header(http::header::AUTHORIZATION, auth);
        }

        let body = match &request.body {
            Some(value) => {
                builder = builder.header(http::header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(value)?)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }
}

#[async_trait]
impl BaseQuery for OneshotBaseQuery {
    async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
        let http_request = self.build_request(&request).await?;

        tracing::debug!(request = %request, "dispatching in process");
        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Http(format!("Failed to read body: {}", e)))?;
        decode_response(status, &bytes)
    }
}

/// How to reach the backend; builds a dispatcher per session
#[derive(Clone)]
pub enum Transport {
    Network { client: Client, config: ClientConfig },
    InProcess { router: Router, api_prefix: String },
}

impl Transport {
    pub fn network(config: ClientConfig) -> ClientResult<Self> {
        Ok(Transport::Network {
            client: build_http_client(&config)?,
            config,
        })
    }

    pub fn in_process(router: Router) -> Self {
        Transport::InProcess {
            router,
            api_prefix: "/api".to_string(),
        }
    }

    pub fn connect(&self, session: Arc<dyn SessionSource>) -> Arc<dyn BaseQuery> {
        match self {
            Transport::Network { client, config } => Arc::new(DynamicBaseQuery::with_client(
                client.clone(),
                config.clone(),
                session,
            )),
            Transport::InProcess { router, api_prefix } => {
                Arc::new(OneshotBaseQuery::new(router.clone(), session).with_api_prefix(api_prefix.clone()))
            }
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Network { config, .. } => write!(f, "Transport::Network({})", config.api_base()),
            Transport::InProcess { api_prefix, .. } => write!(f, "Transport::InProcess({})", api_prefix),
        }
    }
}
