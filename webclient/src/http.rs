use std::sync::Arc;

use reqwest::header::{HeaderName, HeaderValue};
use serde::Deserialize;

pub use ::reqwest::{Error, IntoUrl, Request, Response, StatusCode};

/// HTTP basic credentials sent with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new<S1, S2>(username: S1, password: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

/// Shared transport. Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    inner: ::reqwest::Client,
    credentials: Option<Arc<Credentials>>,
}

pub struct RequestBuilder {
    inner: ::reqwest::RequestBuilder,
    client: Client,
}

macro_rules! emit_request_fn {
    ($method:ident) => {
        pub fn $method(&self, u: impl IntoUrl) -> RequestBuilder {
            RequestBuilder::new(self.authorize(self.inner.$method(u)), self.clone())
        }
    };
}

impl Client {
    /// `insecure` disables TLS certificate verification.
    pub fn new(credentials: Option<Credentials>, insecure: bool) -> Result<Self, Error> {
        let inner = ::reqwest::Client::builder()
            .gzip(true)
            .danger_accept_invalid_certs(insecure)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            inner,
            credentials: credentials.filter(|c| !c.is_empty()).map(Arc::new),
        })
    }

    emit_request_fn!(get);
    emit_request_fn!(post);

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn authorize(&self, b: ::reqwest::RequestBuilder) -> ::reqwest::RequestBuilder {
        match &self.credentials {
            Some(c) => b.basic_auth(&c.username, Some(&c.password)),
            None => b,
        }
    }

    async fn execute_request(&self, req: Request) -> Result<Response, Error> {
        log::debug!("{} {}", req.method(), req.url());
        let resp = self.inner.execute(req).await?;
        log::debug!("{} {} -> {}", resp.url(), resp.status(), resp.content_length().unwrap_or(0));
        Ok(resp)
    }
}

impl RequestBuilder {
    fn new(b: ::reqwest::RequestBuilder, client: Client) -> Self {
        Self { inner: b, client }
    }

    pub async fn send(self) -> Result<Response, Error> {
        let req = self.inner.build()?;
        self.client.execute_request(req).await
    }

    pub fn body(mut self, body: impl Into<::reqwest::Body>) -> Self {
        self.inner = self.inner.body(body);
        self
    }

    pub fn header<K, V>(self, key: K, value: V) -> RequestBuilder
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<::http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<::http::Error>,
    {
        Self::new(self.inner.header(key, value), self.client)
    }
}
