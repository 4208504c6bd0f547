//! Fluent request builder for the sports API.
//!
//! A [`RequestBuilder`] is an immutable value. Every chain step reads only
//! from its parent and returns a fresh builder with the endpoint path extended
//! and the query parameters merged, so a builder can be branched freely:
//!
//! ```text
//! root ──classes()──────────────────────────────▶ /sportsapi/v2/a-z
//!   ├───event("20739612", true)─────────────────▶ /sportsapi/v2/event/20739612/primary-market
//!   │      └──segment("market", ["86571269"])───▶ .../primary-market/market/86571269
//!   └───sport("football")───────────────────────▶ /sportsapi/v2/football
//! ```
//!
//! [`RequestBuilder::segment`] is the single extensibility mechanism for
//! endpoints that have no named method.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

use crate::config::{AUTH_PARAM, ClientConfig};
use crate::error::Error;
use crate::params::QueryParams;


/// Envelope key of the event classes (A-Z) endpoint.
pub const EVENT_CLASSES_KEY: &str = "event_classes";

/// Characters escaped in a raw endpoint path. `?` and `#` must never end
/// the path early, otherwise the query string is not sent.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in a single path segment.
const SEGMENT: &AsciiSet = &PATH.add(b'/').add(b'%');

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// An argument of a [`RequestBuilder::segment`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentArg {
    /// Appended to the endpoint path as `/value`.
    Value(String),
    /// Merged into the query parameters.
    Params(QueryParams),
}

impl From<&str> for SegmentArg {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for SegmentArg {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<u64> for SegmentArg {
    fn from(value: u64) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<QueryParams> for SegmentArg {
    fn from(params: QueryParams) -> Self {
        Self::Params(params)
    }
}

/// Immutable builder of a single sports API request.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    http: Client,
    base_uri: String,
    api_path: String,
    endpoint_path: Option<String>,
    query_params: QueryParams,
    response_unwrap_key: Option<String>,
    timeout: Duration,
}

impl RequestBuilder {
    /// Creates a root builder.
    ///
    /// # Arguments
    /// * `config` - Base URI, API prefix, timeout and user agent.
    /// * `initial_params` - Query parameters sent with every request; must
    ///   contain `api_user` by the time [`get`](Self::get) is called.
    /// * `endpoint_path` - Optional endpoint the builder starts at.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn create(
        config: ClientConfig,
        initial_params: QueryParams,
        endpoint_path: Option<String>,
    ) -> Result<Self, Error> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client is unavailable: {}", e)))?;

        Ok(Self {
            http,
            base_uri: config.base_uri.trim_end_matches('/').to_string(),
            api_path: config.sport_api_path,
            endpoint_path: endpoint_path.map(|p| utf8_percent_encode(&p, PATH).to_string()),
            query_params: initial_params,
            response_unwrap_key: None,
            timeout: config.timeout,
        })
    }

    /// Creates a root builder with the default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(initial_params: QueryParams) -> Result<Self, Error> {
        Self::create(ClientConfig::default(), initial_params, None)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the endpoint path, if one is set.
    #[must_use]
    pub fn endpoint_path(&self) -> Option<&str> {
        self.endpoint_path.as_deref()
    }

    /// Returns the query parameters.
    #[must_use]
    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    /// Returns the envelope key unwrapped from responses, if any.
    #[must_use]
    pub fn response_unwrap_key(&self) -> Option<&str> {
        self.response_unwrap_key.as_deref()
    }

    /// Returns the URL a request from this builder would hit.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`] if the URL does not parse, or
    /// [`Error::Encode`] if the query cannot be encoded.
    pub fn request_url(&self) -> Result<Url, Error> {
        let mut url = format!(
            "{}{}",
            self.base_uri,
            self.endpoint_path.as_deref().unwrap_or_default()
        );
        let query = self.query_params.to_query_string()?;
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        Ok(Url::parse(&url)?)
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Returns a copy with the timeout replaced. Zero disables the timeout.
    #[must_use]
    pub fn with_timeout(&self, seconds: u64) -> Self {
        Self {
            timeout: Duration::from_secs(seconds),
            ..self.clone()
        }
    }

    /// Returns a copy pointed at another base URI.
    #[must_use]
    pub fn with_base_uri(&self, base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.trim_end_matches('/').to_string(),
            ..self.clone()
        }
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    /// Targets the event classes (A-Z) list, unwrapping `event_classes`.
    #[must_use]
    pub fn classes(&self) -> Self {
        Self {
            endpoint_path: Some(format!("{}/a-z", self.api_path)),
            response_unwrap_key: Some(EVENT_CLASSES_KEY.to_string()),
            ..self.clone()
        }
    }

    /// Targets an event document, or its primary market.
    #[must_use]
    pub fn event(&self, event_id: &str, primary_market: bool) -> Self {
        let mut path = format!("{}/event/{}", self.api_path, encode_segment(event_id));
        if primary_market {
            path.push_str("/primary-market");
        }

        Self {
            endpoint_path: Some(path),
            ..self.clone()
        }
    }

    /// Targets a resource directly below the sports API prefix, e.g.
    /// `sport("football")` for `/sportsapi/v2/football`.
    #[must_use]
    pub fn sport(&self, name: &str) -> Self {
        Self {
            endpoint_path: Some(format!("{}/{}", self.api_path, encode_segment(name))),
            ..self.clone()
        }
    }

    /// Returns a copy with `params` merged into the query parameters.
    #[must_use]
    pub fn with_params(&self, params: &QueryParams) -> Self {
        Self {
            query_params: self.query_params.merge(params, false),
            ..self.clone()
        }
    }

    /// Creates a new root builder pointed at an arbitrary path.
    ///
    /// The new builder keeps this builder's settings and merges `params` into
    /// its query parameters. It does not inherit the envelope key. `/` in
    /// `path` separates segments; `?`, `#` and spaces are escaped.
    ///
    /// # Errors
    /// Returns [`Error::Chain`] if this builder already targets an endpoint.
    pub fn set_request_url(
        &self,
        path: impl Into<String>,
        params: Option<QueryParams>,
    ) -> Result<Self, Error> {
        if let Some(endpoint) = &self.endpoint_path {
            return Err(Error::Chain(format!(
                "builder already targets {}; set_request_url needs a root builder",
                endpoint
            )));
        }

        let path: String = path.into();
        let query_params = match params {
            Some(params) => self.query_params.merge(&params, false),
            None => self.query_params.clone(),
        };

        Ok(Self {
            endpoint_path: Some(utf8_percent_encode(&path, PATH).to_string()),
            query_params,
            response_unwrap_key: None,
            ..self.clone()
        })
    }

    /// Appends `/name` to the endpoint path.
    ///
    /// Each argument is either a value appended as `/value` or a parameter
    /// mapping merged into the query parameters. Names and values are
    /// escaped as single path segments. A builder without an endpoint starts
    /// the path at the base URI; use [`sport`](Self::sport) to start below
    /// the sports API prefix.
    #[must_use]
    pub fn segment<I, A>(&self, name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<SegmentArg>,
    {
        let mut path = self.endpoint_path.clone().unwrap_or_default();
        path.push('/');
        path.push_str(&encode_segment(name));

        let mut query_params = self.query_params.clone();
        for arg in args {
            match arg.into() {
                SegmentArg::Value(value) => {
                    path.push('/');
                    path.push_str(&encode_segment(&value));
                }
                SegmentArg::Params(params) => {
                    query_params = query_params.merge(&params, false);
                }
            }
        }

        Self {
            endpoint_path: Some(path),
            query_params,
            ..self.clone()
        }
    }

    /// Appends a bare `/name` segment.
    #[must_use]
    pub fn path(&self, name: &str) -> Self {
        self.segment(name, std::iter::empty::<SegmentArg>())
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Performs the request and returns the parsed JSON.
    ///
    /// If the response is a JSON object holding the envelope key, the value
    /// under that key is returned instead of the whole document.
    ///
    /// # Errors
    /// * [`Error::MissingParameter`] if `api_user` is absent; no request is sent.
    /// * [`Error::Transport`] if the HTTP exchange does not complete.
    /// * [`Error::Request`] on a non-2xx status, carrying the raw body.
    /// * [`Error::Json`] if a 2xx body is not valid JSON.
    ///
    /// A zero timeout sends the request without a deadline.
    pub async fn get(&self) -> Result<Value, Error> {
        if !self.query_params.contains_key(AUTH_PARAM) {
            return Err(Error::MissingParameter(AUTH_PARAM.to_string()));
        }

        let url = self.request_url()?;
        debug!(
            endpoint = self.endpoint_path.as_deref().unwrap_or("/"),
            timeout_secs = self.timeout.as_secs(),
            "Sending sports API request"
        );

        let mut request = self.http.get(url);
        if !self.timeout.is_zero() {
            request = request.timeout(self.timeout);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            let value: Value = serde_json::from_str(&body)?;
            Ok(self.unwrap_envelope(value))
        } else {
            warn!(
                status = status.as_u16(),
                endpoint = self.endpoint_path.as_deref().unwrap_or("/"),
                "Sports API request failed"
            );
            Err(Error::Request {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Performs the request and deserializes the result into `T`.
    ///
    /// # Errors
    /// Returns the errors of [`get`](Self::get), or [`Error::Json`] if the
    /// result does not match `T`.
    pub async fn get_as<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let value = self.get().await?;
        Ok(serde_json::from_value(value)?)
    }

    fn unwrap_envelope(&self, value: Value) -> Value {
        let Some(key) = self.response_unwrap_key.as_deref() else {
            return value;
        };

        match value {
            Value::Object(mut map) => match map.remove(key) {
                Some(inner) => {
                    trace!(key, "Unwrapped response envelope");
                    inner
                }
                None => Value::Object(map),
            },
            other => other,
        }
    }
}
