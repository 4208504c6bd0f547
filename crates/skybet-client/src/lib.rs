//! HTTP client library for the Sky Bet sports API.
//!
//! Requests are described by chaining calls on an immutable
//! [`RequestBuilder`]; each call returns a new builder with the endpoint path
//! extended and the query parameters merged. The terminal [`get`] performs a
//! single HTTP GET and unwraps the endpoint's JSON envelope when present.
//!
//! # Example
//!
//! ```no_run
//! use skybet_client::{ClientConfig, QueryParams, RequestBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), skybet_client::Error> {
//!     let api = RequestBuilder::create(
//!         ClientConfig::default(),
//!         QueryParams::from([("api_user", "test")]),
//!         None,
//!     )?;
//!
//!     // Available event classes
//!     let classes = api.classes().get().await?;
//!     println!("{}", classes);
//!
//!     // Market of an event's primary market
//!     let market = api
//!         .event("20739612", true)
//!         .segment("market", ["86571269"])
//!         .get()
//!         .await?;
//!     println!("{}", market);
//!
//!     Ok(())
//! }
//! ```
//!
//! [`get`]: RequestBuilder::get

mod builder;
mod config;
mod error;
mod params;

pub use builder::{EVENT_CLASSES_KEY, RequestBuilder, SegmentArg};
pub use config::{
    AUTH_PARAM, ClientConfig, DEFAULT_BASE_URI, DEFAULT_SPORT_API_PATH, DEFAULT_TIMEOUT_SECS,
};
pub use error::Error;
pub use params::{ParamValue, QueryParams};
