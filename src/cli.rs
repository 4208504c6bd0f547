//! Command-line interface of the `skybet` binary.

use clap::{Parser, Subcommand};
use skybet_client::{AUTH_PARAM, QueryParams, RequestBuilder, SegmentArg};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, ConfigError};

/// Query the Sky Bet sports API and print the JSON result.
#[derive(Debug, Parser)]
#[command(name = "skybet", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, short, env = "SKYBET_CONFIG")]
    pub config: Option<PathBuf>,

    /// API user sent as the `api_user` query parameter.
    #[arg(long, env = "SKYBET_API_USER")]
    pub api_user: Option<String>,

    /// Override the API base URI.
    #[arg(long, env = "SKYBET_BASE_URI")]
    pub base_uri: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Endpoint to query.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the event classes (A-Z).
    Classes,
    /// Fetch an event document.
    Event {
        /// Event identifier.
        id: String,
        /// Fetch the event's primary market.
        #[arg(long)]
        primary_market: bool,
        /// Fetch a single market of the event.
        #[arg(long)]
        market: Option<String>,
    },
    /// Fetch a path below the sports API prefix, e.g. `path football competitions`.
    Path {
        /// Path segments.
        #[arg(required = true)]
        segments: Vec<String>,
        /// Extra query parameters as key=value.
        #[arg(short, long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
    },
    /// Fetch a path relative to the base URI.
    Url {
        /// Path including any API prefix, e.g. `/sportsapi/v2/football`.
        path: String,
        /// Extra query parameters as key=value.
        #[arg(short, long = "query", value_parser = parse_key_val)]
        query: Vec<(String, String)>,
    },
}

impl Cli {
    /// Resolves the effective configuration: file (or defaults) first, then
    /// command-line overrides.
    ///
    /// # Errors
    /// Returns error if the file cannot be loaded or the result is invalid.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(user) = &self.api_user {
            config.params.insert(AUTH_PARAM, user.as_str());
        }
        if let Some(base_uri) = &self.base_uri {
            config.client.base_uri = base_uri.clone();
        }
        if let Some(secs) = self.timeout {
            config.client.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Command {
    /// Derives the request builder for this command from the root builder.
    ///
    /// # Errors
    /// Returns error if the chain is rejected by the builder.
    pub fn build(&self, root: &RequestBuilder) -> Result<RequestBuilder, skybet_client::Error> {
        match self {
            Self::Classes => Ok(root.classes()),
            Self::Event {
                id,
                primary_market,
                market,
            } => {
                let event = root.event(id, *primary_market);
                Ok(match market {
                    Some(market_id) => event.segment("market", [market_id.as_str()]),
                    None => event,
                })
            }
            Self::Path { segments, query } => {
                let (first, rest) = segments.split_first().ok_or_else(|| {
                    skybet_client::Error::Chain("at least one path segment is required".into())
                })?;
                let below = match rest.split_first() {
                    Some((name, values)) => root
                        .sport(first)
                        .segment(name, values.iter().map(|v| SegmentArg::from(v.as_str()))),
                    None => root.sport(first),
                };
                Ok(below.with_params(&to_params(query)))
            }
            Self::Url { path, query } => root.set_request_url(path.as_str(), Some(to_params(query))),
        }
    }
}

fn to_params(pairs: &[(String, String)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{}`", s))?;
    if key.is_empty() {
        return Err(format!("invalid key=value: empty key in `{}`", s));
    }
    Ok((key.to_string(), value.to_string()))
}
