//! # Sky Bet API - command-line front end
//!
//! Configuration loading and the command-line interface around the
//! [`skybet_client`] request builder.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration file (`[client]` settings and `[params]`) |
//! | [`cli`] | `clap` command definitions mapped onto request chains |
//!
//! ## Configuration File
//!
//! ```toml
//! [client]
//! base_uri = "https://services.skybet.com"
//! sport_api_path = "/sportsapi/v2"
//! timeout_secs = 5
//!
//! [params]
//! api_user = "test"
//! ```
//!
//! ## Commands
//!
//! | Command | Request |
//! |---------|---------|
//! | `skybet classes` | `GET /sportsapi/v2/a-z`, unwrapping `event_classes` |
//! | `skybet event 20739612` | `GET /sportsapi/v2/event/20739612` |
//! | `skybet event 20739612 --primary-market --market 86571269` | `GET .../event/20739612/primary-market/market/86571269` |
//! | `skybet path football competitions -q lang=en` | `GET /sportsapi/v2/football/competitions?lang=en` |
//! | `skybet url /sportsapi/v2/tennis` | `GET /sportsapi/v2/tennis` |
//!
//! Every request also carries the configured `[params]`, which must include
//! `api_user`.

pub mod cli;
pub mod config;

pub use config::{Config, ConfigError};
