//! # Panther API Client
//!
//! A Rust client for the Panther security platform's control-plane API,
//! covering the two protocols Panther serves side by side.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`PantherConfig`] and [`PantherConfigBuilder`]
//! - Resolution of the four accepted API URL forms into a GraphQL endpoint
//!   and a REST base ([`Endpoints`])
//! - A GraphQL client for S3 log sources, cloud accounts, schemas, roles and users
//! - A REST client for HTTP log sources, rules, data models and globals
//! - [`ApiClient`], serving every operation of both through the
//!   [`GraphqlOperations`] and [`RestOperations`] traits
//! - Resource handlers in [`provider`] that reconcile role permissions and
//!   report failures as diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use panther_api::{ApiToken, ApiUrl, PantherConfig};
//! use std::time::Duration;
//!
//! let config = PantherConfig::builder()
//!     .api_url(ApiUrl::new("https://api.acme.runpanther.net/public/graphql").unwrap())
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoints().rest_base(), "https://api.acme.runpanther.net");
//! assert_eq!(
//!     config.endpoints().graphql_endpoint(),
//!     "https://api.acme.runpanther.net/public/graphql"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use panther_api::resources::{CreateRuleInput, RuleModifiableAttributes};
//! use panther_api::{ApiClient, GraphqlOperations, RestOperations};
//!
//! let client = ApiClient::connect("https://api.acme.runpanther.net", "your-api-token")?;
//!
//! let rule = client
//!     .create_rule(
//!         "AWS.Root.Login",
//!         &CreateRuleInput {
//!             attributes: RuleModifiableAttributes {
//!                 body: "def rule(event): return True".into(),
//!                 enabled: true,
//!                 ..Default::default()
//!             },
//!         },
//!     )
//!     .await?;
//!
//! if let Some(schema) = client.get_schema("Custom.MyLogs").await? {
//!     println!("{} is at revision {}", schema.name, schema.revision);
//! }
//! ```
//!
//! ## Errors
//!
//! GraphQL operations return [`GraphqlError`], REST operations return
//! [`RestError`]. Both name the failed operation and convert into [`Error`]
//! with `?`. Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Composition**: [`ApiClient`] forwards to its sub-clients without runtime routing

pub mod clients;
pub mod config;
pub mod error;
pub mod provider;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ApiUrl, Endpoints, PantherConfig, PantherConfigBuilder};
pub use error::{ConfigError, Error};

// Re-export client types
pub use clients::{
    ApiClient, GraphqlClient, GraphqlError, GraphqlOperations, HttpError, PantherApi,
    RestClient, RestError, RestOperations,
};
