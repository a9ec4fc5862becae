//! # Sandbar Client
//!
//! `sandbar` is a client for the sandbar financial-compliance data API:
//! entity/account/transaction ingestion, investigation and rule-output
//! retrieval, and Unit banking-partner passthrough calls.
//!
//! ## Key components
//!
//! * **[`Client`]:** the entry point. One async method per RPC; each call is
//!   a single JSON POST, optionally authenticated with HTTP Basic auth.
//! * **[`wire`]:** the gateway's JSON contract, verbatim. Every field the
//!   server may omit is optional here, including oneof tags.
//! * **[`api`]:** the public model the client returns. Mandatory fields are
//!   plain values and oneofs are real sum types, so contract-conforming data
//!   is the only data these types can hold.
//! * **[`translate`]:** the pure functions that lift wire shapes into the
//!   public model, rejecting contract-breaking responses with a
//!   [`ProtocolViolation`].
//!
//! ## Errors
//!
//! Construction problems surface as [`BuildError`] before any network I/O.
//! A call fails with [`CallError`]: a transport failure (including any
//! non-success HTTP status), a codec failure, or a protocol violation. A
//! partial entity is deliberately not an error; see
//! [`api::Entity::Generated`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use sandbar::api::{Event, EventPayload, EntityCreate};
//! use sandbar::{Client, ClientOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientOptions {
//!     subdomain: Some("acme".to_string()),
//!     ..ClientOptions::default()
//! })?;
//!
//! let response = client
//!     .submit_events(vec![Event::Create(EventPayload::Entity(
//!         EntityCreate::new("person-1", "Jane Doe", "1980-01-01"),
//!     ))])
//!     .await?;
//! println!("{}", response.message);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod method;
pub mod translate;
pub mod transport;
pub mod wire;

pub use client::{BuildError, CallError, Client, ClientOptions, HostSpecifier};
pub use translate::ProtocolViolation;
pub use transport::{BasicAuth, TransportError};
