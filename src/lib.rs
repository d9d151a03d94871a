//! Typed Rust client for the SimPro v3 SIM-management REST API.
//!
//! The crate is layered the same way throughout: a domain layer of strong
//! types, a transport layer for paths, query strings and JSON decoding, a
//! client layer that authenticates and sends requests, and per-resource
//! services built on top of the client.
//!
//! ```rust,no_run
//! use simpro::{ClientConfig, SimProClient, SimsListFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), simpro::SimProError> {
//!     let client = SimProClient::new(ClientConfig {
//!         api_key: "...".to_owned(),
//!         api_client: "...".to_owned(),
//!         ..Default::default()
//!     })?;
//!     let sims = client
//!         .sims()
//!         .get_sims(&SimsListFilter::default().status("active"))
//!         .await?;
//!     println!("{} SIMs", sims.sim_count);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod service;
mod transport;

pub use client::{
    ClientConfig, CredentialPair, Credentials, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SimProClient,
    SimProClientBuilder, SimProError,
};
pub use domain::{
    AccountNumber, Iccid, Mno, Page, SimLocation, SimUsageQuery, SimsListFilter, SimsListItem,
    SimsListResponse, SimsUsageItem, SimsUsageResponse, TariffBearer, TariffListFilter,
    TariffListItem, TariffListResponse, ValidationError,
};
pub use reqwest::Method;
pub use service::{SimService, TariffService};
pub use transport::{Endpoint, encode_list};
