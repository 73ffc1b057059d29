// btpanel-api: Async Rust client for the BT (BaoTa) server panel HTTP API

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod form;
pub mod models;
pub mod token;
pub mod transport;

pub use client::PanelClient;
pub use config::{ClientConfig, ClientOptions, RejectionMarkers};
pub use endpoints::{Endpoint, EndpointTable};
pub use error::{Error, ErrorKind};
pub use form::Form;
pub use token::{RequestTime, compute_token};
pub use transport::{TlsMode, TransportConfig};
