//! Authenticated requests against an ExtraHop appliance's REST API.
//!
//! ```no_run
//! # async fn run() -> ehop::Result<()> {
//! use ehop::{ApplianceClient, ClientOptions, Credential};
//!
//! let client = ApplianceClient::new(&ClientOptions::default())?;
//! let credential = Credential::new("0123456789abcdef", "eh.example.com");
//! let response = client.send("GET", "devices", "", &credential).await?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod credential;
pub mod error;
pub mod http;
pub mod models;
pub mod ui;
pub mod utils;

pub use credential::Credential;
pub use error::{EhopError, Result};
pub use http::{ApplianceClient, ClientOptions};
