//! spam-guard: front end for the SMS spam classifier
//!
//! Loads the fitted vectorizer and classifier once, then serves
//! predictions over HTTP or from the command line.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! listen_addr = "0.0.0.0:5000"
//!
//! [artifacts]
//! vectorizer = "artifacts/vectorizer.json"
//! classifier = "artifacts/classifier.json"
//!
//! [logging]
//! filter = "spam_guard=info,tower_http=info"
//! ```

pub mod config;
pub mod error;
pub mod evaluate;
pub mod http;

pub use config::GuardConfig;
pub use error::{GuardError, Result};
pub use evaluate::{evaluate, Evaluation};
pub use http::{router, SharedService};
