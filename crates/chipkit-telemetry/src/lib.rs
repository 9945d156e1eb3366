#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging setup shared across the chipkit workspace.
//!
//! Layout: `init.rs` (global subscriber installation), `capture.rs`
//! (in-memory event capture layer), `error.rs` (`TelemetryError`).

pub mod capture;
pub mod error;
pub mod init;

pub use capture::{CapturedEvent, EventCapture};
pub use error::{Result, TelemetryError};
pub use init::{LogFormat, LoggingConfig, init_logging};
