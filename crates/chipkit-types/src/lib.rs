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

//! Validated chip values used to render enumerated values in a UI.
//!
//! A chip is a compact element made of a label plus two presentation tokens
//! (`variant` and `size`). Construction validates the label and fills in
//! defaults for empty presentation tokens; the resulting [`ChipValue`] is
//! immutable.
//!
//! Layout: `chip.rs` (`ChipValue`, builder, wire record), `token.rs` (known
//! variant/size tokens), `error.rs` (`ChipError`).

pub mod chip;
pub mod error;
pub mod token;

pub use chip::{ChipBuilder, ChipRecord, ChipValue};
pub use error::{ChipError, ChipResult};
pub use token::{ChipSize, ChipVariant, DEFAULT_SIZE, DEFAULT_VARIANT, UnknownToken};
