//! Remote release data
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────┐
//! │  ReleaseSource   │────▶│    parse     │
//! │ (fetch/download) │     │ (pure text)  │
//! └──────────────────┘     └──────────────┘
//!          ▲
//!          │
//! ┌──────────────────┐
//! │  FactorioSource  │
//! │  (reqwest/HTTP)  │
//! └──────────────────┘
//! ```
//!
//! - [`source`]: `ReleaseSource` trait, the seam mocked in tests
//! - [`parse`]: archive page, latest-releases and checksum listing parsers
//! - [`factorio`]: HTTP implementation, including the streaming download digest

pub mod factorio;
pub mod parse;
pub mod source;

pub use factorio::FactorioSource;
pub use parse::ChecksumTable;
pub use source::ReleaseSource;
