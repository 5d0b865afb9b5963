//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `cms` - Strapi implementation of the `ContentSource` port
//! - `artifact` - Decision graph artifact file on disk

pub mod artifact;
pub mod cms;

pub use cms::{StrapiConfig, StrapiContentSource};
