//! CMS adapters implementing the `ContentSource` port.

mod strapi;

pub use strapi::{StrapiConfig, StrapiContentSource};
