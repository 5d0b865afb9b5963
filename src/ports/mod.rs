//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentSource` - Port for fetching raw decision-graph records from
//!   the CMS

mod content_source;

pub use content_source::{
    ContentNodeRef, ContentPathEntry, ContentRecord, ContentSource, ContentSourceError,
};
