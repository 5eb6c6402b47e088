//! Structural differencer for API documents.
//!
//! Produces the hierarchical [`SpecDiff`] record consumed by the scoring
//! engine in [`crate::delta`].
//!
//! # Architecture
//!
//! - [`DiffEngine`] pairs endpoints across the two documents
//! - the per-level computers in [`changes`] compare parameters, responses and schemas
//! - every level with added/deleted/modified/unchanged collections implements
//!   [`DiffNode`](traits::DiffNode)
//!
//! # Example
//!
//! ```ignore
//! use oas_delta::diff::DiffEngine;
//!
//! let engine = DiffEngine::new().match_path("^/pets")?;
//! let diff = engine.diff(&base, &revision)?;
//! println!("{} endpoints modified", diff.endpoints.modified.len());
//! ```

pub mod changes;
mod engine;
pub mod paths;
mod result;
pub mod traits;

pub use engine::{DiffEngine, DiffOptions};
pub use result::{
    ContentDiff, EndpointsDiff, MethodDiff, NamesByLocation, ParameterDiff, ParametersDiff,
    ResponseDiff, ResponsesDiff, SchemaDiff, SpecDiff, ValueDiff,
};
pub use traits::{ChangeCounts, DiffNode};
