//! Application layer: services over the domain
//!
//! This layer orchestrates domain logic and owns the filesystem boundary.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod error_ext;

pub use catalog::{CatalogService, SolutionStatus};
pub use editor::open_in_editor;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
