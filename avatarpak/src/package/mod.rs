//! Avatar package assembly.
//!
//! This module owns the single-image pipeline: it stages the source raster in
//! a scratch workspace, drives the texture encoder over the fixed size set,
//! synthesizes profile metadata when the classification calls for it, and
//! hands the collected files to the archiver in their fixed order. The
//! scratch workspace is removed on every exit path.

mod builder;
mod request;
mod workspace;

pub mod naming;

pub use builder::{build, build_in, PackageError};
pub use request::{PackageRequest, UserClassification};
pub use workspace::{ScratchWorkspace, WorkspaceError};
