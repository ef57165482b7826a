//! Avatarpak - avatar package builder for console homebrew tools
//!
//! This library converts portrait images into `.xavatar` bundles: the source
//! raster is resized to the four resolutions the console expects, each is
//! encoded as a block-compressed DDS texture, a synthetic profile document is
//! added for offline-activated users, and everything is archived into a single
//! flat ZIP container. A batch orchestrator repeats the pipeline over a set of
//! images and can push each produced archive to an FTP endpoint.
//!
//! # Pipeline
//!
//! ```text
//! batch::run_batch ──► package::build_in (per image)
//!                           │
//!                           ├─► texture::encode_avatar (440, 260, 128, 64)
//!                           ├─► profile::OnlineProfile (ActivatedOffline only)
//!                           └─► archive::write_archive
//!                      transfer::upload (optional, per archive)
//! ```
//!
//! All operations are synchronous and sequential; configuration is passed
//! explicitly on every call. The [`config`] module only backs the CLI front
//! end and is never consulted by the pipeline itself.

pub mod archive;
pub mod batch;
pub mod config;
pub mod dds;
pub mod package;
pub mod profile;
pub mod texture;
pub mod transfer;
