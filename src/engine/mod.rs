//! Version resolution and synchronisation
//!
//! - [resolver]: decides which source supplies the version
//! - [sync]: writes the version file and publishes commit + tag

pub mod resolver;
pub mod sync;

pub use resolver::{Resolution, Resolver};
pub use sync::{SyncCoordinator, SyncReport};
