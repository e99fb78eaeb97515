//! Infrastructure layer of the Loom client: where things live on disk and
//! how they are written there.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::LoomPaths;
pub use crate::storage::FileSessionRepository;
