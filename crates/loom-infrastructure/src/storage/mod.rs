pub mod atomic_file;
pub mod session_storage;

pub use atomic_file::{AtomicFile, AtomicFileError, FileFormat};
pub use session_storage::FileSessionRepository;
