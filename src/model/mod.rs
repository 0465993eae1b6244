//! Domain model types (pure).
//!
//! All types in this module are plain data; nothing here touches the
//! filesystem or the terminal.

pub mod byte_size;
pub mod candidate;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use byte_size::format_bytes;
pub use candidate::{Candidate, CandidateId};
pub use error::{AppError, IndexError, LaunchError};
pub use key_action::KeyAction;
