//! # folio-assistant
//!
//! The scripted portfolio assistant: keyword intent classification, canned
//! response selection, delayed cancellable replies, chat sessions, and the
//! playground labs.

pub mod assistant;
pub mod classifier;
pub mod playground;
pub mod reply;
pub mod selector;
pub mod session;

pub use assistant::Assistant;
pub use playground::LabResponder;
pub use reply::PendingReply;
pub use session::Session;
