//! Modal dialogs

pub mod completion;
pub mod confirm;
pub mod help;
