// Utils compartilhados

pub mod format;
pub mod storage;

pub use format::*;
pub use storage::*;
