pub mod listing;
pub mod model;
pub mod repl;
pub mod session;

// Re-export commonly used types/functions for consumers
pub use listing::{list_range, Row};
pub use model::{load_raw_bin, read_u32, read_u8, Image};
pub use session::{Mode, Session, SessionConfig, Step, StepError};
