pub mod config;
pub mod encoding;
pub mod error;
pub mod transport;
pub mod trigger;
pub mod ui;

pub use error::SearchError;
pub use transport::{HttpTransport, Transport};
pub use trigger::SearchTrigger;
pub use ui::{MemoryPage, UiSurface};
