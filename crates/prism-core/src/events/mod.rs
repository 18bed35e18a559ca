//! Pipeline progress events.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::PrismEventHandler;
pub use types::*;
