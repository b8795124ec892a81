pub mod hub;
pub mod protocol;
pub mod session;

pub use hub::{HubEvent, WsRegistry};
