pub mod agent;
pub mod event;
pub mod session;

pub use agent::*;
pub use event::*;
pub use session::*;
