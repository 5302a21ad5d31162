pub mod effect;
pub mod event;
pub mod session;

pub use session::FormSession;
