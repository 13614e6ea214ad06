pub mod component;
pub mod error;
pub mod server;
pub mod state;

pub use component::{Connector, Handler, HttpChannel, LifecycleListener};
pub use error::{BridgeError, ErrorCode};
pub use server::{Request, RequestDispatch, Response, ServerLifecycle};
pub use state::LifecycleState;
