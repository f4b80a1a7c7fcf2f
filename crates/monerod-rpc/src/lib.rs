//! Typed client for a Monero daemon's RPC surface.
//!
//! Operations grouped under the node's multiplexed `/json_rpc` endpoint go
//! through a JSON-RPC 2.0 envelope; the remaining administrative endpoints
//! are plain JSON over HTTP. Both share one [`DaemonClient`].

pub mod block_id;
pub mod config;
pub mod error;
pub mod rpc;
#[cfg(test)]
mod test_util;
pub mod types;

pub use block_id::BlockId;
pub use config::DaemonConfig;
pub use error::{BoxError, ClientError, TransportError};
pub use rpc::{DaemonClient, HttpRequest, HttpResponse, ReqwestTransport, Transport};
