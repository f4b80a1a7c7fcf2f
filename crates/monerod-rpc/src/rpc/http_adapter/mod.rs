//! HTTP implementation of the daemon client.
//!
//! `client` owns configuration and the two dispatch skeletons (JSON-RPC
//! envelope and direct endpoint); `json_rpc_methods` and `other_methods`
//! declare one thin typed entry point per daemon operation on top of them.

mod client;
mod connection;
mod json_rpc_methods;
mod other_methods;
mod protocol;
mod transport;

pub use client::DaemonClient;
pub use transport::ReqwestTransport;
