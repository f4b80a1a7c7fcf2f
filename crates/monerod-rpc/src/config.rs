//! Endpoint configuration for [`DaemonClient`](crate::DaemonClient).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::rpc::Transport;

/// Where and how to reach a daemon.
///
/// `address` is the node's base URL (for example `http://127.0.0.1:18081`);
/// endpoint paths such as `/json_rpc` or `/get_height` are appended to it.
/// When `transport` is `None`, the client builds a default
/// [`ReqwestTransport`](crate::ReqwestTransport) at construction.
#[derive(Clone, Default)]
pub struct DaemonConfig {
    pub address: String,
    pub custom_headers: HashMap<String, String>,
    pub transport: Option<Arc<dyn Transport>>,
}

impl DaemonConfig {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Add a header sent with every request. Later values for the same name
    /// replace earlier ones.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }
}

impl fmt::Debug for DaemonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.custom_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();
        f.debug_struct("DaemonConfig")
            .field("address", &self.address)
            .field("custom_headers", &header_names)
            .field("transport", &self.transport.as_ref().map(|_| ".."))
            .finish()
    }
}
