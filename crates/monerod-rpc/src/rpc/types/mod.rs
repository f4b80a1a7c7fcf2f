//! Request and response shapes for every daemon operation.
//!
//! [`json_rpc`] holds the shapes carried inside the `/json_rpc` envelope,
//! [`other`] the ones exchanged directly with a dedicated endpoint. Field
//! names are the node's wire names.

pub mod json_rpc;
pub mod other;

pub use json_rpc::*;
pub use other::*;

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
