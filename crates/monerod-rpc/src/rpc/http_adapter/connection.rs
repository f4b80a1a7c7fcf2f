use std::collections::HashMap;

use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use crate::error::ClientError;

/// Validate the daemon base address and return it without a trailing `/`,
/// ready for endpoint paths to be appended.
pub(super) fn parse_connection(address: &str) -> Result<String, ClientError> {
    let address = address.trim();
    let parsed = Url::parse(address).map_err(|e| {
        ClientError::InvalidRequest(format!(
            "invalid daemon address `{address}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(address.trim_end_matches('/').to_owned()),
        other => Err(ClientError::InvalidRequest(format!(
            "unsupported daemon address scheme `{other}`; expected http or https"
        ))),
    }
}

/// Build the header set attached to every request: JSON content type first,
/// then the configured custom headers, which win on name clashes.
pub(super) fn build_headers(custom: &HashMap<String, String>) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::with_capacity(custom.len() + 1);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    for (name, value) in custom {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid header name `{name}`: {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid value for header `{name}`: {e}"))
        })?;
        headers.insert(header_name, header_value);
    }
    Ok(headers)
}

pub(super) fn endpoint_url(address: &str, path: &str) -> Result<Url, ClientError> {
    let raw = format!("{address}{path}");
    Url::parse(&raw)
        .map_err(|e| ClientError::InvalidRequest(format!("invalid endpoint URL `{raw}`: {e}")))
}
