use crate::core::EndpointDescriptor;
use crate::utils::error::{ReportError, Result};
use url::form_urlencoded::byte_serialize;

/// Joins `base` and `path` with a single `/` and appends the query in the given order.
///
/// Keys and values are form-urlencoded, so a space becomes `+`.
pub fn build_url<K, V>(base: &str, path: &str, params: &[(K, V)]) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    if base.is_empty() {
        return Err(ReportError::invalid_argument("base", "must not be empty"));
    }
    if path.is_empty() {
        return Err(ReportError::invalid_argument("path", "must not be empty"));
    }
    if path.contains('?') {
        return Err(ReportError::invalid_argument(
            "path",
            format!("must not contain a query string: {}", path),
        ));
    }

    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    byte_serialize(key.as_ref().as_bytes()).collect::<String>(),
                    byte_serialize(value.as_ref().as_bytes()).collect::<String>()
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }

    Ok(url)
}

pub fn endpoint_url(base: &str, endpoint: &EndpointDescriptor) -> Result<String> {
    build_url(base, &endpoint.path, endpoint.query.as_slice())
}
