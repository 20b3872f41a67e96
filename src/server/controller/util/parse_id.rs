use crate::server::error::Error;

/// Parses a numeric ID taken from a request path.
///
/// # Arguments
/// - `raw` - Path segment as received
/// - `resource` - Resource name used in the error message, e.g. `"test"`
///
/// # Returns
/// - `Ok(i32)` - The parsed ID
/// - `Err(Error::InvalidId)` - `raw` is not exactly an integer, surrounding whitespace included
pub fn parse_id(raw: &str, resource: &'static str) -> Result<i32, Error> {
    raw.parse::<i32>().map_err(|_| Error::InvalidId {
        resource,
        value: raw.to_string(),
    })
}
