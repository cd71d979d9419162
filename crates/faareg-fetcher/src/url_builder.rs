use crate::error::{FetchError, Result};
use crate::selectors::QUERY_PARAM;
use url::Url;

/// Append the identifier to the inquiry endpoint as its query parameter.
///
/// The identifier is passed through as given and percent-encoded. Existing
/// query pairs on `base_url` are kept.
pub fn build_lookup_url(base_url: &str, identifier: &str) -> Result<Url> {
    let mut url =
        Url::parse(base_url).map_err(|e| FetchError::unable_to_query(base_url, e))?;
    url.query_pairs_mut().append_pair(QUERY_PARAM, identifier);
    Ok(url)
}
