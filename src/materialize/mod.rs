//! Materialization of a confirmed cache hit
//!
//! Resolves a [`ResultLocation`] to bytes - HTTP GET for URLs, a local read
//! for paths - and decodes the SPARQL JSON results encoding into binding
//! rows. Failures here are hard errors, never misses: the hit itself was
//! already confirmed, so an unreadable payload is an operational fault.

mod decode;

pub use decode::{decode_rows, BindingRow, RdfTerm};

use crate::fact::ResultLocation;
use crate::{CacheError, Result};

/// Fetch and decode the result payload at `location`
pub async fn fetch_rows(location: &ResultLocation) -> Result<Vec<BindingRow>> {
    let bytes = match location {
        ResultLocation::Url(url) => {
            tracing::debug!(%url, "fetching materialized result");
            let response = reqwest::Client::new().get(url).send().await?;
            if !response.status().is_success() {
                return Err(CacheError::Materialize(format!(
                    "result fetch failed ({}): {}",
                    response.status(),
                    url
                )));
            }
            response.bytes().await?.to_vec()
        }
        ResultLocation::Path(path) => {
            tracing::debug!(path = %path.display(), "reading materialized result");
            tokio::fs::read(path).await?
        }
    };

    decode_rows(&bytes)
}
