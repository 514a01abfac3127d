//! Track Amazon best-seller listings by category.
//!
//! `BestSellersClient` fetches the current best-seller list for a
//! `Category` from the RapidAPI real-time Amazon data endpoint, and the
//! `render` module turns the results into product cards for a terminal
//! session.
//!
//! The API key is resolved by `Credential::resolve`: the `RAPIDAPI_KEY`
//! environment variable first, then the `[rapidapi]` table of a local
//! `secrets.toml`.

mod best_sellers;
mod category;
mod credentials;
pub mod render;

use header::{HeaderMap, HeaderValue};
use reqwest::header;

pub use best_sellers::{BestSellersClient, Product, StarRating};
pub use category::Category;
pub use credentials::Credential;
pub use url::Url;

/// Builds the request headers expected by the RapidAPI upstream.
///
/// The host header is derived from the endpoint so an injected test
/// endpoint stays consistent with the default one.
fn build_headers(endpoint: &Url, credential: &Credential) -> eyre::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert("x-rapidapi-key", HeaderValue::from_str(credential.key())?);
    let host = endpoint
        .host_str()
        .ok_or_else(|| eyre::eyre!("endpoint URL has no host"))?;
    headers.insert("x-rapidapi-host", HeaderValue::from_str(host)?);
    Ok(headers)
}
