use eyre::Result;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::{Category, Credential, Product};

/// Upstream listing endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://real-time-amazon-data.p.rapidapi.com/best-sellers";

/// Client for the best-sellers listing endpoint.
///
/// Use `BestSellersClient::fetch` to get the current listing for a
/// category.
#[derive(Clone, Debug)]
pub struct BestSellersClient {
    endpoint: Url,
    credential: Credential,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Listing>,
}

#[derive(Deserialize, Default)]
struct Listing {
    #[serde(default)]
    best_sellers: Option<Vec<Product>>,
}

impl BestSellersClient {
    /// Client against the default RapidAPI endpoint.
    pub fn new(credential: Credential) -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        Self {
            endpoint,
            credential,
        }
    }

    /// Client against an alternate endpoint, for tests and proxies.
    pub fn with_endpoint(endpoint: Url, credential: Credential) -> Self {
        Self {
            endpoint,
            credential,
        }
    }

    /// Fetches the current best sellers for the given category.
    ///
    /// Issues exactly one GET: no retry, no timeout beyond the
    /// transport default. A transport failure, non-2xx status, or
    /// undecodable body is an `Err` carrying the detail; a well-formed
    /// response missing the `data.best_sellers` path is an empty
    /// listing, not an error. Order is returned exactly as upstream
    /// ranked it.
    pub async fn fetch(&self, category: Category) -> Result<Vec<Product>> {
        let request_url = Url::parse_with_params(
            self.endpoint.as_str(),
            &[
                ("category", category.code()),
                ("type", "BEST_SELLERS"),
                ("page", "1"),
                ("country", "US"),
            ],
        )?;

        let client = Client::builder()
            .default_headers(crate::build_headers(&self.endpoint, &self.credential)?)
            .build()?;

        let response = client.get(request_url).send().await?.error_for_status()?;
        let envelope: Envelope = response.json().await?;

        Ok(envelope
            .data
            .and_then(|listing| listing.best_sellers)
            .unwrap_or_default())
    }
}
