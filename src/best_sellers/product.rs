use std::fmt;

use serde::{Deserialize, Serialize};

/// A ranked entry from a best-sellers listing.
///
/// Field names follow the upstream response. Records are created fresh
/// on every fetch and discarded after rendering; there is no local
/// identity beyond the rank order upstream assigned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Position in the listing. Upstream order is authoritative.
    pub rank: u32,
    /// Product name.
    pub product_title: String,
    /// Display price, currency-formatted by upstream.
    pub product_price: String,
    /// Star rating; upstream sends either a string or a number.
    pub product_star_rating: StarRating,
    /// Number of customer ratings.
    pub product_num_ratings: u64,
    /// URL to the product photo.
    pub product_photo: String,
    /// URL to the product page.
    pub product_url: String,
}

/// Star rating as sent upstream: sometimes `"4.5"`, sometimes `4.5`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StarRating {
    Text(String),
    Number(f64),
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarRating::Text(rating) => f.write_str(rating),
            StarRating::Number(rating) => write!(f, "{rating}"),
        }
    }
}
