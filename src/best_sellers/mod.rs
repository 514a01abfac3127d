mod client;
mod product;

pub use client::BestSellersClient;
pub use product::{Product, StarRating};
