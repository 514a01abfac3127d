use std::error::Error;

use amazon_bestsellers::{BestSellersClient, Category, Credential};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let credential = Credential::resolve()?;
    let client = BestSellersClient::new(credential);
    let products = client.fetch(Category::Electronics).await;
    println!("{:#?}", products);
    Ok(())
}
