//! Plain-text rendering of the tracker page: header, category
//! selector, product cards, footer.
//!
//! Everything writes to an `io::Write` sink so the exact output can be
//! asserted in tests.

use std::io::{self, Write};

use crate::{Category, Product};

const SEPARATOR: &str = "----------------------------------------";
const NO_DATA_NOTICE: &str = "⚠️ No data available. Try selecting a different category.";

/// Page title and blurb, printed once per session.
pub fn render_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "📦 Amazon Best Sellers Tracker")?;
    writeln!(
        out,
        "Discover the top-selling products in different categories on Amazon in real-time."
    )?;
    writeln!(out)
}

/// Horizontal category selector with one numbered entry per label.
pub fn render_selector(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🛒 Select a Product Category")?;
    for (index, category) in Category::ALL.iter().enumerate() {
        write!(out, "[{}] {}  ", index + 1, category.label())?;
    }
    writeln!(out)
}

/// Renders the listing heading and one card per product.
///
/// An empty listing renders the single no-data notice instead; a
/// suppressed fetch error and a genuinely empty result look identical
/// here.
pub fn render_results(
    out: &mut impl Write,
    category_label: &str,
    products: &[Product],
) -> io::Result<()> {
    writeln!(out, "📌 Showing Best Sellers in {category_label}")?;
    writeln!(out)?;

    if products.is_empty() {
        return writeln!(out, "{NO_DATA_NOTICE}");
    }

    for product in products {
        writeln!(out, "Photo: {}", product.product_photo)?;
        writeln!(out, "#{} {}", product.rank, product.product_title)?;
        writeln!(out, "Price: {}", product.product_price)?;
        writeln!(
            out,
            "⭐ Rating: {} ({} reviews)",
            product.product_star_rating,
            group_thousands(product.product_num_ratings)
        )?;
        writeln!(out, "🔗 View on Amazon: {}", product.product_url)?;
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// Attribution footer, printed when the session ends.
pub fn render_footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Amazon Best Sellers Tracker © 2025")?;
    writeln!(
        out,
        "Developed by Josh Poresky (https://www.linkedin.com/in/josh-poresky956/)"
    )
}

/// Groups a count into thousands: `12345` becomes `12,345`.
fn group_thousands(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
