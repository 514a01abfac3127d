use std::io::{self, BufRead, Write};

use eyre::Result;

use amazon_bestsellers::{render, BestSellersClient, Category, Credential};

#[tokio::main]
async fn main() -> Result<()> {
    // The only fatal error in the system: no key, no network attempt.
    let credential = Credential::resolve()?;
    let client = BestSellersClient::new(credential);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render::render_header(&mut stdout)?;

    let mut line = String::new();
    loop {
        render::render_selector(&mut stdout)?;
        write!(
            stdout,
            "Choose a category (1-5, Enter for {}, q to quit): ",
            Category::default().label()
        )?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("q") {
            break;
        }
        let Some(category) = select_category(choice) else {
            writeln!(stdout, "Please choose a number between 1 and 5.")?;
            continue;
        };

        // A failed fetch degrades to a visible warning and an empty
        // listing; it never ends the session.
        let products = match client.fetch(category).await {
            Ok(products) => products,
            Err(error) => {
                eprintln!("⚠️ Error fetching data: {error}");
                Vec::new()
            }
        };
        render::render_results(&mut stdout, category.label(), &products)?;
        writeln!(stdout)?;
    }

    render::render_footer(&mut stdout)?;
    Ok(())
}

/// Maps the typed selection to a category. Empty input selects the
/// default (first) entry; anything outside 1..=5 is rejected.
fn select_category(choice: &str) -> Option<Category> {
    if choice.is_empty() {
        return Some(Category::default());
    }
    choice
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|index| Category::ALL.get(index).copied())
}
