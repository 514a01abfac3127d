use std::fmt;

/// A product category offered by the tracker.
///
/// The set is closed: every variant has exactly one display label and
/// one upstream category code, so an unmapped selection cannot be
/// submitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Software,
    Electronics,
    Automotive,
    Beauty,
    Home,
}

impl Category {
    /// Every selectable category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Software,
        Category::Electronics,
        Category::Automotive,
        Category::Beauty,
        Category::Home,
    ];

    /// Human-readable label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Category::Software => "Software",
            Category::Electronics => "Electronics",
            Category::Automotive => "Automotive",
            Category::Beauty => "Beauty",
            Category::Home => "Home",
        }
    }

    /// Identifier submitted in the upstream query string.
    pub fn code(self) -> &'static str {
        match self {
            Category::Software => "software",
            Category::Electronics => "electronics",
            Category::Automotive => "automotive",
            Category::Beauty => "beauty",
            Category::Home => "home",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
