use serde::{Deserialize, Serialize};

/// Which of the two output shapes a request asks the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Simple,
    Complex,
}

impl Variant {
    /// Resolve the variant for a theme key. Keys outside the catalog
    /// (free-form custom themes) are always simple.
    pub fn for_key(key: &str) -> Variant {
        find(key).map(|t| t.variant).unwrap_or(Variant::Simple)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeDescriptor {
    pub name: &'static str,
    pub key: &'static str,
    pub icon: &'static str,
    pub variant: Variant,
    /// Overrides whatever count the caller asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_count: Option<u32>,
}

impl ThemeDescriptor {
    const fn simple(name: &'static str, key: &'static str, icon: &'static str) -> Self {
        Self { name, key, icon, variant: Variant::Simple, fixed_count: None }
    }

    pub fn effective_count(&self, requested: u32) -> u32 {
        self.fixed_count.unwrap_or(requested)
    }
}

pub const COMPLEX_THEME_KEY: &str = "complex_conundrums";
pub const CUSTOM_THEME_KEY: &str = "custom";

pub static THEMES: &[ThemeDescriptor] = &[
    ThemeDescriptor::simple("Workplace Wins", "workplace_wins", "🏆"),
    ThemeDescriptor::simple("Travel Triumphs", "travel_triumphs", "✈️"),
    ThemeDescriptor::simple("Daily Delights", "daily_delights", "☀️"),
    ThemeDescriptor::simple("Social Serendipity", "social_serendipity", "🤝"),
    ThemeDescriptor::simple("Creative Breakthroughs", "creative_breakthroughs", "💡"),
    ThemeDescriptor::simple("Financial Fortune", "financial_fortune", "💰"),
    ThemeDescriptor::simple("Tech Success", "tech_success", "💻"),
    ThemeDescriptor::simple("Foodie Fortune", "foodie_fortune", "🍔"),
    ThemeDescriptor::simple("Pet Pals", "pet_pals", "🐾"),
    ThemeDescriptor::simple("Nature's Luck", "natures_luck", "🌳"),
    ThemeDescriptor::simple("Hobby Happiness", "hobby_happiness", "🎨"),
    ThemeDescriptor {
        name: "Complex Conundrums",
        key: COMPLEX_THEME_KEY,
        icon: "🤔",
        variant: Variant::Complex,
        fixed_count: Some(1),
    },
    ThemeDescriptor::simple("Custom Theme", CUSTOM_THEME_KEY, "✏️"),
];

pub const CARD_COUNTS: &[u32] = &[2, 3, 4, 5];

pub fn themes() -> &'static [ThemeDescriptor] {
    THEMES
}

pub fn card_counts() -> &'static [u32] {
    CARD_COUNTS
}

pub fn find(key: &str) -> Option<&'static ThemeDescriptor> {
    THEMES.iter().find(|t| t.key == key)
}

/// Count the provider is actually asked for. Only themes with a fixed count
/// override the caller; unknown keys pass the requested count through.
pub fn effective_count(key: &str, requested: u32) -> u32 {
    match find(key) {
        Some(t) => t.effective_count(requested),
        None => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = THEMES.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), THEMES.len());
    }

    #[test]
    fn only_complex_theme_is_complex() {
        for t in THEMES {
            let expected = if t.key == COMPLEX_THEME_KEY { Variant::Complex } else { Variant::Simple };
            assert_eq!(t.variant, expected, "{}", t.key);
            assert_eq!(Variant::for_key(t.key), expected);
        }
        assert_eq!(Variant::for_key("not_in_catalog"), Variant::Simple);
    }

    #[test]
    fn complex_theme_forces_single_card() {
        for &n in CARD_COUNTS {
            assert_eq!(effective_count(COMPLEX_THEME_KEY, n), 1);
            assert_eq!(effective_count("pet_pals", n), n);
        }
        assert_eq!(effective_count("whatever", 7), 7);
    }

    #[test]
    fn defaults_are_first_entries() {
        assert_eq!(themes()[0].key, "workplace_wins");
        assert_eq!(card_counts(), &[2, 3, 4, 5]);
    }
}
