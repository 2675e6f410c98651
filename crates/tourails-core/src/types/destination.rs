//! Destination catalog types for the Explore screen.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic region a destination belongs to.
///
/// The tag form (`"europe"`, `"asia"`, ...) is what the region `<select>`
/// carries as its option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Europe,
    Asia,
    Americas,
    Africa,
    Oceania,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Region::Europe,
            Region::Asia,
            Region::Americas,
            Region::Africa,
            Region::Oceania,
        ]
    }

    /// Lowercase tag used as the option value
    pub fn tag(&self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::Asia => "asia",
            Region::Americas => "americas",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
        }
    }

    /// Human-readable option label
    pub fn label(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::Americas => "Americas",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Region> {
        Region::all().iter().copied().find(|r| r.tag() == tag)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of trip a destination is known for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beaches,
    Mountains,
    Cities,
    Adventure,
    Culture,
    Wildlife,
    Islands,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Beaches,
            Category::Mountains,
            Category::Cities,
            Category::Adventure,
            Category::Culture,
            Category::Wildlife,
            Category::Islands,
        ]
    }

    /// Capitalized label shown on the category pill
    pub fn label(&self) -> &'static str {
        match self {
            Category::Beaches => "Beaches",
            Category::Mountains => "Mountains",
            Category::Cities => "Cities",
            Category::Adventure => "Adventure",
            Category::Culture => "Culture",
            Category::Wildlife => "Wildlife",
            Category::Islands => "Islands",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Category> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Relative cost, one to four dollar signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PriceTier(u8);

impl PriceTier {
    pub const BUDGET: PriceTier = PriceTier(1);
    pub const MODERATE: PriceTier = PriceTier(2);
    pub const PREMIUM: PriceTier = PriceTier(3);
    pub const LUXURY: PriceTier = PriceTier(4);

    /// Clamps into 1..=4
    pub fn new(level: u8) -> Self {
        PriceTier(level.clamp(1, 4))
    }

    pub fn level(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("$")?;
        }
        Ok(())
    }
}

/// A destination card on the Explore screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub region: Region,
    pub category: Category,
    pub image: String,
    pub rating: f32,
    pub travelers: u32,
    pub price: PriceTier,
}

impl Destination {
    /// Traveler count with thousands separators ("2,340")
    pub fn travelers_display(&self) -> String {
        group_thousands(u64::from(self.travelers))
    }
}

/// Format an integer with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_tags_roundtrip_through_lookup() {
        for region in Region::all() {
            assert_eq!(Region::from_tag(region.tag()), Some(*region));
        }
        assert_eq!(Region::from_tag("Europe"), None);
    }

    #[test]
    fn category_lookup_ignores_case() {
        assert_eq!(Category::from_label("beaches"), Some(Category::Beaches));
        assert_eq!(Category::from_label("ISLANDS"), Some(Category::Islands));
        assert_eq!(Category::from_label("All"), None);
    }

    #[test]
    fn price_tier_renders_dollars() {
        assert_eq!(PriceTier::MODERATE.to_string(), "$$");
        assert_eq!(PriceTier::new(9).to_string(), "$$$$");
        assert_eq!(PriceTier::new(0).level(), 1);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(890), "890");
        assert_eq!(group_thousands(4200), "4,200");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
