//! Destination filtering for the Explore screen.
//!
//! A destination passes when its name or country contains the query
//! (case-insensitive), its region matches the region facet and its category
//! matches the category facet. Either facet may be the wildcard. The output
//! keeps the catalog's order; nothing is sorted or paged.

use crate::error::{TourError, TourResult};
use crate::types::{Category, Destination, Region};

/// Wildcard tag for the region `<select>`
pub const ALL_REGIONS: &str = "all";
/// Wildcard label for the category pills
pub const ALL_CATEGORIES: &str = "All";

/// Region facet: everything, or exactly one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// Parse an option value (`"all"`, `"europe"`, ...)
    pub fn from_tag(tag: &str) -> TourResult<Self> {
        if tag == ALL_REGIONS {
            return Ok(RegionFilter::All);
        }
        Region::from_tag(tag)
            .map(RegionFilter::Only)
            .ok_or_else(|| TourError::UnknownRegion(tag.to_string()))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RegionFilter::All => ALL_REGIONS,
            RegionFilter::Only(region) => region.tag(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionFilter::All => "All Regions",
            RegionFilter::Only(region) => region.label(),
        }
    }

    /// Options for the region `<select>`, wildcard first
    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(Region::all().iter().copied().map(RegionFilter::Only))
            .collect()
    }

    pub fn matches(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => *wanted == region,
        }
    }
}

/// Category facet: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a pill label (`"All"`, `"Beaches"`, ...), ignoring case
    pub fn from_label(label: &str) -> TourResult<Self> {
        if label == ALL_CATEGORIES {
            return Ok(CategoryFilter::All);
        }
        Category::from_label(label)
            .map(CategoryFilter::Only)
            .ok_or_else(|| TourError::UnknownCategory(label.to_string()))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Pill labels, wildcard first
    pub fn labels() -> Vec<String> {
        std::iter::once(ALL_CATEGORIES)
            .chain(Category::all().iter().map(|c| c.label()))
            .map(String::from)
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

/// Current Explore filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DestinationFilter {
    pub query: String,
    pub region: RegionFilter,
    pub category: CategoryFilter,
}

impl DestinationFilter {
    /// Whether a single destination passes all three predicates
    pub fn matches(&self, destination: &Destination) -> bool {
        self.matches_query(destination)
            && self.region.matches(destination.region)
            && self.category.matches(destination.category)
    }

    fn matches_query(&self, destination: &Destination) -> bool {
        let needle = self.query.to_lowercase();
        destination.name.to_lowercase().contains(&needle)
            || destination.country.to_lowercase().contains(&needle)
    }

    /// The order-preserving subsequence of `catalog` that passes
    pub fn apply<'a>(&self, catalog: &'a [Destination]) -> Vec<&'a Destination> {
        let hits: Vec<&Destination> = catalog.iter().filter(|d| self.matches(d)).collect();
        tracing::trace!(
            query = %self.query,
            region = self.region.tag(),
            category = self.category.label(),
            hits = hits.len(),
            "Filtered destinations"
        );
        hits
    }

    /// True when a facet (not the query) is narrowing the list
    pub fn is_narrowed(&self) -> bool {
        self.region != RegionFilter::All || self.category != CategoryFilter::All
    }

    /// Reset both facets to the wildcard, keeping the query
    pub fn clear_facets(&mut self) {
        self.region = RegionFilter::All;
        self.category = CategoryFilter::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn names(hits: &[&Destination]) -> Vec<String> {
        hits.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn wildcards_return_full_list_in_order() {
        let catalog = seed::destinations();
        let hits = DestinationFilter::default().apply(catalog);
        assert_eq!(hits.len(), catalog.len());
        for (hit, original) in hits.iter().zip(catalog.iter()) {
            assert_eq!(hit.id, original.id);
        }
    }

    #[test]
    fn query_matches_name_or_country_ignoring_case() {
        let catalog = seed::destinations();

        let filter = DestinationFilter {
            query: "JAPAN".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(catalog)), vec!["Tokyo, Japan"]);

        // "Australia" is only in the country field
        let filter = DestinationFilter {
            query: "austral".into(),
            ..Default::default()
        };
        assert_eq!(names(&filter.apply(catalog)), vec!["Great Barrier Reef"]);
    }

    #[test]
    fn region_and_category_are_conjunctive() {
        let catalog = seed::destinations();
        let filter = DestinationFilter {
            query: String::new(),
            region: RegionFilter::Only(Region::Asia),
            category: CategoryFilter::Only(Category::Beaches),
        };
        assert_eq!(
            names(&filter.apply(catalog)),
            vec!["Bali, Indonesia", "Maldives"]
        );
    }

    #[test]
    fn no_match_yields_empty() {
        let filter = DestinationFilter {
            query: "antarctica".into(),
            ..Default::default()
        };
        assert!(filter.apply(seed::destinations()).is_empty());
    }

    #[test]
    fn parses_tags_and_labels() {
        assert_eq!(RegionFilter::from_tag("all"), Ok(RegionFilter::All));
        assert_eq!(
            RegionFilter::from_tag("oceania"),
            Ok(RegionFilter::Only(Region::Oceania))
        );
        assert!(matches!(
            RegionFilter::from_tag("mars"),
            Err(TourError::UnknownRegion(_))
        ));

        assert_eq!(CategoryFilter::from_label("All"), Ok(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_label("wildlife"),
            Ok(CategoryFilter::Only(Category::Wildlife))
        );
        assert!(matches!(
            CategoryFilter::from_label("Deserts"),
            Err(TourError::UnknownCategory(_))
        ));
    }

    #[test]
    fn clear_facets_keeps_query() {
        let mut filter = DestinationFilter {
            query: "bali".into(),
            region: RegionFilter::Only(Region::Asia),
            category: CategoryFilter::Only(Category::Beaches),
        };
        assert!(filter.is_narrowed());
        filter.clear_facets();
        assert!(!filter.is_narrowed());
        assert_eq!(filter.query, "bali");
    }

    #[test]
    fn option_lists_start_with_wildcard() {
        let regions = RegionFilter::options();
        assert_eq!(regions.len(), 6);
        assert_eq!(regions[0].label(), "All Regions");

        let categories = CategoryFilter::labels();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0], "All");
        assert_eq!(categories[7], "Islands");
    }
}
