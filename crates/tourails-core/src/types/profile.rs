//! Onboarding answer types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the user travels (onboarding step 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Traveler,
    Couple,
    Group,
    Guide,
}

impl AccountType {
    pub fn all() -> &'static [AccountType] {
        &[
            AccountType::Traveler,
            AccountType::Couple,
            AccountType::Group,
            AccountType::Guide,
        ]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            AccountType::Traveler => "traveler",
            AccountType::Couple => "couple",
            AccountType::Group => "group",
            AccountType::Guide => "guide",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AccountType::Traveler => "Solo Traveler",
            AccountType::Couple => "Couple",
            AccountType::Group => "Group Explorer",
            AccountType::Guide => "Local Guide",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AccountType::Traveler => "Looking to explore on my own",
            AccountType::Couple => "Traveling with my partner",
            AccountType::Group => "Love traveling with friends",
            AccountType::Guide => "Share my city with travelers",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AccountType::Traveler => "\u{1F9F3}",
            AccountType::Couple => "\u{1F491}",
            AccountType::Group => "\u{1F465}",
            AccountType::Guide => "\u{1F3AF}",
        }
    }
}

/// Travel interest tag (onboarding step 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interest {
    Adventure,
    Beach,
    Mountains,
    CityLife,
    Culture,
    FoodAndWine,
    Photography,
    History,
    Nature,
    Nightlife,
    Wellness,
    Art,
    Wildlife,
    RoadTrips,
    Backpacking,
    LuxuryTravel,
}

impl Interest {
    pub fn all() -> &'static [Interest] {
        &[
            Interest::Adventure,
            Interest::Beach,
            Interest::Mountains,
            Interest::CityLife,
            Interest::Culture,
            Interest::FoodAndWine,
            Interest::Photography,
            Interest::History,
            Interest::Nature,
            Interest::Nightlife,
            Interest::Wellness,
            Interest::Art,
            Interest::Wildlife,
            Interest::RoadTrips,
            Interest::Backpacking,
            Interest::LuxuryTravel,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::Adventure => "Adventure",
            Interest::Beach => "Beach",
            Interest::Mountains => "Mountains",
            Interest::CityLife => "City Life",
            Interest::Culture => "Culture",
            Interest::FoodAndWine => "Food & Wine",
            Interest::Photography => "Photography",
            Interest::History => "History",
            Interest::Nature => "Nature",
            Interest::Nightlife => "Nightlife",
            Interest::Wellness => "Wellness",
            Interest::Art => "Art",
            Interest::Wildlife => "Wildlife",
            Interest::RoadTrips => "Road Trips",
            Interest::Backpacking => "Backpacking",
            Interest::LuxuryTravel => "Luxury Travel",
        }
    }

    pub fn from_label(label: &str) -> Option<Interest> {
        Interest::all().iter().copied().find(|i| i.label() == label)
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_interests_with_unique_labels() {
        let all = Interest::all();
        assert_eq!(all.len(), 16);
        for interest in all {
            assert_eq!(Interest::from_label(interest.label()), Some(*interest));
        }
    }

    #[test]
    fn account_types_have_distinct_tags() {
        let tags: std::collections::HashSet<_> =
            AccountType::all().iter().map(|t| t.tag()).collect();
        assert_eq!(tags.len(), 4);
    }
}
