//! Hard-coded mock data standing in for backend responses.
//!
//! Each accessor builds its list once and hands out a `'static` slice, so
//! screens can filter and borrow without cloning the catalog.

use std::sync::OnceLock;

use crate::safety::{PrivacySetting, SettingValue};
use crate::types::{
    Activity, Author, Category, Conversation, DeliveryStatus, Destination, Feature, Highlight,
    Message, Post, PriceTier, Region, SafetyFeature, Sender, Stat, Story, Trip,
};

#[allow(clippy::too_many_arguments)]
fn destination(
    id: u32,
    name: &str,
    country: &str,
    region: Region,
    category: Category,
    photo: &str,
    rating: f32,
    travelers: u32,
    price: PriceTier,
) -> Destination {
    Destination {
        id,
        name: name.to_string(),
        country: country.to_string(),
        region,
        category,
        image: unsplash(photo),
        rating,
        travelers,
        price,
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{}?w=800", photo)
}

/// The Explore catalog.
pub fn destinations() -> &'static [Destination] {
    static CATALOG: OnceLock<Vec<Destination>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            destination(1, "Bali, Indonesia", "Indonesia", Region::Asia, Category::Beaches,
                "1537996194471-e657df975ab4", 4.9, 2340, PriceTier::MODERATE),
            destination(2, "Santorini, Greece", "Greece", Region::Europe, Category::Islands,
                "1613395877344-13d4a8e0d49e", 4.8, 1890, PriceTier::PREMIUM),
            destination(3, "Tokyo, Japan", "Japan", Region::Asia, Category::Cities,
                "1540959733332-eab4deabeeaf", 4.9, 3120, PriceTier::PREMIUM),
            destination(4, "Machu Picchu, Peru", "Peru", Region::Americas, Category::Adventure,
                "1587595431973-160d0d94add1", 4.9, 1560, PriceTier::MODERATE),
            destination(5, "Swiss Alps", "Switzerland", Region::Europe, Category::Mountains,
                "1531366936337-7c912a4589a7", 4.8, 1240, PriceTier::LUXURY),
            destination(6, "Serengeti, Tanzania", "Tanzania", Region::Africa, Category::Wildlife,
                "1516426122078-c23e76319801", 4.9, 890, PriceTier::PREMIUM),
            destination(7, "Maldives", "Maldives", Region::Asia, Category::Beaches,
                "1514282401047-d79a71a590e8", 4.9, 1780, PriceTier::LUXURY),
            destination(8, "Paris, France", "France", Region::Europe, Category::Culture,
                "1502602898657-3e91760cbb34", 4.7, 4200, PriceTier::PREMIUM),
            destination(9, "Great Barrier Reef", "Australia", Region::Oceania, Category::Adventure,
                "1582967788606-a171c1080cb0", 4.8, 980, PriceTier::PREMIUM),
        ]
    })
}

/// Story bubbles above the community feed.
pub fn stories() -> &'static [Story] {
    static STORIES: OnceLock<Vec<Story>> = OnceLock::new();
    STORIES.get_or_init(|| {
        [
            ("Sarah", true),
            ("Mike", true),
            ("Emma", true),
            ("John", false),
            ("Lisa", true),
            ("Alex", false),
        ]
        .into_iter()
        .zip(1u32..)
        .map(|((user, has_new), id)| Story {
            id,
            user: user.to_string(),
            avatar: user[..1].to_string(),
            has_new,
        })
        .collect()
    })
}

fn author(name: &str, location: &str, verified: bool) -> Author {
    Author {
        name: name.to_string(),
        avatar: name.chars().next().map(String::from).unwrap_or_default(),
        location: location.to_string(),
        verified,
    }
}

/// Community feed posts. Post 2 is seeded as liked and saved.
pub fn posts() -> &'static [Post] {
    static POSTS: OnceLock<Vec<Post>> = OnceLock::new();
    POSTS.get_or_init(|| {
        vec![
            Post {
                id: 1,
                author: author("Sarah Chen", "Bali, Indonesia", true),
                image: unsplash("1537996194471-e657df975ab4"),
                caption: "Found paradise in Ubud \u{1F334}\u{2728} The rice terraces here are \
                          absolutely breathtaking. This is why I travel!"
                    .to_string(),
                likes: 2341,
                comments: 89,
                time_ago: "2 hours ago".to_string(),
                is_liked: false,
                is_saved: false,
            },
            Post {
                id: 2,
                author: author("Mike Johnson", "Santorini, Greece", true),
                image: unsplash("1613395877344-13d4a8e0d49e"),
                caption: "Sunset views from Oia \u{1F305} Every evening is a masterpiece here. \
                          If you haven't visited Santorini, add it to your bucket list!"
                    .to_string(),
                likes: 4521,
                comments: 156,
                time_ago: "5 hours ago".to_string(),
                is_liked: true,
                is_saved: true,
            },
            Post {
                id: 3,
                author: author("Emma Wilson", "Tokyo, Japan", false),
                image: unsplash("1540959733332-eab4deabeeaf"),
                caption: "The perfect blend of tradition and modernity \u{1F5FC} Tokyo never \
                          fails to amaze me with its contrast of ancient temples and futuristic \
                          technology."
                    .to_string(),
                likes: 3892,
                comments: 124,
                time_ago: "8 hours ago".to_string(),
                is_liked: false,
                is_saved: false,
            },
        ]
    })
}

/// Conversation sidebar entries.
pub fn conversations() -> &'static [Conversation] {
    static CONVERSATIONS: OnceLock<Vec<Conversation>> = OnceLock::new();
    CONVERSATIONS.get_or_init(|| {
        vec![
            Conversation {
                id: 1,
                user: "Sarah Chen".to_string(),
                avatar: "S".to_string(),
                last_message: "Can't wait to meet up in Bali! \u{1F334}".to_string(),
                time: "2m".to_string(),
                unread: 3,
                online: true,
                is_group: false,
            },
            Conversation {
                id: 2,
                user: "Mike Johnson".to_string(),
                avatar: "M".to_string(),
                last_message: "The sunset was amazing today".to_string(),
                time: "1h".to_string(),
                unread: 0,
                online: true,
                is_group: false,
            },
            Conversation {
                id: 3,
                user: "Emma Wilson".to_string(),
                avatar: "E".to_string(),
                last_message: "Thanks for the recommendations!".to_string(),
                time: "3h".to_string(),
                unread: 0,
                online: false,
                is_group: false,
            },
            Conversation {
                id: 4,
                user: "Travel Group - Tokyo".to_string(),
                avatar: "\u{1F5FC}".to_string(),
                last_message: "Alex: Who's joining for dinner?".to_string(),
                time: "5h".to_string(),
                unread: 12,
                online: false,
                is_group: true,
            },
        ]
    })
}

/// The open thread. The same thread is shown for every conversation.
pub fn messages() -> &'static [Message] {
    static MESSAGES: OnceLock<Vec<Message>> = OnceLock::new();
    MESSAGES.get_or_init(|| {
        use DeliveryStatus::{Delivered, Read};
        use Sender::{Me, Them};

        [
            (Them, "Hey! How's your trip going?", "10:30 AM", Read),
            (Me, "It's amazing! Just visited the rice terraces in Ubud \u{1F33E}", "10:32 AM", Read),
            (Them, "Oh wow, that's on my bucket list! How long are you staying?", "10:33 AM", Read),
            (Me, "Two more weeks! You should definitely come visit", "10:35 AM", Read),
            (Them, "I might just do that! Are there any hostels you'd recommend?", "10:40 AM", Read),
            (
                Me,
                "Yes! I'll send you a list of my favorites. The one I'm staying at has the best rooftop pool",
                "10:42 AM",
                Delivered,
            ),
            (Them, "Can't wait to meet up in Bali! \u{1F334}", "10:45 AM", Delivered),
        ]
        .into_iter()
        .zip(1u32..)
        .map(|((sender, text, time, status), id)| Message {
            id,
            sender,
            text: text.to_string(),
            time: time.to_string(),
            status,
        })
        .collect()
    })
}

fn feature(icon: &str, title: &str, description: &str) -> Feature {
    Feature {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// "Why Tourails" cards on the home page.
pub fn home_features() -> &'static [Feature] {
    static FEATURES: OnceLock<Vec<Feature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        vec![
            feature("\u{1F30D}", "Explore Worldwide",
                "Browse 195+ countries and thousands of unique destinations curated by travelers like you."),
            feature("\u{1F465}", "Connect & Meet",
                "Find travel buddies, join group trips, and build lasting friendships across borders."),
            feature("\u{1F4F7}", "Share Stories",
                "Post photos, reels, and stories from your adventures. Inspire and get inspired."),
            feature("\u{1F6E1}", "Travel Safely",
                "Verified profiles, emergency contacts, and real-time safety alerts for peace of mind."),
            feature("\u{1F4AC}", "Real-time Chat",
                "Connect instantly with travelers, locals, and trip organizers through our messaging system."),
            feature("\u{1F5FA}", "Plan Together",
                "Collaborative trip planning with shared itineraries, bookmarks, and recommendations."),
        ]
    })
}

/// Selling points beside the signup form.
pub fn signup_highlights() -> &'static [Highlight] {
    static HIGHLIGHTS: OnceLock<Vec<Highlight>> = OnceLock::new();
    HIGHLIGHTS.get_or_init(|| {
        [
            ("\u{2708}\u{FE0F}", "Discover 195+ destinations"),
            ("\u{1F91D}", "Connect with 50K+ travelers"),
            ("\u{1F4F8}", "Share your travel stories"),
            ("\u{1F6E1}\u{FE0F}", "Travel safely with verified profiles"),
        ]
        .into_iter()
        .map(|(icon, text)| Highlight {
            icon: icon.to_string(),
            text: text.to_string(),
        })
        .collect()
    })
}

/// Safety feature cards.
pub fn safety_features() -> &'static [SafetyFeature] {
    static FEATURES: OnceLock<Vec<SafetyFeature>> = OnceLock::new();
    FEATURES.get_or_init(|| {
        [
            ("\u{1F6E1}", "Verified Profiles",
                "All travelers go through a verification process including ID check and social verification.",
                "Enabled"),
            ("\u{1F4CD}", "Location Sharing",
                "Share your real-time location with trusted contacts during your travels.",
                "Disabled"),
            ("\u{1F465}", "Trusted Contacts",
                "Add emergency contacts who can be notified in case of emergency.",
                "3 contacts"),
            ("\u{1F4DE}", "Emergency SOS",
                "Quick access to local emergency services and your trusted contacts.",
                "Ready"),
        ]
        .into_iter()
        .map(|(icon, title, description, status)| SafetyFeature {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status: status.to_string(),
        })
        .collect()
    })
}

/// Initial privacy settings. Returned by value: the Safety screen owns and
/// mutates its copy.
pub fn privacy_settings() -> Vec<PrivacySetting> {
    vec![
        PrivacySetting::new(
            "profile_visibility",
            "Profile Visibility",
            "Who can see your profile",
            SettingValue::Choice("Everyone".to_string()),
        ),
        PrivacySetting::new(
            "location_visible",
            "Show Location",
            "Display your current location on your profile",
            SettingValue::Switch(true),
        ),
        PrivacySetting::new(
            "trip_visible",
            "Show Trip Plans",
            "Allow others to see your upcoming trips",
            SettingValue::Switch(true),
        ),
        PrivacySetting::new(
            "online_status",
            "Online Status",
            "Show when you're online",
            SettingValue::Switch(false),
        ),
    ]
}

/// Dashboard stat tiles.
pub fn dashboard_stats() -> &'static [Stat] {
    static STATS: OnceLock<Vec<Stat>> = OnceLock::new();
    STATS.get_or_init(|| {
        [
            ("\u{1F4CD}", "Countries Visited", "12", "+2"),
            ("\u{1F4C5}", "Trips Planned", "5", "+1"),
            ("\u{1F465}", "Connections", "128", "+15"),
            ("\u{1F4C8}", "Stories Shared", "47", "+8"),
        ]
        .into_iter()
        .map(|(icon, label, value, change)| Stat {
            icon: icon.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            change: change.to_string(),
        })
        .collect()
    })
}

/// Upcoming trips on the dashboard.
pub fn upcoming_trips() -> &'static [Trip] {
    static TRIPS: OnceLock<Vec<Trip>> = OnceLock::new();
    TRIPS.get_or_init(|| {
        [
            ("Bali, Indonesia", "Mar 15 - Mar 28", "\u{1F3DD}\u{FE0F}"),
            ("Tokyo, Japan", "May 1 - May 14", "\u{1F5FC}"),
            ("Paris, France", "Jul 10 - Jul 20", "\u{1F5FC}"),
        ]
        .into_iter()
        .map(|(destination, dates, emoji)| Trip {
            destination: destination.to_string(),
            dates: dates.to_string(),
            emoji: emoji.to_string(),
        })
        .collect()
    })
}

/// Recent activity feed on the dashboard.
pub fn recent_activity() -> &'static [Activity] {
    static ACTIVITY: OnceLock<Vec<Activity>> = OnceLock::new();
    ACTIVITY.get_or_init(|| {
        [
            ("Sarah Chen", "accepted your connection request", "2h ago"),
            ("Mike Johnson", "liked your story from Santorini", "5h ago"),
            ("Emma Wilson", "commented on your Bali itinerary", "1d ago"),
        ]
        .into_iter()
        .map(|(user, action, time)| Activity {
            user: user.to_string(),
            action: action.to_string(),
            time: time.to_string(),
        })
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<u32> = destinations().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), destinations().len());
        assert_eq!(destinations().len(), 9);
    }

    #[test]
    fn every_region_but_none_extra() {
        let regions: HashSet<Region> = destinations().iter().map(|d| d.region).collect();
        assert_eq!(regions.len(), Region::all().len());
    }

    #[test]
    fn only_the_second_post_is_seeded_engaged() {
        let engaged: Vec<u32> = posts().iter().filter(|p| p.is_liked).map(|p| p.id).collect();
        assert_eq!(engaged, vec![2]);
        let saved: Vec<u32> = posts().iter().filter(|p| p.is_saved).map(|p| p.id).collect();
        assert_eq!(saved, vec![2]);
    }

    #[test]
    fn message_ids_follow_thread_order() {
        let ids: Vec<u32> = messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, (1..=7).collect::<Vec<_>>());
        assert_eq!(messages()[5].status, DeliveryStatus::Delivered);
    }

    #[test]
    fn catalog_exports_as_json() {
        let json = serde_json::to_value(&destinations()[0]).unwrap();
        assert_eq!(json["region"], "asia");
        assert_eq!(json["category"], "beaches");
        assert_eq!(json["price"], 2);
    }

    #[test]
    fn stories_take_first_letter_as_avatar() {
        assert_eq!(stories()[0].avatar, "S");
        assert_eq!(stories().len(), 6);
        assert!(!stories()[3].has_new);
    }
}
