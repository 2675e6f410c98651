//! Static copy for the marketing, safety and dashboard screens.

use serde::{Deserialize, Serialize};

/// A feature card on the home page, safety screen or signup aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// A one-line selling point beside the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub text: String,
}

/// A safety feature card with its current status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyFeature {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub status: String,
}

/// A dashboard stat tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub value: String,
    pub change: String,
}

/// An upcoming trip on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub destination: String,
    pub dates: String,
    pub emoji: String,
}

/// A recent-activity row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub user: String,
    pub action: String,
    pub time: String,
}

impl Activity {
    /// First character of the user's name, for the avatar circle
    pub fn initial(&self) -> String {
        self.user.chars().next().map(String::from).unwrap_or_default()
    }
}
