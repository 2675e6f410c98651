//! Privacy settings on the Safety screen.

use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};

/// A setting is either an on/off switch or a named choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Switch(bool),
    Choice(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySetting {
    pub id: String,
    pub label: String,
    pub description: String,
    pub value: SettingValue,
}

impl PrivacySetting {
    pub fn new(id: &str, label: &str, description: &str, value: SettingValue) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            value,
        }
    }
}

/// The Safety screen's editable copy of the settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrivacySettings {
    settings: Vec<PrivacySetting>,
}

impl PrivacySettings {
    pub fn new(settings: Vec<PrivacySetting>) -> Self {
        Self { settings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrivacySetting> {
        self.settings.iter()
    }

    pub fn get(&self, id: &str) -> Option<&PrivacySetting> {
        self.settings.iter().find(|s| s.id == id)
    }

    /// Flip a switch setting. Returns its new value.
    pub fn toggle(&mut self, id: &str) -> TourResult<bool> {
        let setting = self
            .settings
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| TourError::UnknownSetting(id.to_string()))?;

        match &mut setting.value {
            SettingValue::Switch(on) => {
                *on = !*on;
                tracing::debug!(setting = id, on = *on, "Privacy setting toggled");
                Ok(*on)
            }
            SettingValue::Choice(_) => Err(TourError::NotASwitch(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn toggles_switches() {
        let mut settings = PrivacySettings::new(seed::privacy_settings());
        assert_eq!(settings.toggle("online_status"), Ok(true));
        assert_eq!(settings.toggle("online_status"), Ok(false));
        assert_eq!(settings.toggle("location_visible"), Ok(false));
        assert_eq!(
            settings.get("location_visible").map(|s| &s.value),
            Some(&SettingValue::Switch(false))
        );
    }

    #[test]
    fn choice_and_unknown_are_rejected() {
        let mut settings = PrivacySettings::new(seed::privacy_settings());
        assert_eq!(
            settings.toggle("profile_visibility"),
            Err(TourError::NotASwitch("profile_visibility".into()))
        );
        assert_eq!(
            settings.toggle("nope"),
            Err(TourError::UnknownSetting("nope".into()))
        );
    }

    #[test]
    fn untagged_values_serialize_plainly() {
        let json = serde_json::to_string(&SettingValue::Switch(true)).unwrap();
        assert_eq!(json, "true");
        let json = serde_json::to_string(&SettingValue::Choice("Everyone".into())).unwrap();
        assert_eq!(json, "\"Everyone\"");
    }
}
