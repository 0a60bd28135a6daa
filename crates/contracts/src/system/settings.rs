use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::alert::AlertInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    General,
    Sync,
    Notifications,
    Password,
}

impl SettingsSection {
    pub fn label(&self) -> &'static str {
        match self {
            SettingsSection::General => "General",
            SettingsSection::Sync => "Sync",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Password => "Password",
        }
    }

    pub fn success_alert(&self) -> AlertInfo {
        AlertInfo::success(
            "Settings Saved",
            format!("{} settings have been updated successfully!", self.label()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelToggles {
    pub email: bool,
    pub whatsapp: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub low_stock: ChannelToggles,
    pub expiring_soon: ChannelToggles,
    pub out_of_stock: ChannelToggles,
    pub weekly_report: ChannelToggles,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        let both = ChannelToggles {
            email: true,
            whatsapp: true,
        };
        Self {
            low_stock: both,
            expiring_soon: ChannelToggles {
                email: true,
                whatsapp: false,
            },
            out_of_stock: both,
            weekly_report: ChannelToggles {
                email: true,
                whatsapp: false,
            },
        }
    }
}

/// Row of the notifications table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    LowStock,
    ExpiringSoon,
    OutOfStock,
    WeeklyReport,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::LowStock,
        AlertType::ExpiringSoon,
        AlertType::OutOfStock,
        AlertType::WeeklyReport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertType::LowStock => "Low Stock",
            AlertType::ExpiringSoon => "Expiring Soon",
            AlertType::OutOfStock => "Out Of Stock",
            AlertType::WeeklyReport => "Weekly Report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    WhatsApp,
}

impl NotificationSettings {
    fn row_mut(&mut self, alert: AlertType) -> &mut ChannelToggles {
        match alert {
            AlertType::LowStock => &mut self.low_stock,
            AlertType::ExpiringSoon => &mut self.expiring_soon,
            AlertType::OutOfStock => &mut self.out_of_stock,
            AlertType::WeeklyReport => &mut self.weekly_report,
        }
    }

    pub fn is_enabled(&self, alert: AlertType, channel: Channel) -> bool {
        let row = match alert {
            AlertType::LowStock => self.low_stock,
            AlertType::ExpiringSoon => self.expiring_soon,
            AlertType::OutOfStock => self.out_of_stock,
            AlertType::WeeklyReport => self.weekly_report,
        };
        match channel {
            Channel::Email => row.email,
            Channel::WhatsApp => row.whatsapp,
        }
    }

    pub fn toggle(&mut self, alert: AlertType, channel: Channel) {
        let row = self.row_mut(alert);
        match channel {
            Channel::Email => row.email = !row.email,
            Channel::WhatsApp => row.whatsapp = !row.whatsapp,
        }
    }
}

/// One section of the settings form, submitted on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SettingsUpdate {
    General {
        #[serde(rename = "pharmacyName")]
        pharmacy_name: String,
        #[serde(rename = "stockThreshold")]
        stock_threshold: u32,
    },
    Sync {
        #[serde(rename = "autoSync")]
        auto_sync: bool,
        #[serde(rename = "syncTime")]
        sync_time: String,
    },
    Notifications(NotificationSettings),
    Password {
        #[serde(rename = "currentPassword")]
        current_password: String,
        #[serde(rename = "newPassword")]
        new_password: String,
    },
}

impl SettingsUpdate {
    pub fn section(&self) -> SettingsSection {
        match self {
            SettingsUpdate::General { .. } => SettingsSection::General,
            SettingsUpdate::Sync { .. } => SettingsSection::Sync,
            SettingsUpdate::Notifications(_) => SettingsSection::Notifications,
            SettingsUpdate::Password { .. } => SettingsSection::Password,
        }
    }

    /// Builds the password section, checking the confirmation first.
    pub fn password_change(
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, SettingsError> {
        if new_password != confirm_password {
            return Err(SettingsError::PasswordMismatch);
        }
        Ok(SettingsUpdate::Password {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("new password and confirmation differ")]
    PasswordMismatch,
}

impl SettingsError {
    pub fn to_alert(&self) -> AlertInfo {
        match self {
            SettingsError::PasswordMismatch => AlertInfo::error(
                "Password Mismatch",
                "The new passwords you entered do not match. Please try again.",
            ),
        }
    }
}

pub fn save_failed_alert() -> AlertInfo {
    AlertInfo::error("Save Failed", "Failed to save settings. Please try again.")
}

/// Message returned when any section is saved.
pub const SETTINGS_SAVED: &str = "Settings updated successfully!";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_mismatch_is_rejected() {
        let err = SettingsUpdate::password_change("old", "new-1", "new-2").unwrap_err();
        assert_eq!(err, SettingsError::PasswordMismatch);
        assert_eq!(err.to_alert().title, "Password Mismatch");
    }

    #[test]
    fn test_password_change_accepted_when_confirmed() {
        let update = SettingsUpdate::password_change("old", "new", "new").unwrap();
        assert_eq!(update.section(), SettingsSection::Password);
    }

    #[test]
    fn test_success_alert_names_section() {
        let alert = SettingsSection::Notifications.success_alert();
        assert_eq!(
            alert.message,
            "Notifications settings have been updated successfully!"
        );
    }

    #[test]
    fn test_update_wire_format_is_tagged() {
        let update = SettingsUpdate::General {
            pharmacy_name: "City Pharmacy".into(),
            stock_threshold: 10,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["section"], "general");
        assert_eq!(json["pharmacyName"], "City Pharmacy");

        let back: SettingsUpdate = serde_json::from_value(json).unwrap();
        assert_eq!(back, update);
    }

    #[test]
    fn test_toggle_flips_one_channel() {
        let mut settings = NotificationSettings::default();
        assert!(!settings.is_enabled(AlertType::WeeklyReport, Channel::WhatsApp));
        settings.toggle(AlertType::WeeklyReport, Channel::WhatsApp);
        assert!(settings.is_enabled(AlertType::WeeklyReport, Channel::WhatsApp));
        assert!(settings.is_enabled(AlertType::WeeklyReport, Channel::Email));
        assert_eq!(settings.low_stock, NotificationSettings::default().low_stock);
    }
}
