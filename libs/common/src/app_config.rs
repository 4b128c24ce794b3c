//! Static application metadata and emergency contact numbers
//!
//! The configuration is built once, on first access, and handed out as a
//! shared reference for the rest of the process lifetime.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Emergency services reachable from the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EmergencyService {
    Police,
    Serenazgo,
    Firefighters,
    Medical,
}

impl EmergencyService {
    /// Every service, in display order
    pub const ALL: [EmergencyService; 4] = [
        EmergencyService::Police,
        EmergencyService::Serenazgo,
        EmergencyService::Firefighters,
        EmergencyService::Medical,
    ];

    /// Key used in the emergency number table
    pub fn key(&self) -> &'static str {
        match self {
            EmergencyService::Police => "policia",
            EmergencyService::Serenazgo => "serenazgo",
            EmergencyService::Firefighters => "bomberos",
            EmergencyService::Medical => "samu",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyService::Police => "Policía Nacional",
            EmergencyService::Serenazgo => "Serenazgo",
            EmergencyService::Firefighters => "Bomberos",
            EmergencyService::Medical => "SAMU",
        }
    }

    fn number(&self) -> &'static str {
        match self {
            EmergencyService::Police => "105",
            EmergencyService::Serenazgo => "044-484848",
            EmergencyService::Firefighters => "116",
            EmergencyService::Medical => "106",
        }
    }
}

/// Application configuration consumed by the UI layer
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub app_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub region: &'static str,
    /// Emergency service key to phone number
    pub emergency_numbers: BTreeMap<&'static str, &'static str>,
    /// Captured once, when the configuration is first read
    pub build_timestamp: DateTime<Utc>,
}

impl AppConfig {
    fn build() -> Self {
        let emergency_numbers = EmergencyService::ALL
            .iter()
            .map(|service| (service.key(), service.number()))
            .collect();

        Self {
            app_name: "ProtecTrux",
            version: env!("CARGO_PKG_VERSION"),
            description: "Seguridad ciudadana para Trujillo",
            region: "Trujillo, La Libertad, Perú",
            emergency_numbers,
            build_timestamp: Utc::now(),
        }
    }

    /// Look up the phone number for an emergency service
    pub fn emergency_number(&self, service: EmergencyService) -> Option<&'static str> {
        self.emergency_numbers.get(service.key()).copied()
    }
}

static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::build);

/// Get the process-wide application configuration
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}
