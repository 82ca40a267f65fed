use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The mobile platform whose health store backs the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple HealthKit
    Ios,
    /// Google Health Connect
    Android,
}

impl Platform {
    /// The platform this binary was compiled for; anything but Android uses HealthKit
    pub fn current() -> Self {
        if cfg!(target_os = "android") {
            Platform::Android
        } else {
            Platform::Ios
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Name of the native health store
    pub fn store_name(&self) -> &'static str {
        match self {
            Platform::Ios => "HealthKit",
            Platform::Android => "Health Connect",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "healthkit" => Ok(Platform::Ios),
            "android" | "healthconnect" | "health_connect" => Ok(Platform::Android),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}
