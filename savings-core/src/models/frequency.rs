use std::fmt;

use serde::{Deserialize, Serialize};

/// How often a deposit is made (and interest compounded) within a year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionFrequency {
    #[default]
    Monthly,
    Fortnightly,
    Weekly,
}

impl ContributionFrequency {
    pub fn all() -> &'static [ContributionFrequency] {
        &[Self::Monthly, Self::Fortnightly, Self::Weekly]
    }

    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Monthly => 12,
            Self::Fortnightly => 26,
            Self::Weekly => 52,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Fortnightly => "fortnightly",
            Self::Weekly => "weekly",
        }
    }

    /// Maps a user-facing label to a frequency.
    ///
    /// Matching ignores case and surrounding whitespace. Anything that is not
    /// `weekly` or `fortnightly` falls back to [`ContributionFrequency::Monthly`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "weekly" => Self::Weekly,
            "fortnightly" => Self::Fortnightly,
            _ => Self::Monthly,
        }
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
