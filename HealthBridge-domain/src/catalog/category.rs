use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Field categories, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Activity,
    Vitals,
    Nutrition,
    Respiratory,
    Cycle,
    Symptoms,
    Mental,
    Heart,
    Body,
    Sleep,
    Hearing,
    Medication,
    Walking,
    Other,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 14] = [
        Category::Activity,
        Category::Vitals,
        Category::Nutrition,
        Category::Respiratory,
        Category::Cycle,
        Category::Symptoms,
        Category::Mental,
        Category::Heart,
        Category::Body,
        Category::Sleep,
        Category::Hearing,
        Category::Medication,
        Category::Walking,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Activity => "activity",
            Category::Vitals => "vitals",
            Category::Nutrition => "nutrition",
            Category::Respiratory => "respiratory",
            Category::Cycle => "cycle",
            Category::Symptoms => "symptoms",
            Category::Mental => "mental",
            Category::Heart => "heart",
            Category::Body => "body",
            Category::Sleep => "sleep",
            Category::Hearing => "hearing",
            Category::Medication => "medication",
            Category::Walking => "walking",
            Category::Other => "other",
        }
    }

    /// Section heading shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Activity => "Activity",
            Category::Vitals => "Vitals",
            Category::Nutrition => "Nutrition",
            Category::Respiratory => "Respiratory",
            Category::Cycle => "Cycle Tracking",
            Category::Symptoms => "Symptoms",
            Category::Mental => "Mental Wellbeing",
            Category::Heart => "Heart",
            Category::Body => "Body Measurements",
            Category::Sleep => "Sleep",
            Category::Hearing => "Hearing",
            Category::Medication => "Medications",
            Category::Walking => "Mobility",
            Category::Other => "Other Data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert_eq!(Category::ALL.first(), Some(&Category::Activity));
        assert_eq!(Category::ALL.last(), Some(&Category::Other));
    }

    #[test]
    fn test_parse_round_trips_through_as_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!("Vitals".parse::<Category>().unwrap(), Category::Vitals);
        assert!("gym".parse::<Category>().is_err());
    }
}
