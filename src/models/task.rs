//! General task categories
//!
//! The general task is the grouping label of a line item. It drives the
//! breakdown chart and the second sheet of the exported workbook.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grouping label for line items
///
/// `Custom` is a sentinel: it is never offered in the input form and is only
/// assigned when neither an explicit choice nor the catalog supplies a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneralTask {
    #[serde(rename = "Campaigns and PR")]
    CampaignsAndPr,
    Collaterals,
    Digital,
    Events,
    #[serde(rename = "Lead Generation")]
    LeadGeneration,
    #[serde(rename = "Market Research")]
    MarketResearch,
    #[serde(rename = "Office Design")]
    OfficeDesign,
    Photography,
    Training,
    Translations,
    #[serde(rename = "Video Production")]
    VideoProduction,
    #[serde(rename = "VR")]
    Vr,
    Custom,
}

impl GeneralTask {
    /// Tasks a user can pick for a custom service, in form order
    pub fn selectable() -> &'static [Self] {
        &[
            Self::CampaignsAndPr,
            Self::Collaterals,
            Self::Digital,
            Self::Events,
            Self::LeadGeneration,
            Self::MarketResearch,
            Self::OfficeDesign,
            Self::Photography,
            Self::Training,
            Self::Translations,
            Self::VideoProduction,
            Self::Vr,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::CampaignsAndPr => "Campaigns and PR",
            Self::Collaterals => "Collaterals",
            Self::Digital => "Digital",
            Self::Events => "Events",
            Self::LeadGeneration => "Lead Generation",
            Self::MarketResearch => "Market Research",
            Self::OfficeDesign => "Office Design",
            Self::Photography => "Photography",
            Self::Training => "Training",
            Self::Translations => "Translations",
            Self::VideoProduction => "Video Production",
            Self::Vr => "VR",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for GeneralTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for GeneralTask {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::selectable()
            .iter()
            .copied()
            .chain(std::iter::once(Self::Custom))
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown general task: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectable_excludes_sentinel() {
        let tasks = GeneralTask::selectable();
        assert_eq!(tasks.len(), 12);
        assert!(!tasks.contains(&GeneralTask::Custom));
    }

    #[test]
    fn test_parse() {
        assert_eq!("vr".parse::<GeneralTask>().unwrap(), GeneralTask::Vr);
        assert_eq!(
            "Campaigns and PR".parse::<GeneralTask>().unwrap(),
            GeneralTask::CampaignsAndPr
        );
        assert_eq!("custom".parse::<GeneralTask>().unwrap(), GeneralTask::Custom);
        assert!("Gardening".parse::<GeneralTask>().is_err());
    }

    #[test]
    fn test_names_are_non_empty() {
        for task in GeneralTask::selectable() {
            assert!(!task.name().is_empty());
        }
        assert_eq!(GeneralTask::Custom.to_string(), "Custom");
    }
}
