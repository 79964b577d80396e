//! Department and country dimensions of a line item
//!
//! Both are closed enumerations chosen from a list in the input form. Parsing
//! is case-insensitive against the display name so batch files can be written
//! by hand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requesting department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Department {
    #[default]
    General,
    Sales,
    #[serde(rename = "Customer Service")]
    CustomerService,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    #[serde(rename = "IT")]
    It,
    Operations,
    Legal,
}

impl Department {
    /// All departments in form order
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Sales,
            Self::CustomerService,
            Self::Hr,
            Self::Finance,
            Self::It,
            Self::Operations,
            Self::Legal,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Sales => "Sales",
            Self::CustomerService => "Customer Service",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::It => "IT",
            Self::Operations => "Operations",
            Self::Legal => "Legal",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown department: {}", s))
    }
}

/// Country (or region bucket) the service is delivered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    #[default]
    General,
    Be,
    Nl,
    Uk,
    Ie,
    Fr,
    It,
    Es,
    Pt,
    De,
    Dk,
    Se,
    Fi,
    No,
    Pl,
    Tr,
    Za,
    Me,
    #[serde(rename = "OUT-OF-EMEA")]
    OutOfEmea,
}

impl Country {
    /// All countries in form order
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Be,
            Self::Nl,
            Self::Uk,
            Self::Ie,
            Self::Fr,
            Self::It,
            Self::Es,
            Self::Pt,
            Self::De,
            Self::Dk,
            Self::Se,
            Self::Fi,
            Self::No,
            Self::Pl,
            Self::Tr,
            Self::Za,
            Self::Me,
            Self::OutOfEmea,
        ]
    }

    /// Country code as shown in the form
    pub fn code(&self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::Be => "BE",
            Self::Nl => "NL",
            Self::Uk => "UK",
            Self::Ie => "IE",
            Self::Fr => "FR",
            Self::It => "IT",
            Self::Es => "ES",
            Self::Pt => "PT",
            Self::De => "DE",
            Self::Dk => "DK",
            Self::Se => "SE",
            Self::Fi => "FI",
            Self::No => "NO",
            Self::Pl => "PL",
            Self::Tr => "TR",
            Self::Za => "ZA",
            Self::Me => "ME",
            Self::OutOfEmea => "OUT-OF-EMEA",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown country: {}", s))
    }
}
