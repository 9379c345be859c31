//! Launch record domain types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary mission outcome as recorded in the `class` column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Both classes, ordered by their numeric value.
    pub const ALL: [OutcomeClass; 2] = [OutcomeClass::Failure, OutcomeClass::Success];

    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OutcomeClass::Failure => "Failure",
            OutcomeClass::Success => "Success",
        }
    }

    /// Chart color for this class: failures are drawn red, successes green.
    pub fn color(self) -> &'static str {
        match self {
            OutcomeClass::Failure => "red",
            OutcomeClass::Success => "green",
        }
    }

    /// Parse a `class` cell. Integral floats such as `1.0` are accepted since
    /// spreadsheet exports frequently write them that way.
    pub fn from_cell(raw: f64) -> Option<Self> {
        if raw == 0.0 {
            Some(OutcomeClass::Failure)
        } else if raw == 1.0 {
            Some(OutcomeClass::Success)
        } else {
            None
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One row of the launch table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_version: Option<String>,
    pub booster_category: String,
}

impl LaunchRecord {
    /// Build a record from the four columns the dashboard depends on.
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: OutcomeClass,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: None,
            site: site.into(),
            payload_mass_kg,
            outcome,
            booster_version: None,
            booster_category: booster_category.into(),
        }
    }
}
