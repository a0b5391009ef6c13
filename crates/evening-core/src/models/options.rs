//! Closed option sets offered by the planning form.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse length of the outing. Controls how many entries are scheduled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum DurationBucket {
    /// Two to three hours
    #[default]
    #[serde(rename = "2-3")]
    Short,

    /// Four to six hours
    #[serde(rename = "4-6")]
    Long,

    /// The whole day
    #[serde(rename = "full-day")]
    FullDay,
}

impl DurationBucket {
    /// Convert to the form value representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::Short => "2-3",
            DurationBucket::Long => "4-6",
            DurationBucket::FullDay => "full-day",
        }
    }

    /// Maximum number of scheduled entries for this bucket.
    pub fn activity_cap(&self) -> usize {
        match self {
            DurationBucket::Long | DurationBucket::FullDay => 3,
            DurationBucket::Short => 2,
        }
    }
}

impl FromStr for DurationBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "2-3" => Ok(DurationBucket::Short),
            "4-6" => Ok(DurationBucket::Long),
            "full-day" | "fullday" => Ok(DurationBucket::FullDay),
            _ => Err(format!("Invalid duration: {s}")),
        }
    }
}

/// Desired mood of the evening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Atmosphere {
    #[default]
    Intimate,
    Lively,
    Relaxed,
    Adventurous,
}

impl Atmosphere {
    /// Convert to the form value representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Atmosphere::Intimate => "intimate",
            Atmosphere::Lively => "lively",
            Atmosphere::Relaxed => "relaxed",
            Atmosphere::Adventurous => "adventurous",
        }
    }
}

impl FromStr for Atmosphere {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "intimate" => Ok(Atmosphere::Intimate),
            "lively" => Ok(Atmosphere::Lively),
            "relaxed" => Ok(Atmosphere::Relaxed),
            "adventurous" => Ok(Atmosphere::Adventurous),
            _ => Err(format!("Invalid atmosphere: {s}")),
        }
    }
}

/// How the couple gets around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Transportation {
    #[default]
    Drive,
    Transit,
    Walk,
    Rideshare,
}

impl Transportation {
    /// Convert to the form value representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Transportation::Drive => "drive",
            Transportation::Transit => "transit",
            Transportation::Walk => "walk",
            Transportation::Rideshare => "rideshare",
        }
    }
}

impl FromStr for Transportation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drive" => Ok(Transportation::Drive),
            "transit" => Ok(Transportation::Transit),
            "walk" => Ok(Transportation::Walk),
            "rideshare" => Ok(Transportation::Rideshare),
            _ => Err(format!("Invalid transportation: {s}")),
        }
    }
}

/// Dress code printed on every scheduled entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum DressCode {
    #[default]
    Casual,
    SmartCasual,
    Formal,
    Active,
}

impl DressCode {
    /// Convert to the form value representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DressCode::Casual => "casual",
            DressCode::SmartCasual => "smart-casual",
            DressCode::Formal => "formal",
            DressCode::Active => "active",
        }
    }
}

impl FromStr for DressCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casual" => Ok(DressCode::Casual),
            "smart-casual" | "smartcasual" => Ok(DressCode::SmartCasual),
            "formal" => Ok(DressCode::Formal),
            "active" => Ok(DressCode::Active),
            _ => Err(format!("Invalid dress code: {s}")),
        }
    }
}
