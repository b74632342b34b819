// ==========================================
// Salon Color Engine - Domain Types
// ==========================================
// Closed enumerations only. Every branch over these types is an
// exhaustive match, so extending an enum without updating every
// dependent table fails to compile.
// ==========================================

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Hair Level (1 darkest - 10 lightest)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HairLevel {
    L1,
    L2,
    L3,
    L4,
    L5,
    L6,
    L7,
    L8,
    L9,
    L10,
}

impl HairLevel {
    pub const ALL: [HairLevel; 10] = [
        HairLevel::L1,
        HairLevel::L2,
        HairLevel::L3,
        HairLevel::L4,
        HairLevel::L5,
        HairLevel::L6,
        HairLevel::L7,
        HairLevel::L8,
        HairLevel::L9,
        HairLevel::L10,
    ];

    /// Parse a raw level value. The only valid domain is 1..=10.
    pub fn from_u8(value: u8) -> Result<Self, EngineError> {
        match value {
            1 => Ok(HairLevel::L1),
            2 => Ok(HairLevel::L2),
            3 => Ok(HairLevel::L3),
            4 => Ok(HairLevel::L4),
            5 => Ok(HairLevel::L5),
            6 => Ok(HairLevel::L6),
            7 => Ok(HairLevel::L7),
            8 => Ok(HairLevel::L8),
            9 => Ok(HairLevel::L9),
            10 => Ok(HairLevel::L10),
            other => Err(EngineError::InvalidDomainValue {
                field: "hair_level",
                value: other.to_string(),
                expected: "integer in 1..=10",
            }),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            HairLevel::L1 => 1,
            HairLevel::L2 => 2,
            HairLevel::L3 => 3,
            HairLevel::L4 => 4,
            HairLevel::L5 => 5,
            HairLevel::L6 => 6,
            HairLevel::L7 => 7,
            HairLevel::L8 => 8,
            HairLevel::L9 => 9,
            HairLevel::L10 => 10,
        }
    }
}

impl From<HairLevel> for u8 {
    fn from(level: HairLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for HairLevel {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HairLevel::from_u8(value)
    }
}

impl fmt::Display for HairLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ==========================================
// Developer Volume (fixed set, not arbitrary)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DeveloperVolume {
    V5,
    V10,
    V15,
    V20,
    V30,
    V40,
}

impl DeveloperVolume {
    pub const ALL: [DeveloperVolume; 6] = [
        DeveloperVolume::V5,
        DeveloperVolume::V10,
        DeveloperVolume::V15,
        DeveloperVolume::V20,
        DeveloperVolume::V30,
        DeveloperVolume::V40,
    ];

    /// Parse a raw volume value. The only valid domain is {5,10,15,20,30,40}.
    pub fn from_volume(value: u8) -> Result<Self, EngineError> {
        match value {
            5 => Ok(DeveloperVolume::V5),
            10 => Ok(DeveloperVolume::V10),
            15 => Ok(DeveloperVolume::V15),
            20 => Ok(DeveloperVolume::V20),
            30 => Ok(DeveloperVolume::V30),
            40 => Ok(DeveloperVolume::V40),
            other => Err(EngineError::InvalidDomainValue {
                field: "developer_volume",
                value: other.to_string(),
                expected: "one of 5, 10, 15, 20, 30, 40",
            }),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            DeveloperVolume::V5 => 5,
            DeveloperVolume::V10 => 10,
            DeveloperVolume::V15 => 15,
            DeveloperVolume::V20 => 20,
            DeveloperVolume::V30 => 30,
            DeveloperVolume::V40 => 40,
        }
    }
}

impl From<DeveloperVolume> for u8 {
    fn from(volume: DeveloperVolume) -> Self {
        volume.as_u8()
    }
}

impl TryFrom<u8> for DeveloperVolume {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DeveloperVolume::from_volume(value)
    }
}

impl fmt::Display for DeveloperVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ==========================================
// Porosity Level
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PorosityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for PorosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PorosityLevel::Low => write!(f, "low"),
            PorosityLevel::Medium => write!(f, "medium"),
            PorosityLevel::High => write!(f, "high"),
        }
    }
}

// ==========================================
// Hair Texture
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairTexture {
    Fine,
    Medium,
    Coarse,
}

impl fmt::Display for HairTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HairTexture::Fine => write!(f, "fine"),
            HairTexture::Medium => write!(f, "medium"),
            HairTexture::Coarse => write!(f, "coarse"),
        }
    }
}

// ==========================================
// Color Category
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorCategory {
    Permanent,
    DemiPermanent,
    SemiPermanent,
    Lightener,
    Toner,
    Gloss,
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorCategory::Permanent => write!(f, "permanent"),
            ColorCategory::DemiPermanent => write!(f, "demi_permanent"),
            ColorCategory::SemiPermanent => write!(f, "semi_permanent"),
            ColorCategory::Lightener => write!(f, "lightener"),
            ColorCategory::Toner => write!(f, "toner"),
            ColorCategory::Gloss => write!(f, "gloss"),
        }
    }
}

// ==========================================
// Dominant Wavelength (underlying pigment family)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantWavelength {
    Red,
    Orange,
    Yellow,
    PaleYellow,
}

impl fmt::Display for DominantWavelength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DominantWavelength::Red => write!(f, "red"),
            DominantWavelength::Orange => write!(f, "orange"),
            DominantWavelength::Yellow => write!(f, "yellow"),
            DominantWavelength::PaleYellow => write!(f, "pale_yellow"),
        }
    }
}

// ==========================================
// Risk Level (chemical incompatibility)
// ==========================================
// Order: None < Low < Medium < High < Critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::None => write!(f, "none"),
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// pH Category / Safety Level
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhCategory {
    Acidic,
    Neutral,
    Alkaline,
    HighAlkaline,
}

impl fmt::Display for PhCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhCategory::Acidic => write!(f, "acidic"),
            PhCategory::Neutral => write!(f, "neutral"),
            PhCategory::Alkaline => write!(f, "alkaline"),
            PhCategory::HighAlkaline => write!(f, "high_alkaline"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Warning,
    Danger,
}

impl fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyLevel::Safe => write!(f, "safe"),
            SafetyLevel::Caution => write!(f, "caution"),
            SafetyLevel::Warning => write!(f, "warning"),
            SafetyLevel::Danger => write!(f, "danger"),
        }
    }
}

// ==========================================
// Exposure Urgency (stylist chemical exposure)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExposureUrgency {
    Ok,
    Caution,
    Warning,
    ImmediateAction,
}

impl fmt::Display for ExposureUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExposureUrgency::Ok => write!(f, "ok"),
            ExposureUrgency::Caution => write!(f, "caution"),
            ExposureUrgency::Warning => write!(f, "warning"),
            ExposureUrgency::ImmediateAction => write!(f, "immediate_action"),
        }
    }
}

// ==========================================
// Post-Treatment Urgency
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreatmentUrgency {
    Optional,
    Recommended,
    Required,
}

impl fmt::Display for TreatmentUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreatmentUrgency::Optional => write!(f, "optional"),
            TreatmentUrgency::Recommended => write!(f, "recommended"),
            TreatmentUrgency::Required => write!(f, "required"),
        }
    }
}

// ==========================================
// Hair Length / Density (formula amount buckets)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairLength {
    Short,
    Medium,
    Long,
    ExtraLong,
}

impl fmt::Display for HairLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HairLength::Short => write!(f, "short"),
            HairLength::Medium => write!(f, "medium"),
            HairLength::Long => write!(f, "long"),
            HairLength::ExtraLong => write!(f, "extra_long"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairDensity {
    Thin,
    Medium,
    Thick,
}

impl fmt::Display for HairDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HairDensity::Thin => write!(f, "thin"),
            HairDensity::Medium => write!(f, "medium"),
            HairDensity::Thick => write!(f, "thick"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hair_level_domain() {
        assert_eq!(HairLevel::from_u8(1).unwrap(), HairLevel::L1);
        assert_eq!(HairLevel::from_u8(10).unwrap(), HairLevel::L10);
        assert!(HairLevel::from_u8(0).is_err());
        assert!(HairLevel::from_u8(11).is_err());
    }

    #[test]
    fn test_hair_level_total_order() {
        for pair in HairLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_developer_volume_domain() {
        assert_eq!(DeveloperVolume::from_volume(20).unwrap(), DeveloperVolume::V20);
        assert!(DeveloperVolume::from_volume(25).is_err());
        assert!(DeveloperVolume::from_volume(0).is_err());
    }

    #[test]
    fn test_risk_level_order() {
        assert!(RiskLevel::None < RiskLevel::Low);
        assert!(RiskLevel::High < RiskLevel::Critical);
        assert_eq!(RiskLevel::Critical.to_string(), "critical");
    }

    #[test]
    fn test_serde_round_trip() {
        let level: HairLevel = serde_json::from_str("7").unwrap();
        assert_eq!(level, HairLevel::L7);
        assert_eq!(serde_json::to_string(&level).unwrap(), "7");

        let category: ColorCategory = serde_json::from_str("\"demi_permanent\"").unwrap();
        assert_eq!(category, ColorCategory::DemiPermanent);

        let bad: Result<HairLevel, _> = serde_json::from_str("11");
        assert!(bad.is_err());
    }
}
