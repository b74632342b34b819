// ==========================================
// Salon Color Engine - Developer Catalog
// ==========================================
// Responsibility: developer strength specs + substitution rules
// Input: developer volumes, color category
// Output: specs, substitution verdicts, custom mix strength
// ==========================================
// Hydrogen peroxide percentages are industry-standard constants.
// ==========================================

use crate::domain::results::{DeveloperMixResult, SubstitutionResult};
use crate::domain::types::{ColorCategory, DeveloperVolume};
use crate::engine::rounding::{round1, round2};
use serde::Serialize;

/// Fixed specification for one developer strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeveloperSpec {
    pub volume: DeveloperVolume,
    pub peroxide_percentage: f64,
    pub max_lift: u8,
    pub primary_use: &'static str,
    /// (min, max) processing time in minutes.
    pub processing_time_range: (u32, u32),
}

const DEVELOPER_SPECS: [DeveloperSpec; 6] = [
    DeveloperSpec {
        volume: DeveloperVolume::V5,
        peroxide_percentage: 1.5,
        max_lift: 0,
        primary_use: "Demi-permanent processing, toning, gloss",
        processing_time_range: (5, 20),
    },
    DeveloperSpec {
        volume: DeveloperVolume::V10,
        peroxide_percentage: 3.0,
        max_lift: 0,
        primary_use: "Deposit only, gray blending, toning",
        processing_time_range: (15, 30),
    },
    DeveloperSpec {
        volume: DeveloperVolume::V15,
        peroxide_percentage: 4.5,
        max_lift: 1,
        primary_use: "Slight lift with deposit",
        processing_time_range: (20, 35),
    },
    DeveloperSpec {
        volume: DeveloperVolume::V20,
        peroxide_percentage: 6.0,
        max_lift: 2,
        primary_use: "Standard lift, gray coverage",
        processing_time_range: (25, 45),
    },
    DeveloperSpec {
        volume: DeveloperVolume::V30,
        peroxide_percentage: 9.0,
        max_lift: 3,
        primary_use: "Extra lift, lightening",
        processing_time_range: (30, 45),
    },
    DeveloperSpec {
        volume: DeveloperVolume::V40,
        peroxide_percentage: 12.0,
        max_lift: 4,
        primary_use: "Maximum lift, high-lift blondes only",
        processing_time_range: (35, 50),
    },
];

/// Approximate peroxide percentage carried per volume unit.
const PEROXIDE_PER_VOLUME_UNIT: f64 = 0.3;

// ==========================================
// DeveloperCatalog - stateless pure-function engine
// ==========================================
pub struct DeveloperCatalog;

impl DeveloperCatalog {
    /// Spec for one developer strength.
    pub fn spec(volume: DeveloperVolume) -> &'static DeveloperSpec {
        match volume {
            DeveloperVolume::V5 => &DEVELOPER_SPECS[0],
            DeveloperVolume::V10 => &DEVELOPER_SPECS[1],
            DeveloperVolume::V15 => &DEVELOPER_SPECS[2],
            DeveloperVolume::V20 => &DEVELOPER_SPECS[3],
            DeveloperVolume::V30 => &DEVELOPER_SPECS[4],
            DeveloperVolume::V40 => &DEVELOPER_SPECS[5],
        }
    }

    /// All specs in ascending volume order.
    pub fn all_specs() -> &'static [DeveloperSpec; 6] {
        &DEVELOPER_SPECS
    }

    /// Whether swapping `original` for `substitute` is safe for the
    /// given product category.
    ///
    /// Hard rejections: demi-permanent above 10V, and semi-permanent
    /// (no developer applies at all). Every other substitution is
    /// accepted with directional warnings, evaluated in fixed order.
    pub fn validate_substitution(
        original: DeveloperVolume,
        substitute: DeveloperVolume,
        category: ColorCategory,
    ) -> SubstitutionResult {
        let mut warnings: Vec<String> = Vec::new();

        if category == ColorCategory::DemiPermanent && substitute > DeveloperVolume::V10 {
            return SubstitutionResult {
                is_acceptable: false,
                warnings: vec![
                    "Demi-permanent color must use 5 or 10 volume developer only.".to_string(),
                ],
                adjusted_processing_time: None,
            };
        }

        if category == ColorCategory::SemiPermanent {
            return SubstitutionResult {
                is_acceptable: false,
                warnings: vec!["Semi-permanent color does not require developer.".to_string()],
                adjusted_processing_time: None,
            };
        }

        let original_v = original.as_u8();
        let substitute_v = substitute.as_u8();

        if substitute_v > original_v {
            if substitute_v - original_v > 10 {
                warnings.push(format!(
                    "Jumping from {original_v}V to {substitute_v}V is a significant increase. Extra caution required."
                ));
            }
            warnings.push(
                "Higher developer will increase lift. Monitor processing closely.".to_string(),
            );
        }

        if substitute_v < original_v {
            if original_v - substitute_v > 10 {
                warnings.push(format!(
                    "Dropping from {original_v}V to {substitute_v}V may not achieve desired lift."
                ));
            }
            warnings.push(
                "Lower developer means less lift. Color result will be warmer/darker than intended."
                    .to_string(),
            );
        }

        if substitute == DeveloperVolume::V40 {
            warnings.push(
                "40 volume developer: scalp sensitivity risk. Do not use on compromised or sensitive scalps."
                    .to_string(),
            );
            warnings.push("Strand test is mandatory with 40 volume developer.".to_string());
        }

        if category == ColorCategory::Lightener && substitute < DeveloperVolume::V20 {
            warnings.push(
                "Lightener with less than 20 volume will have minimal effect.".to_string(),
            );
        }

        SubstitutionResult {
            is_acceptable: true,
            warnings,
            adjusted_processing_time: Some(Self::spec(substitute).processing_time_range),
        }
    }

    /// Blend two developer strengths to hit an intermediate volume,
    /// e.g. 20V + 30V at 1:1 approximates 25V.
    pub fn mix_volumes(
        volume1: DeveloperVolume,
        volume2: DeveloperVolume,
        ratio1: f64,
        ratio2: f64,
    ) -> DeveloperMixResult {
        let spec1 = Self::spec(volume1);
        let spec2 = Self::spec(volume2);
        let total_ratio = ratio1 + ratio2;
        let mut warnings: Vec<String> = Vec::new();

        let effective_peroxide =
            (spec1.peroxide_percentage * ratio1 + spec2.peroxide_percentage * ratio2)
                / total_ratio;

        // Reverse-calculate approximate volume from peroxide %.
        let effective_volume = effective_peroxide / PEROXIDE_PER_VOLUME_UNIT;

        if volume1.as_u8().abs_diff(volume2.as_u8()) > 20 {
            warnings
                .push("Mixing developers more than 20 volumes apart is not recommended.".to_string());
        }

        DeveloperMixResult {
            effective_volume: round1(effective_volume),
            effective_peroxide: round2(effective_peroxide),
            warnings,
        }
    }
}
