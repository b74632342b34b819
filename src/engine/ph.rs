// ==========================================
// Salon Color Engine - pH Predictor
// ==========================================
// Responsibility: mixed-formula pH estimate + safety banding
// Input: color category, developer volume, mixing ratio
// Output: PhPrediction / PostTreatmentRecommendation
// ==========================================
// Simplified but accurate model for salon use: the mixture lands at
// the ratio-weighted average of the color pH (range midpoint) and
// the developer pH constant.
// ==========================================

use crate::domain::results::{PhPrediction, PostTreatmentRecommendation};
use crate::domain::types::{ColorCategory, DeveloperVolume, PhCategory, SafetyLevel, TreatmentUrgency};
use crate::engine::rounding::round1;
use tracing::debug;

// ==========================================
// PhPredictor - stateless pure-function engine
// ==========================================
pub struct PhPredictor;

impl PhPredictor {
    /// Typical pH range (min, max) per product category.
    pub fn product_ph_range(category: ColorCategory) -> (f64, f64) {
        match category {
            ColorCategory::Permanent => (9.0, 11.0),
            ColorCategory::DemiPermanent => (6.5, 8.5),
            ColorCategory::SemiPermanent => (3.5, 5.5),
            ColorCategory::Lightener => (8.5, 10.5),
            ColorCategory::Toner => (6.0, 8.0),
            ColorCategory::Gloss => (3.0, 5.0),
        }
    }

    /// Developer pH constant per volume. Higher volume, higher pH.
    pub fn developer_ph(volume: DeveloperVolume) -> f64 {
        match volume {
            DeveloperVolume::V5 => 3.0,
            DeveloperVolume::V10 => 3.5,
            DeveloperVolume::V15 => 3.5,
            DeveloperVolume::V20 => 3.8,
            DeveloperVolume::V30 => 4.0,
            DeveloperVolume::V40 => 4.2,
        }
    }

    /// Predicted pH of the mixed formula, banded into category and
    /// safety level. Band warnings come first, combination warnings
    /// after, in fixed order.
    pub fn predict_mixed_ph(
        category: ColorCategory,
        volume: DeveloperVolume,
        mixing_ratio_color: f64,
        mixing_ratio_developer: f64,
    ) -> PhPrediction {
        let mut warnings: Vec<String> = Vec::new();
        let (range_min, range_max) = Self::product_ph_range(category);
        let developer_ph = Self::developer_ph(volume);

        // Midpoint of the color range as the color pH estimate.
        let color_ph = (range_min + range_max) / 2.0;

        let total_parts = mixing_ratio_color + mixing_ratio_developer;
        let estimated_ph = round1(
            (color_ph * mixing_ratio_color + developer_ph * mixing_ratio_developer) / total_parts,
        );

        let (ph_category, safety_level) = if estimated_ph < 4.5 {
            (PhCategory::Acidic, SafetyLevel::Safe)
        } else if estimated_ph < 7.0 {
            (PhCategory::Neutral, SafetyLevel::Safe)
        } else if estimated_ph < 9.5 {
            warnings.push(
                "Alkaline pH - cuticle will be opened. Ensure proper aftercare.".to_string(),
            );
            (PhCategory::Alkaline, SafetyLevel::Caution)
        } else {
            warnings.push(
                "High alkaline pH - significant cuticle swelling. Monitor processing time closely."
                    .to_string(),
            );
            if estimated_ph >= 11.0 {
                warnings.push(
                    "pH above 11 carries risk of chemical damage. Do not exceed maximum processing time."
                        .to_string(),
                );
                (PhCategory::HighAlkaline, SafetyLevel::Danger)
            } else {
                (PhCategory::HighAlkaline, SafetyLevel::Warning)
            }
        };

        if category == ColorCategory::Permanent && volume >= DeveloperVolume::V30 {
            warnings.push(
                "Permanent color with high-volume developer creates highly alkaline mixture. Scalp protection recommended."
                    .to_string(),
            );
        }

        if category == ColorCategory::Lightener && volume >= DeveloperVolume::V40 {
            warnings.push(
                "Lightener with 40 volume: maximum alkalinity. Frequent strand checks required."
                    .to_string(),
            );
        }

        debug!(
            %category,
            volume = volume.as_u8(),
            estimated_ph,
            safety = %safety_level,
            "pH predicted"
        );

        PhPrediction {
            estimated_ph,
            category: ph_category,
            safety_level,
            warnings,
        }
    }

    /// Post-service treatment recommendation. Hair's natural pH is
    /// 4.5-5.5; anything above 7 needs acidifying treatment.
    pub fn recommend_post_treatment(service_ph: f64) -> PostTreatmentRecommendation {
        if service_ph <= 5.5 {
            return PostTreatmentRecommendation {
                needs_treatment: false,
                treatment_type: "None required - pH within natural range",
                urgency: TreatmentUrgency::Optional,
            };
        }

        if service_ph <= 7.5 {
            return PostTreatmentRecommendation {
                needs_treatment: true,
                treatment_type: "Acidifying rinse or conditioner to restore pH balance",
                urgency: TreatmentUrgency::Recommended,
            };
        }

        PostTreatmentRecommendation {
            needs_treatment: true,
            treatment_type:
                "Acid-based bond repair treatment required. Follow with pH-balancing conditioner.",
            urgency: TreatmentUrgency::Required,
        }
    }
}
