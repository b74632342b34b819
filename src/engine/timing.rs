// ==========================================
// Salon Color Engine - Porosity/Texture Timing Adjuster
// ==========================================
// Responsibility: processing-time adjustment and check cadence
// Input: base time, porosity, texture, color category
// Output: TimingResult / PorosityPreparation
// ==========================================
// Hard limit: adjusted time is capped at the per-category maximum.
// The caps are deterministic safety limits and are never exceeded.
// ==========================================

use crate::domain::results::{PorosityPreparation, TimingResult};
use crate::domain::types::{ColorCategory, HairTexture, PorosityLevel};
use crate::engine::rounding::round2;

/// Lightener on high-porosity hair overrides every other factor.
const LIGHTENER_HIGH_POROSITY_FACTOR: f64 = 0.65;

// ==========================================
// TimingAdjuster - stateless pure-function engine
// ==========================================
pub struct TimingAdjuster;

impl TimingAdjuster {
    /// Porosity factor: tight cuticle takes longer, open cuticle
    /// absorbs fast.
    pub fn porosity_factor(porosity: PorosityLevel) -> f64 {
        match porosity {
            PorosityLevel::Low => 1.20,
            PorosityLevel::Medium => 1.00,
            PorosityLevel::High => 0.75,
        }
    }

    /// Texture factor: fine hair processes faster, coarse slower.
    pub fn texture_factor(texture: HairTexture) -> f64 {
        match texture {
            HairTexture::Fine => 0.85,
            HairTexture::Medium => 1.00,
            HairTexture::Coarse => 1.15,
        }
    }

    /// Maximum safe processing time per category, in minutes.
    pub fn max_processing_time(category: ColorCategory) -> u32 {
        match category {
            ColorCategory::Permanent => 45,
            ColorCategory::DemiPermanent => 30,
            ColorCategory::SemiPermanent => 30,
            ColorCategory::Lightener => 50,
            ColorCategory::Toner => 20,
            ColorCategory::Gloss => 20,
        }
    }

    /// Check cadence per porosity, in minutes.
    pub fn check_interval_minutes(porosity: PorosityLevel) -> u32 {
        match porosity {
            PorosityLevel::Low => 10,
            PorosityLevel::Medium => 10,
            PorosityLevel::High => 5,
        }
    }

    /// Porosity/texture-adjusted processing time.
    ///
    /// Factor = porosity x texture; semi-permanent dampens the
    /// deviation by half; lightener on high porosity overrides the
    /// combined factor entirely. The result is rounded, then capped
    /// at the category maximum.
    pub fn adjusted_timing(
        base_time_minutes: u32,
        porosity: PorosityLevel,
        texture: HairTexture,
        category: ColorCategory,
    ) -> TimingResult {
        let mut warnings: Vec<String> = Vec::new();
        let mut adjustment_factor = Self::porosity_factor(porosity) * Self::texture_factor(texture);

        if category == ColorCategory::SemiPermanent {
            // Gentler chemistry, less variation needed.
            adjustment_factor = 1.0 + (adjustment_factor - 1.0) * 0.5;
        }

        if category == ColorCategory::Lightener && porosity == PorosityLevel::High {
            adjustment_factor = LIGHTENER_HIGH_POROSITY_FACTOR;
            warnings.push(
                "High porosity + lightener: significant risk of over-processing. Monitor every 5 minutes."
                    .to_string(),
            );
        }

        let uncapped_time = (base_time_minutes as f64 * adjustment_factor).round() as u32;
        let check_interval = Self::check_interval_minutes(porosity);

        if porosity == PorosityLevel::High {
            warnings.push(
                "High porosity hair absorbs color quickly. Check results early and often."
                    .to_string(),
            );
            if texture == HairTexture::Fine {
                warnings.push(
                    "Fine + high porosity: very fast processing. Risk of over-saturation."
                        .to_string(),
                );
            }
        }

        if porosity == PorosityLevel::Low {
            warnings.push(
                "Low porosity hair may need heat or longer processing for even results."
                    .to_string(),
            );
            if texture == HairTexture::Coarse {
                warnings.push(
                    "Coarse + low porosity: most resistant combination. Consider applying heat cap."
                        .to_string(),
                );
            }
        }

        let max_time = Self::max_processing_time(category);
        if uncapped_time > max_time {
            warnings.push(format!(
                "Adjusted time exceeds maximum safe processing time of {max_time} minutes. Capped at maximum."
            ));
        }

        TimingResult {
            base_time_minutes,
            adjusted_time_minutes: uncapped_time.min(max_time),
            adjustment_factor: round2(adjustment_factor),
            check_interval_minutes: check_interval,
            warnings,
        }
    }

    /// Porosity from a float test: drop a strand in water and time it.
    pub fn assess_porosity_from_float_test(float_time_seconds: u32) -> PorosityLevel {
        if float_time_seconds > 120 {
            PorosityLevel::Low // still floating after 2 minutes
        } else if float_time_seconds > 30 {
            PorosityLevel::Medium // sinks slowly
        } else {
            PorosityLevel::High // sinks quickly
        }
    }

    /// Preparation and application guidance per porosity. Fixed
    /// bundles, pure lookup.
    pub fn porosity_preparation(porosity: PorosityLevel) -> PorosityPreparation {
        match porosity {
            PorosityLevel::Low => PorosityPreparation {
                preparation: &[
                    "Use a clarifying shampoo before service to remove buildup",
                    "Apply light heat during processing (processing cap)",
                    "Consider a porosity equalizer spray before color application",
                ],
                application_tips: &[
                    "Apply to most resistant areas first",
                    "Use a slightly warmer mixture temperature",
                    "Ensure full saturation of product",
                ],
            },
            PorosityLevel::Medium => PorosityPreparation {
                preparation: &[
                    "Standard preparation - shampoo if needed",
                    "No special pre-treatment required",
                ],
                application_tips: &[
                    "Standard application technique",
                    "Apply root to ends for virgin applications",
                ],
            },
            PorosityLevel::High => PorosityPreparation {
                preparation: &[
                    "Apply protein filler or porosity equalizer before color",
                    "Avoid clarifying - hair already absorbs readily",
                    "Consider a bond-building pre-treatment",
                ],
                application_tips: &[
                    "Apply to least porous areas first (usually roots)",
                    "Use a lighter hand - less product needed",
                    "Monitor for rapid color development",
                    "Consider reducing developer volume by one step",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_timing_unchanged() {
        let result = TimingAdjuster::adjusted_timing(
            30,
            PorosityLevel::Medium,
            HairTexture::Medium,
            ColorCategory::Permanent,
        );
        assert_eq!(result.adjusted_time_minutes, 30);
        assert_eq!(result.adjustment_factor, 1.0);
        assert_eq!(result.check_interval_minutes, 10);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_low_porosity_coarse_is_slowest() {
        // 1.20 * 1.15 = 1.38
        let result = TimingAdjuster::adjusted_timing(
            30,
            PorosityLevel::Low,
            HairTexture::Coarse,
            ColorCategory::Permanent,
        );
        assert_eq!(result.adjustment_factor, 1.38);
        assert_eq!(result.adjusted_time_minutes, 41);
        assert!(result.warnings.iter().any(|w| w.contains("heat cap")));
    }

    #[test]
    fn test_semi_permanent_dampens_deviation() {
        // 0.75 * 0.85 = 0.6375 -> 1 + (0.6375 - 1) * 0.5 = 0.81875 -> 0.82
        let result = TimingAdjuster::adjusted_timing(
            20,
            PorosityLevel::High,
            HairTexture::Fine,
            ColorCategory::SemiPermanent,
        );
        assert_eq!(result.adjustment_factor, 0.82);
        assert_eq!(result.adjusted_time_minutes, 16);
    }

    #[test]
    fn test_lightener_high_porosity_override() {
        // Override wins even against coarse texture.
        let result = TimingAdjuster::adjusted_timing(
            40,
            PorosityLevel::High,
            HairTexture::Coarse,
            ColorCategory::Lightener,
        );
        assert_eq!(result.adjustment_factor, 0.65);
        assert_eq!(result.adjusted_time_minutes, 26);
        assert_eq!(result.check_interval_minutes, 5);
        assert!(result.warnings[0].contains("over-processing"));
    }

    #[test]
    fn test_cap_at_category_maximum() {
        // 60 * 1.38 = 82.8 -> 83, capped at permanent maximum 45.
        let result = TimingAdjuster::adjusted_timing(
            60,
            PorosityLevel::Low,
            HairTexture::Coarse,
            ColorCategory::Permanent,
        );
        assert_eq!(result.adjusted_time_minutes, 45);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("maximum safe processing time of 45")));
    }

    #[test]
    fn test_toner_cap_is_twenty() {
        let result = TimingAdjuster::adjusted_timing(
            25,
            PorosityLevel::Medium,
            HairTexture::Medium,
            ColorCategory::Toner,
        );
        assert_eq!(result.adjusted_time_minutes, 20);
    }

    #[test]
    fn test_float_test_buckets() {
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(150), PorosityLevel::Low);
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(121), PorosityLevel::Low);
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(120), PorosityLevel::Medium);
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(31), PorosityLevel::Medium);
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(30), PorosityLevel::High);
        assert_eq!(TimingAdjuster::assess_porosity_from_float_test(5), PorosityLevel::High);
    }

    #[test]
    fn test_preparation_bundles() {
        let low = TimingAdjuster::porosity_preparation(PorosityLevel::Low);
        assert_eq!(low.preparation.len(), 3);
        let high = TimingAdjuster::porosity_preparation(PorosityLevel::High);
        assert_eq!(high.application_tips.len(), 4);
    }
}
