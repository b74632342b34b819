// ==========================================
// Salon Color Engine - Lift Calculator
// ==========================================
// Responsibility: lift requirements, developer selection, deposit
//                 and gray-coverage formulation math
// Input: start/target levels, gray percentage
// Output: LiftResult / DepositResult / GrayCoverageResult
// ==========================================
// Warning rules are evaluated in a fixed order and never
// short-circuit, so the output list is reproducible byte for byte.
// ==========================================

use crate::domain::results::{DepositResult, GrayCoverageResult, LiftResult};
use crate::domain::types::{DeveloperVolume, HairLevel};
use crate::engine::pigment::PigmentModel;
use tracing::debug;

// ==========================================
// LiftCalculator - stateless pure-function engine
// ==========================================
pub struct LiftCalculator;

impl LiftCalculator {
    /// Levels of lift needed to go from `start` to `target`.
    /// Going darker needs no lift.
    pub fn levels_of_lift(start: HairLevel, target: HairLevel) -> u8 {
        target.as_u8().saturating_sub(start.as_u8())
    }

    /// Minimum developer volume for a given number of lift levels.
    /// Strictly non-decreasing step function.
    pub fn minimum_developer_volume(levels_of_lift: u8) -> DeveloperVolume {
        match levels_of_lift {
            0 => DeveloperVolume::V10,
            1 | 2 => DeveloperVolume::V20,
            3 => DeveloperVolume::V30,
            _ => DeveloperVolume::V40,
        }
    }

    /// Rule of 11 (standard permanent color): natural level + color
    /// level to select = 11.
    pub fn rule_of_eleven(natural_level: HairLevel) -> u8 {
        11 - natural_level.as_u8()
    }

    /// Rule of 12 (high-lift color, target level 9-10).
    pub fn rule_of_twelve(natural_level: HairLevel) -> u8 {
        12 - natural_level.as_u8()
    }

    /// Shade-selection arithmetic: the level of color to select for a
    /// desired result. `use_high_lift` switches from the rule of 11 to
    /// the rule of 12.
    pub fn contributing_pigment(natural_level: HairLevel, use_high_lift: bool) -> u8 {
        if use_high_lift {
            Self::rule_of_twelve(natural_level)
        } else {
            Self::rule_of_eleven(natural_level)
        }
    }

    /// Full lift calculation: lift, required developer, exposed
    /// pigment at the target level, pre-lightening flag and warnings.
    pub fn calculate_lift(start: HairLevel, target: HairLevel) -> LiftResult {
        let levels_of_lift = Self::levels_of_lift(start, target);
        let required_developer_volume = Self::minimum_developer_volume(levels_of_lift);
        let exposed_pigment = *PigmentModel::underlying_pigment(target);
        let requires_pre_lightening = levels_of_lift > 4;
        let mut warnings: Vec<String> = Vec::new();

        debug!(
            start = start.as_u8(),
            target = target.as_u8(),
            levels_of_lift,
            volume = required_developer_volume.as_u8(),
            "lift calculated"
        );

        // Warning rules, fixed order: pre-lightening, dark-hair
        // caution, 40V strand test, going-darker note.
        if requires_pre_lightening {
            warnings.push(format!(
                "{levels_of_lift} levels of lift required. Pre-lightening is recommended before depositing color."
            ));
        }

        if levels_of_lift > 2 && start <= HairLevel::L4 {
            warnings.push(
                "Lifting dark hair more than 2 levels requires careful monitoring. Underlying red/orange pigments will be exposed."
                    .to_string(),
            );
        }

        if required_developer_volume >= DeveloperVolume::V40 {
            warnings.push(
                "40 volume developer should be used with extreme caution. Perform strand test first."
                    .to_string(),
            );
        }

        if target < start {
            warnings.push(
                "Going darker does not require lift. Use 10 or 20 volume developer for deposit."
                    .to_string(),
            );
        }

        LiftResult {
            start_level: start,
            target_level: target,
            levels_of_lift,
            required_developer_volume,
            exposed_pigment,
            requires_pre_lightening,
            warnings,
        }
    }

    /// Expected result when going darker. Pure deposit, no lift.
    pub fn calculate_deposit(current: HairLevel, color_level: u8) -> DepositResult {
        let mut warnings: Vec<String> = Vec::new();
        let expected_result = current.as_u8().min(color_level);
        let will_be_warmer = current.as_u8() > color_level.saturating_add(2);

        if will_be_warmer {
            warnings.push(
                "Going more than 2 levels darker may require a filler to prevent ashy/muddy results."
                    .to_string(),
            );
        }

        if color_level <= 3 && current >= HairLevel::L7 {
            warnings.push(
                "Dramatic darkening from blonde to dark. Use a warm filler at the target level first."
                    .to_string(),
            );
        }

        DepositResult {
            expected_result,
            will_be_warmer,
            warnings,
        }
    }

    /// Gray coverage requirements. Gray/white hair behaves as level 10
    /// with no pigment; coverage demand scales with the gray bucket.
    pub fn calculate_gray_coverage(
        gray_percentage: f64,
        _target_level: HairLevel,
        _natural_level: HairLevel,
    ) -> GrayCoverageResult {
        let mut warnings: Vec<String> = Vec::new();
        let recommended_base_ratio: u8;
        let developer_volume = DeveloperVolume::V20;
        let mut processing_time_boost: u32 = 0;

        if gray_percentage <= 25.0 {
            recommended_base_ratio = 0;
        } else if gray_percentage <= 50.0 {
            recommended_base_ratio = 25;
            warnings.push("25% natural base shade recommended for even coverage.".to_string());
        } else if gray_percentage <= 75.0 {
            recommended_base_ratio = 50;
            processing_time_boost = 5;
            warnings.push(
                "50% natural base shade recommended. Consider 5 extra minutes processing."
                    .to_string(),
            );
        } else {
            recommended_base_ratio = 75;
            processing_time_boost = 10;
            warnings.push(
                "75%+ gray requires strong base ratio. Add 10 minutes processing time."
                    .to_string(),
            );
        }

        // Resistant gray needs a stronger developer floor.
        if gray_percentage > 50.0 {
            warnings.push(
                "Resistant gray may need 20 volume minimum. Do not use demi-permanent for full coverage."
                    .to_string(),
            );
        }

        GrayCoverageResult {
            needs_special_formulation: gray_percentage > 25.0,
            recommended_base_ratio,
            developer_volume,
            processing_time_boost,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lift_same_level() {
        let result = LiftCalculator::calculate_lift(HairLevel::L5, HairLevel::L5);
        assert_eq!(result.levels_of_lift, 0);
        assert_eq!(result.required_developer_volume, DeveloperVolume::V10);
        assert!(!result.requires_pre_lightening);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_extreme_lift() {
        let result = LiftCalculator::calculate_lift(HairLevel::L2, HairLevel::L9);
        assert_eq!(result.levels_of_lift, 7);
        assert_eq!(result.required_developer_volume, DeveloperVolume::V40);
        assert!(result.requires_pre_lightening);
        assert!(!result.warnings.is_empty());
        // Fixed order: pre-lightening advisory first, then dark-hair
        // caution, then the strand-test caution.
        assert!(result.warnings[0].contains("Pre-lightening"));
        assert!(result.warnings[1].contains("dark hair"));
        assert!(result.warnings[2].contains("strand test"));
    }

    #[test]
    fn test_going_darker_note() {
        let result = LiftCalculator::calculate_lift(HairLevel::L8, HairLevel::L5);
        assert_eq!(result.levels_of_lift, 0);
        assert_eq!(result.required_developer_volume, DeveloperVolume::V10);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Going darker"));
    }

    #[test]
    fn test_minimum_volume_monotone() {
        let mut previous = DeveloperVolume::V5;
        for lift in 0..=8u8 {
            let volume = LiftCalculator::minimum_developer_volume(lift);
            assert!(volume >= previous, "volume must not decrease with lift");
            previous = volume;
        }
        assert_eq!(LiftCalculator::minimum_developer_volume(0), DeveloperVolume::V10);
        assert_eq!(LiftCalculator::minimum_developer_volume(2), DeveloperVolume::V20);
        assert_eq!(LiftCalculator::minimum_developer_volume(3), DeveloperVolume::V30);
        assert_eq!(LiftCalculator::minimum_developer_volume(4), DeveloperVolume::V40);
    }

    #[test]
    fn test_shade_selection_rules() {
        assert_eq!(LiftCalculator::rule_of_eleven(HairLevel::L5), 6);
        assert_eq!(LiftCalculator::rule_of_twelve(HairLevel::L5), 7);
        assert_eq!(LiftCalculator::contributing_pigment(HairLevel::L5, false), 6);
        assert_eq!(LiftCalculator::contributing_pigment(HairLevel::L5, true), 7);
    }

    #[test]
    fn test_deposit_warmth_and_filler() {
        let result = LiftCalculator::calculate_deposit(HairLevel::L8, 4);
        assert_eq!(result.expected_result, 4);
        assert!(result.will_be_warmer);
        assert!(result.warnings[0].contains("filler"));

        let mild = LiftCalculator::calculate_deposit(HairLevel::L6, 5);
        assert_eq!(mild.expected_result, 5);
        assert!(!mild.will_be_warmer);
        assert!(mild.warnings.is_empty());
    }

    #[test]
    fn test_deposit_dramatic_darkening() {
        let result = LiftCalculator::calculate_deposit(HairLevel::L9, 2);
        assert_eq!(result.warnings.len(), 2);
        assert!(result.warnings[1].contains("Dramatic darkening"));
    }

    #[test]
    fn test_gray_coverage_buckets() {
        let low = LiftCalculator::calculate_gray_coverage(20.0, HairLevel::L6, HairLevel::L5);
        assert!(!low.needs_special_formulation);
        assert_eq!(low.recommended_base_ratio, 0);
        assert_eq!(low.processing_time_boost, 0);
        assert!(low.warnings.is_empty());

        let mid = LiftCalculator::calculate_gray_coverage(60.0, HairLevel::L6, HairLevel::L5);
        assert!(mid.needs_special_formulation);
        assert_eq!(mid.recommended_base_ratio, 50);
        assert_eq!(mid.processing_time_boost, 5);
        assert!(mid.warnings.iter().any(|w| w.contains("Resistant gray")));

        let high = LiftCalculator::calculate_gray_coverage(90.0, HairLevel::L6, HairLevel::L5);
        assert_eq!(high.recommended_base_ratio, 75);
        assert_eq!(high.processing_time_boost, 10);
        assert_eq!(high.developer_volume, DeveloperVolume::V20);
    }
}
