// ==========================================
// Salon Color Engine - Formulation API
// ==========================================
// Responsibility: compose the calculation engines for one full
//                 consultation
// Input: ConsultationRequest (typed fields from client records or
//        the upstream note-parsing service)
// Output: FormulationPlan (every result + the combined warning list)
// ==========================================
// Pure composition: no state is retained between calls, and the
// presentation layer must surface every warning and must not proceed
// past a blocked safety result.
// ==========================================

use crate::config::SalonConfig;
use crate::domain::formula::FormulaProduct;
use crate::domain::results::{
    GrayCoverageResult, InventoryDeduction, LiftResult, MixingResult, PatchTestValidation,
    PhPrediction, PostTreatmentRecommendation, SafetyCheck, TimingResult,
};
use crate::domain::types::{
    ColorCategory, DeveloperVolume, HairDensity, HairLength, HairLevel, HairTexture,
    PorosityLevel,
};
use crate::engine::{
    DeveloperCatalog, LiftCalculator, MixingCalculator, PhPredictor, SafetyChecker,
    TimingAdjuster,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One consultation's worth of stylist inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub start_level: HairLevel,
    pub target_level: HairLevel,
    pub category: ColorCategory,
    /// Defaults to the minimum volume for the computed lift.
    #[serde(default)]
    pub developer_volume: Option<DeveloperVolume>,
    pub porosity: PorosityLevel,
    pub texture: HairTexture,
    /// Defaults to the top of the developer's processing range.
    #[serde(default)]
    pub base_time_minutes: Option<u32>,
    /// Defaults to the standard ratio chart for the category.
    #[serde(default)]
    pub mixing_ratio: Option<String>,
    pub hair_length: HairLength,
    pub hair_density: HairDensity,
    pub full_head: bool,
    #[serde(default)]
    pub products: Vec<FormulaProduct>,
    #[serde(default)]
    pub existing_chemicals: Vec<String>,
    #[serde(default)]
    pub gray_percentage: Option<f64>,
    #[serde(default)]
    pub service_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub patch_test_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub patch_test_result: Option<String>,
}

/// Everything the stylist needs for one service, in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct FormulationPlan {
    pub lift: LiftResult,
    pub gray_coverage: Option<GrayCoverageResult>,
    pub ph: PhPrediction,
    pub post_treatment: PostTreatmentRecommendation,
    pub timing: TimingResult,
    pub compatibility: SafetyCheck,
    pub patch_test: Option<PatchTestValidation>,
    pub total_grams: u32,
    pub mixing: MixingResult,
    pub inventory: InventoryDeduction,
    /// Union of every engine's warnings, in engine order:
    /// lift, gray coverage, pH, timing, compatibility.
    pub warnings: Vec<String>,
}

// ==========================================
// FormulationApi - engine composition facade
// ==========================================
pub struct FormulationApi {
    config: SalonConfig,
}

impl FormulationApi {
    pub fn new(config: SalonConfig) -> Self {
        Self { config }
    }

    /// Run every calculation for one consultation.
    pub fn formulate(&self, request: &ConsultationRequest) -> FormulationPlan {
        let lift = LiftCalculator::calculate_lift(request.start_level, request.target_level);

        let developer_volume = request
            .developer_volume
            .unwrap_or(lift.required_developer_volume);

        let gray_coverage = request.gray_percentage.map(|pct| {
            LiftCalculator::calculate_gray_coverage(
                pct,
                request.target_level,
                request.start_level,
            )
        });

        let ratio_display = request
            .mixing_ratio
            .clone()
            .unwrap_or_else(|| Self::default_ratio_display(request.category));
        let (ratio_color, ratio_dev) = MixingCalculator::parse_mixing_ratio(&ratio_display);

        let ph = PhPredictor::predict_mixed_ph(
            request.category,
            developer_volume,
            ratio_color,
            ratio_dev,
        );
        let post_treatment = PhPredictor::recommend_post_treatment(ph.estimated_ph);

        let base_time = request.base_time_minutes.unwrap_or_else(|| {
            DeveloperCatalog::spec(developer_volume).processing_time_range.1
        });
        let timing = TimingAdjuster::adjusted_timing(
            base_time,
            request.porosity,
            request.texture,
            request.category,
        );

        let compatibility = SafetyChecker::check_chemical_compatibility(
            &request.existing_chemicals,
            Self::service_keyword(request.category),
        );

        let patch_test = request.service_date.map(|service_date| {
            SafetyChecker::validate_patch_test(
                request.patch_test_date,
                service_date,
                request.patch_test_result.as_deref(),
            )
        });

        let total_grams = MixingCalculator::total_amount_grams(
            request.hair_length,
            request.hair_density,
            request.full_head,
        );
        let mixing = MixingCalculator::calculate_mixing(
            &request.products,
            &ratio_display,
            total_grams as f64,
            self.config.developer_cost_per_gram,
        );
        let inventory =
            MixingCalculator::inventory_deduction(total_grams as f64, self.config.waste_percentage);

        // Combined warning list, fixed engine order.
        let mut warnings: Vec<String> = Vec::new();
        warnings.extend(lift.warnings.iter().cloned());
        if let Some(gray) = &gray_coverage {
            warnings.extend(gray.warnings.iter().cloned());
        }
        warnings.extend(ph.warnings.iter().cloned());
        warnings.extend(timing.warnings.iter().cloned());
        warnings.extend(compatibility.warnings.iter().cloned());

        info!(
            start = request.start_level.as_u8(),
            target = request.target_level.as_u8(),
            category = %request.category,
            compatible = compatibility.is_compatible,
            warnings = warnings.len(),
            "formulation plan computed"
        );

        FormulationPlan {
            lift,
            gray_coverage,
            ph,
            post_treatment,
            timing,
            compatibility,
            patch_test,
            total_grams,
            mixing,
            inventory,
            warnings,
        }
    }

    /// Service keyword used by the incompatibility table.
    fn service_keyword(category: ColorCategory) -> &'static str {
        match category {
            ColorCategory::Permanent => "permanent_color",
            ColorCategory::DemiPermanent => "demi_permanent",
            ColorCategory::SemiPermanent => "semi_permanent",
            ColorCategory::Lightener => "lightener",
            ColorCategory::Toner => "toner",
            ColorCategory::Gloss => "gloss",
        }
    }

    /// Standard ratio chart, rendered back to a ratio string.
    fn default_ratio_display(category: ColorCategory) -> String {
        match MixingCalculator::standard_ratio(&category.to_string()) {
            Some((color, developer)) => format!("{color}:{developer}"),
            None => "1:1".to_string(),
        }
    }
}
