// ==========================================
// Salon Color Engine - Result Value Objects
// ==========================================
// Immutable outputs, produced fresh per call. No identity, no
// lifecycle beyond the call that creates them. Warnings are ordered:
// each engine evaluates its rules in a fixed, documented sequence so
// output is byte-for-byte reproducible.
// ==========================================

use crate::domain::pigment::UnderlyingPigment;
use crate::domain::types::{
    DeveloperVolume, ExposureUrgency, HairLevel, PhCategory, RiskLevel, SafetyLevel,
    TreatmentUrgency,
};
use serde::Serialize;

// ==========================================
// Lift Calculator outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct LiftResult {
    pub start_level: HairLevel,
    pub target_level: HairLevel,
    pub levels_of_lift: u8,
    pub required_developer_volume: DeveloperVolume,
    pub exposed_pigment: UnderlyingPigment,
    pub requires_pre_lightening: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepositResult {
    pub expected_result: u8,
    pub will_be_warmer: bool,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GrayCoverageResult {
    pub needs_special_formulation: bool,
    /// Percentage of natural base shade to add to the formula.
    pub recommended_base_ratio: u8,
    pub developer_volume: DeveloperVolume,
    /// Extra processing minutes on top of the base time.
    pub processing_time_boost: u32,
    pub warnings: Vec<String>,
}

// ==========================================
// Developer Catalog outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct SubstitutionResult {
    pub is_acceptable: bool,
    pub warnings: Vec<String>,
    /// Processing time range (min, max) of the substitute when accepted.
    pub adjusted_processing_time: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeveloperMixResult {
    pub effective_volume: f64,
    pub effective_peroxide: f64,
    pub warnings: Vec<String>,
}

// ==========================================
// pH Predictor outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct PhPrediction {
    pub estimated_ph: f64,
    pub category: PhCategory,
    pub safety_level: SafetyLevel,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostTreatmentRecommendation {
    pub needs_treatment: bool,
    pub treatment_type: &'static str,
    pub urgency: TreatmentUrgency,
}

// ==========================================
// Timing Adjuster outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct TimingResult {
    pub base_time_minutes: u32,
    pub adjusted_time_minutes: u32,
    pub adjustment_factor: f64,
    pub check_interval_minutes: u32,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PorosityPreparation {
    pub preparation: &'static [&'static str],
    pub application_tips: &'static [&'static str],
}

// ==========================================
// Safety Checker outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct SafetyCheck {
    pub is_compatible: bool,
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub contraindications: Vec<String>,
    pub required_precautions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatchTestValidation {
    pub is_valid: bool,
    pub can_proceed: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExposureCheck {
    pub within_limits: bool,
    pub recommendations: Vec<String>,
    pub urgency: ExposureUrgency,
}

// ==========================================
// Mixing / Cost Calculator outputs
// ==========================================

#[derive(Debug, Clone, Serialize)]
pub struct ProductLine {
    pub name: String,
    pub grams: f64,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MixingResult {
    pub total_grams: f64,
    pub color_grams: f64,
    pub developer_grams: f64,
    pub ratio_display: String,
    pub product_breakdown: Vec<ProductLine>,
    pub estimated_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InventoryDeduction {
    pub used_grams: f64,
    pub waste_grams: f64,
    pub total_deduction_grams: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CostLine {
    pub cost_per_gram: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormulaCostResult {
    pub total_cost: f64,
    pub cost_breakdown: Vec<CostLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PricingBreakdown {
    pub product: f64,
    pub labor: f64,
    pub overhead: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicePricing {
    pub suggested_price: f64,
    pub labor_cost: f64,
    /// Realized margin as a rounded percentage of the suggested price.
    pub profit_margin: i64,
    pub breakdown: PricingBreakdown,
}
