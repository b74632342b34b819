// ==========================================
// Salon Color Engine - Domain Layer
// ==========================================
// Value types only. Everything here is created and discarded within
// a single calculation; the engine owns no persistent state.
// ==========================================

pub mod formula;
pub mod pigment;
pub mod results;
pub mod types;

pub use formula::{FormulaCostProduct, FormulaProduct, FormulaZone};
pub use pigment::UnderlyingPigment;
pub use results::{
    CostLine, DepositResult, DeveloperMixResult, ExposureCheck, FormulaCostResult,
    GrayCoverageResult, InventoryDeduction, LiftResult, MixingResult, PatchTestValidation,
    PhPrediction, PorosityPreparation, PostTreatmentRecommendation, PricingBreakdown,
    ProductLine, SafetyCheck, ServicePricing, SubstitutionResult, TimingResult,
};
pub use types::{
    ColorCategory, DeveloperVolume, DominantWavelength, ExposureUrgency, HairDensity,
    HairLength, HairLevel, HairTexture, PhCategory, PorosityLevel, RiskLevel, SafetyLevel,
    TreatmentUrgency,
};
