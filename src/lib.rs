// ==========================================
// Salon Color Engine - Core Library
// ==========================================
// Deterministic hair-coloring chemistry and safety calculations:
// lift requirements, developer selection, pH prediction, timing
// adjustment, mixing math, and hard safety gates.
// ==========================================
// Hard limit: nothing in this engine is AI-driven or random. Every
// operation is a pure function of its typed inputs; correctness is
// a safety property.
// ==========================================

// Domain layer - value types
pub mod domain;

// Engine layer - calculation rules
pub mod engine;

// API layer - consultation facade
pub mod api;

// Configuration layer - salon business defaults
pub mod config;

// Error types
pub mod error;

// Logging setup
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

// Domain types
pub use domain::types::{
    ColorCategory, DeveloperVolume, DominantWavelength, ExposureUrgency, HairDensity,
    HairLength, HairLevel, HairTexture, PhCategory, PorosityLevel, RiskLevel, SafetyLevel,
    TreatmentUrgency,
};

// Domain entities
pub use domain::{
    DepositResult, DeveloperMixResult, ExposureCheck, FormulaCostProduct, FormulaCostResult,
    FormulaProduct, FormulaZone, GrayCoverageResult, InventoryDeduction, LiftResult,
    MixingResult, PatchTestValidation, PhPrediction, PorosityPreparation,
    PostTreatmentRecommendation, SafetyCheck, ServicePricing, SubstitutionResult, TimingResult,
    UnderlyingPigment,
};

// Engines
pub use engine::{
    DeveloperCatalog, DeveloperSpec, LiftCalculator, MixingCalculator, PhPredictor,
    PigmentModel, SafetyChecker, TimingAdjuster,
};

// API
pub use api::{ConsultationRequest, FormulationApi, FormulationPlan};

// Configuration
pub use config::SalonConfig;

// Errors
pub use error::{EngineError, EngineResult};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Salon Color Engine";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
