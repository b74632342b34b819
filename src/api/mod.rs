// ==========================================
// Salon Color Engine - API Layer
// ==========================================
// Facade over the calculation engines for callers that want one
// consultation computed in a single pass.
// ==========================================

pub mod formulation_api;

pub use formulation_api::{ConsultationRequest, FormulationApi, FormulationPlan};
