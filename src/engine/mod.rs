// ==========================================
// Salon Color Engine - Engine Layer
// ==========================================
// Stateless calculation engines. Every operation is pure and
// synchronous: typed inputs in, typed result values (plus embedded
// warning lists) out. No I/O, no shared state, no allocation beyond
// the call's working set.
// ==========================================

pub mod developer;
pub mod lift;
pub mod mixing;
pub mod ph;
pub mod pigment;
mod rounding;
pub mod safety;
pub mod timing;

pub use developer::{DeveloperCatalog, DeveloperSpec};
pub use lift::LiftCalculator;
pub use mixing::{MixingCalculator, DEFAULT_WASTE_PERCENTAGE};
pub use ph::PhPredictor;
pub use pigment::PigmentModel;
pub use safety::SafetyChecker;
pub use timing::TimingAdjuster;
