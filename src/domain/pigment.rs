// ==========================================
// Salon Color Engine - Underlying Pigment
// ==========================================
// The warm pigment exposed as melanin breaks down during lifting.
// Entries live in a compile-time table (engine::pigment); this type
// only carries static strings so the table can be const.
// ==========================================

use crate::domain::types::{DominantWavelength, HairLevel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnderlyingPigment {
    pub level: HairLevel,
    pub pigment_name: &'static str,
    pub hex_color: &'static str,
    /// 0-10 scale; strictly decreases as level increases 1 -> 10.
    pub warmth_intensity: u8,
    pub dominant_wavelength: DominantWavelength,
}
