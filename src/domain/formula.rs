// ==========================================
// Salon Color Engine - Formula Inputs
// ==========================================
// Caller-owned transient records. The engine reads them, never
// mutates them, and retains nothing after the call returns.
// ==========================================

use crate::domain::types::{ColorCategory, DeveloperVolume};
use serde::{Deserialize, Serialize};

/// One product line inside a formula zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaProduct {
    pub product_name: String,
    pub shade: String,
    pub level: u8,
    pub amount_grams: f64,
    pub category: ColorCategory,
}

/// One application zone (roots, mids, ends, ...) of a formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaZone {
    pub zone_type: String,
    pub products: Vec<FormulaProduct>,
    pub developer_volume: DeveloperVolume,
    pub mixing_ratio: String,
    pub processing_time_minutes: u32,
}

/// Cost input for a product line: retail pack price and size,
/// plus the grams actually dispensed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaCostProduct {
    pub grams_used: f64,
    pub price_per_unit: f64,
    pub unit_size_grams: f64,
}
