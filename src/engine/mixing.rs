// ==========================================
// Salon Color Engine - Mixing/Cost Calculator
// ==========================================
// Responsibility: mixing ratios, formula amounts, inventory and
//                 pricing math
// Input: formula products, ratio strings, salon cost figures
// Output: MixingResult / InventoryDeduction / FormulaCostResult /
//         ServicePricing
// ==========================================

use crate::domain::formula::{FormulaCostProduct, FormulaProduct, FormulaZone};
use crate::domain::results::{
    CostLine, FormulaCostResult, InventoryDeduction, MixingResult, PricingBreakdown,
    ProductLine, ServicePricing,
};
use crate::domain::types::{HairDensity, HairLength};
use crate::engine::rounding::{round1, round2, round3};
use tracing::debug;

/// Industry-standard waste allowance.
pub const DEFAULT_WASTE_PERCENTAGE: f64 = 10.0;

/// Overhead share applied on top of product + labor.
const OVERHEAD_RATE: f64 = 0.15;

/// Standard mixing ratios by product key, color:developer.
const STANDARD_RATIOS: [(&str, (f64, f64)); 7] = [
    ("permanent", (1.0, 1.0)),
    ("demi_permanent", (1.0, 1.0)),
    ("lightener", (1.0, 2.0)),
    ("high_lift", (1.0, 2.0)),
    ("gloss", (1.0, 1.0)),
    ("toner", (1.0, 1.5)),
    ("clay_lightener", (1.0, 1.0)),
];

// ==========================================
// MixingCalculator - stateless pure-function engine
// ==========================================
pub struct MixingCalculator;

impl MixingCalculator {
    /// Parse a "color:developer" ratio string. Malformed input
    /// defaults to 1:1 by contract; this never errors.
    pub fn parse_mixing_ratio(ratio: &str) -> (f64, f64) {
        let parts: Vec<&str> = ratio.split(':').collect();
        if parts.len() == 2 {
            if let (Ok(color), Ok(developer)) =
                (parts[0].trim().parse::<f64>(), parts[1].trim().parse::<f64>())
            {
                return (color, developer);
            }
        }
        debug!(ratio, "malformed mixing ratio, defaulting to 1:1");
        (1.0, 1.0)
    }

    /// Standard ratio for a product key, if one is on the chart.
    pub fn standard_ratio(product_key: &str) -> Option<(f64, f64)> {
        STANDARD_RATIOS
            .iter()
            .find(|(key, _)| *key == product_key)
            .map(|(_, ratio)| *ratio)
    }

    /// Recommended total grams of mixed formula for a head of hair.
    pub fn total_amount_grams(
        length: HairLength,
        density: HairDensity,
        is_full_head: bool,
    ) -> u32 {
        let base: f64 = match length {
            HairLength::Short => 60.0,
            HairLength::Medium => 90.0,
            HairLength::Long => 120.0,
            HairLength::ExtraLong => 150.0,
        };

        let multiplier: f64 = match density {
            HairDensity::Thin => 0.75,
            HairDensity::Medium => 1.0,
            HairDensity::Thick => 1.35,
        };

        // Partial head (roots, highlights) uses roughly 60% of a full head.
        let coverage = if is_full_head { 1.0 } else { 0.6 };

        (base * multiplier * coverage).round() as u32
    }

    /// Core mixing breakdown: split the total into color and developer
    /// by ratio, scale each product line to its share of the color
    /// portion, and append a synthetic developer line.
    pub fn calculate_mixing(
        products: &[FormulaProduct],
        mixing_ratio: &str,
        total_desired_grams: f64,
        developer_cost_per_gram: f64,
    ) -> MixingResult {
        let (color_parts, dev_parts) = Self::parse_mixing_ratio(mixing_ratio);
        let total_parts = color_parts + dev_parts;

        let color_grams = (total_desired_grams * color_parts / total_parts).round();
        let developer_grams = total_desired_grams - color_grams;

        let total_product_weight: f64 = products.iter().map(|p| p.amount_grams).sum();
        let scale_factor = if total_product_weight > 0.0 {
            color_grams / total_product_weight
        } else {
            1.0
        };

        let mut product_breakdown: Vec<ProductLine> = products
            .iter()
            .map(|p| {
                let grams = round1(p.amount_grams * scale_factor);
                ProductLine {
                    name: format!("{} {}", p.product_name, p.shade),
                    grams,
                    percentage: (grams / total_desired_grams * 100.0).round() as u32,
                }
            })
            .collect();

        product_breakdown.push(ProductLine {
            name: "Developer".to_string(),
            grams: developer_grams,
            percentage: (developer_grams / total_desired_grams * 100.0).round() as u32,
        });

        let estimated_cost = round2(developer_grams * developer_cost_per_gram);

        MixingResult {
            total_grams: total_desired_grams,
            color_grams,
            developer_grams,
            ratio_display: format!("{color_parts}:{dev_parts}"),
            product_breakdown,
            estimated_cost,
        }
    }

    /// Mixing breakdown for one application zone, using the zone's
    /// own product list and ratio.
    pub fn zone_mixing(
        zone: &FormulaZone,
        total_desired_grams: f64,
        developer_cost_per_gram: f64,
    ) -> MixingResult {
        Self::calculate_mixing(
            &zone.products,
            &zone.mixing_ratio,
            total_desired_grams,
            developer_cost_per_gram,
        )
    }

    /// Inventory deduction for a dispensed formula, including waste.
    pub fn inventory_deduction(formula_grams: f64, waste_percentage: f64) -> InventoryDeduction {
        let waste_grams = (formula_grams * waste_percentage / 100.0).round();
        InventoryDeduction {
            used_grams: formula_grams,
            waste_grams,
            total_deduction_grams: formula_grams + waste_grams,
        }
    }

    /// Product cost of a formula from pack prices. Each line is
    /// rounded independently, then summed.
    pub fn formula_cost(products: &[FormulaCostProduct]) -> FormulaCostResult {
        let cost_breakdown: Vec<CostLine> = products
            .iter()
            .map(|p| {
                let cost_per_gram = p.price_per_unit / p.unit_size_grams;
                CostLine {
                    cost_per_gram: round3(cost_per_gram),
                    total_cost: round2(cost_per_gram * p.grams_used),
                }
            })
            .collect();

        let total_cost: f64 = cost_breakdown.iter().map(|c| c.total_cost).sum();

        FormulaCostResult {
            total_cost: round2(total_cost),
            cost_breakdown,
        }
    }

    /// Suggested service price from product cost, labor and target
    /// margin. Overhead is a fixed 15% of product + labor.
    pub fn service_pricing(
        product_cost: f64,
        labor_minutes: f64,
        labor_rate_per_hour: f64,
        target_margin_percent: f64,
    ) -> ServicePricing {
        let labor_cost = labor_minutes / 60.0 * labor_rate_per_hour;
        let base_cost = product_cost + labor_cost;
        let overhead = base_cost * OVERHEAD_RATE;
        let total_cost = base_cost + overhead;
        let suggested_price = total_cost / (1.0 - target_margin_percent / 100.0);
        let profit = suggested_price - total_cost;

        ServicePricing {
            suggested_price: round2(suggested_price),
            labor_cost: round2(labor_cost),
            profit_margin: (profit / suggested_price * 100.0).round() as i64,
            breakdown: PricingBreakdown {
                product: round2(product_cost),
                labor: round2(labor_cost),
                overhead: round2(overhead),
                profit: round2(profit),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ColorCategory;

    fn product(name: &str, shade: &str, grams: f64) -> FormulaProduct {
        FormulaProduct {
            product_name: name.to_string(),
            shade: shade.to_string(),
            level: 6,
            amount_grams: grams,
            category: ColorCategory::Permanent,
        }
    }

    #[test]
    fn test_parse_ratio() {
        assert_eq!(MixingCalculator::parse_mixing_ratio("1:2"), (1.0, 2.0));
        assert_eq!(MixingCalculator::parse_mixing_ratio("1:1.5"), (1.0, 1.5));
        // Permissive default, never an error.
        assert_eq!(MixingCalculator::parse_mixing_ratio(""), (1.0, 1.0));
        assert_eq!(MixingCalculator::parse_mixing_ratio("abc"), (1.0, 1.0));
        assert_eq!(MixingCalculator::parse_mixing_ratio("1:2:3"), (1.0, 1.0));
        assert_eq!(MixingCalculator::parse_mixing_ratio("x:2"), (1.0, 1.0));
    }

    #[test]
    fn test_standard_ratios() {
        assert_eq!(MixingCalculator::standard_ratio("lightener"), Some((1.0, 2.0)));
        assert_eq!(MixingCalculator::standard_ratio("toner"), Some((1.0, 1.5)));
        assert_eq!(MixingCalculator::standard_ratio("unknown"), None);
    }

    #[test]
    fn test_total_amount_buckets() {
        assert_eq!(
            MixingCalculator::total_amount_grams(HairLength::Medium, HairDensity::Medium, true),
            90
        );
        assert_eq!(
            MixingCalculator::total_amount_grams(HairLength::Long, HairDensity::Thick, true),
            162
        );
        // Partial head at 60% coverage.
        assert_eq!(
            MixingCalculator::total_amount_grams(HairLength::Short, HairDensity::Thin, false),
            27
        );
    }

    #[test]
    fn test_mixing_one_to_two_split() {
        let products = vec![product("Color A", "6N", 30.0), product("Color B", "6G", 30.0)];
        let result = MixingCalculator::calculate_mixing(&products, "1:2", 90.0, 0.05);

        assert_eq!(result.color_grams, 30.0);
        assert_eq!(result.developer_grams, 60.0);
        assert_eq!(result.ratio_display, "1:2");

        // Two color lines scaled to the 30g color portion, plus developer.
        assert_eq!(result.product_breakdown.len(), 3);
        assert_eq!(result.product_breakdown[0].grams, 15.0);
        assert_eq!(result.product_breakdown[0].percentage, 17);
        assert_eq!(result.product_breakdown[2].name, "Developer");
        assert_eq!(result.product_breakdown[2].grams, 60.0);
        assert_eq!(result.product_breakdown[2].percentage, 67);

        // 60g of developer at 0.05/g.
        assert_eq!(result.estimated_cost, 3.0);
    }

    #[test]
    fn test_mixing_empty_products_scale_factor_one() {
        let result = MixingCalculator::calculate_mixing(&[], "1:1", 80.0, 0.04);
        assert_eq!(result.color_grams, 40.0);
        assert_eq!(result.developer_grams, 40.0);
        assert_eq!(result.product_breakdown.len(), 1);
        assert_eq!(result.product_breakdown[0].name, "Developer");
    }

    #[test]
    fn test_ratio_display_round_trip() {
        let products = vec![product("Color A", "7N", 40.0)];
        let result = MixingCalculator::calculate_mixing(&products, "1:1.5", 100.0, 0.05);
        let reparsed = MixingCalculator::parse_mixing_ratio(&result.ratio_display);
        assert_eq!(reparsed, (1.0, 1.5));
    }

    #[test]
    fn test_zone_mixing_uses_zone_ratio() {
        use crate::domain::types::DeveloperVolume;

        let zone = FormulaZone {
            zone_type: "roots".to_string(),
            products: vec![product("Color A", "5N", 30.0)],
            developer_volume: DeveloperVolume::V20,
            mixing_ratio: "1:1.5".to_string(),
            processing_time_minutes: 35,
        };
        let result = MixingCalculator::zone_mixing(&zone, 100.0, 0.05);
        assert_eq!(result.color_grams, 40.0);
        assert_eq!(result.developer_grams, 60.0);
        assert_eq!(result.ratio_display, "1:1.5");
    }

    #[test]
    fn test_inventory_deduction_default_waste() {
        let deduction =
            MixingCalculator::inventory_deduction(90.0, DEFAULT_WASTE_PERCENTAGE);
        assert_eq!(deduction.used_grams, 90.0);
        assert_eq!(deduction.waste_grams, 9.0);
        assert_eq!(deduction.total_deduction_grams, 99.0);
    }

    #[test]
    fn test_formula_cost_lines_rounded_independently() {
        let products = vec![
            FormulaCostProduct {
                grams_used: 30.0,
                price_per_unit: 12.0,
                unit_size_grams: 60.0,
            },
            FormulaCostProduct {
                grams_used: 15.0,
                price_per_unit: 9.0,
                unit_size_grams: 90.0,
            },
        ];
        let cost = MixingCalculator::formula_cost(&products);
        assert_eq!(cost.cost_breakdown[0].cost_per_gram, 0.2);
        assert_eq!(cost.cost_breakdown[0].total_cost, 6.0);
        assert_eq!(cost.cost_breakdown[1].cost_per_gram, 0.1);
        assert_eq!(cost.cost_breakdown[1].total_cost, 1.5);
        assert_eq!(cost.total_cost, 7.5);
    }

    #[test]
    fn test_service_pricing_math() {
        // product 10, labor 60min at 60/h -> 60, base 70, overhead 10.5,
        // total 80.5, price at 30% margin = 115, profit 34.5.
        let pricing = MixingCalculator::service_pricing(10.0, 60.0, 60.0, 30.0);
        assert_eq!(pricing.labor_cost, 60.0);
        assert_eq!(pricing.breakdown.overhead, 10.5);
        assert_eq!(pricing.suggested_price, 115.0);
        assert_eq!(pricing.breakdown.profit, 34.5);
        assert_eq!(pricing.profit_margin, 30);
    }
}
