// ==========================================
// Salon Color Engine - Rounding Helpers
// ==========================================
// Fixed decimal rounding shared by the calculation engines. Half
// rounds away from zero, matching the contract the result values
// are specified against.
// ==========================================

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (money, percentages).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to three decimal places (per-gram costs).
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round1(7.05), 7.1);
        assert_eq!(round1(7.04), 7.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round3(0.06666), 0.067);
    }
}
