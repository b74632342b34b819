// ==========================================
// Salon Color Engine - Safety/Compatibility Checker
// ==========================================
// Responsibility: chemical-combination gating, patch-test windows,
//                 stylist exposure limits
// Input: chemical history, proposed service, patch test record
// Output: SafetyCheck / PatchTestValidation / ExposureCheck
// ==========================================
// Hard limit: a high or critical pair match blocks the service.
// Callers must not proceed past is_compatible=false or
// can_proceed=false without an explicit policy override outside
// this engine.
// ==========================================

use crate::domain::results::{ExposureCheck, PatchTestValidation, SafetyCheck};
use crate::domain::types::{ExposureUrgency, RiskLevel};
use chrono::{DateTime, Utc};
use tracing::warn;

/// One known-incompatible chemical pair. Matched symmetrically.
struct IncompatiblePair {
    chemicals: (&'static str, &'static str),
    reason: &'static str,
    risk_level: RiskLevel,
}

/// Known incompatible combinations in hair coloring. These are
/// absolute rules and must never be overridden.
const INCOMPATIBLE_COMBINATIONS: [IncompatiblePair; 5] = [
    IncompatiblePair {
        chemicals: ("metallic_salt_dye", "permanent_color"),
        reason: "Metallic salts react violently with hydrogen peroxide. Can cause hair breakage, melting, and scalp burns.",
        risk_level: RiskLevel::Critical,
    },
    IncompatiblePair {
        chemicals: ("metallic_salt_dye", "lightener"),
        reason: "Metallic salts + bleach reaction can generate extreme heat and destroy hair.",
        risk_level: RiskLevel::Critical,
    },
    IncompatiblePair {
        chemicals: ("henna_compound", "permanent_color"),
        reason: "Compound henna (contains metallic salts) is incompatible with oxidative color. Pure henna may be compatible but requires strand test.",
        risk_level: RiskLevel::High,
    },
    IncompatiblePair {
        chemicals: ("relaxer", "lightener"),
        reason: "Relaxed hair is chemically compromised. Lightening over relaxer can cause severe breakage.",
        risk_level: RiskLevel::High,
    },
    IncompatiblePair {
        chemicals: ("keratin_treatment", "lightener"),
        reason: "Recent keratin treatment may react unpredictably with lightener. Wait minimum 2 weeks.",
        risk_level: RiskLevel::Medium,
    },
];

/// Patch test must be at least this old before service.
const PATCH_TEST_MIN_HOURS: f64 = 48.0;
/// Patch tests expire after six months.
const PATCH_TEST_EXPIRY_DAYS: f64 = 180.0;

// ==========================================
// SafetyChecker - stateless pure-function engine
// ==========================================
pub struct SafetyChecker;

impl SafetyChecker {
    /// Scan the client's chemical history against the proposed
    /// service. Every matched pair contributes its reason and a
    /// contraindication; the worst risk level is kept; a high or
    /// critical match makes the combination incompatible.
    pub fn check_chemical_compatibility(
        existing_chemicals: &[String],
        proposed_service: &str,
    ) -> SafetyCheck {
        let mut warnings: Vec<String> = Vec::new();
        let mut contraindications: Vec<String> = Vec::new();
        let mut required_precautions: Vec<String> = Vec::new();
        let mut worst_risk_level = RiskLevel::None;
        let mut is_compatible = true;

        for combo in &INCOMPATIBLE_COMBINATIONS {
            let (chem1, chem2) = combo.chemicals;
            let has_conflict = (existing_chemicals.iter().any(|c| c == chem1)
                && proposed_service == chem2)
                || (existing_chemicals.iter().any(|c| c == chem2)
                    && proposed_service == chem1);

            if has_conflict {
                warnings.push(combo.reason.to_string());
                contraindications.push(format!(
                    "{chem1} + {chem2}: {} risk",
                    combo.risk_level
                ));

                worst_risk_level = worst_risk_level.max(combo.risk_level);

                if combo.risk_level >= RiskLevel::High {
                    is_compatible = false;
                }
            }
        }

        if !is_compatible {
            warn!(
                service = proposed_service,
                risk = %worst_risk_level,
                "incompatible chemical combination"
            );
        }

        // Standard precautions for all color services.
        required_precautions.push("Perform patch test 48 hours before service".to_string());
        required_precautions
            .push("Check for scalp irritation before applying product".to_string());
        required_precautions.push("Wear gloves throughout the service".to_string());

        if proposed_service == "lightener" {
            required_precautions
                .push("Apply scalp protector before lightener application".to_string());
            required_precautions
                .push("Do not apply lightener to irritated or broken skin".to_string());
        }

        SafetyCheck {
            is_compatible,
            risk_level: worst_risk_level,
            warnings,
            contraindications,
            required_precautions,
        }
    }

    /// Validate that a patch test is on record, old enough, not
    /// expired, and negative. Anything else blocks the service.
    pub fn validate_patch_test(
        patch_test_date: Option<DateTime<Utc>>,
        service_date: DateTime<Utc>,
        patch_test_result: Option<&str>,
    ) -> PatchTestValidation {
        let (patch_date, result) = match (patch_test_date, patch_test_result) {
            (Some(date), Some(result)) => (date, result),
            _ => {
                return PatchTestValidation {
                    is_valid: false,
                    can_proceed: false,
                    message:
                        "No patch test on record. A 48-hour patch test is required before service."
                            .to_string(),
                };
            }
        };

        let hours_since_patch =
            service_date.signed_duration_since(patch_date).num_seconds() as f64 / 3600.0;

        if hours_since_patch < PATCH_TEST_MIN_HOURS {
            return PatchTestValidation {
                is_valid: false,
                can_proceed: false,
                message: format!(
                    "Patch test performed {} hours ago. Must wait full 48 hours.",
                    hours_since_patch.round() as i64
                ),
            };
        }

        let days_since_patch = hours_since_patch / 24.0;
        if days_since_patch > PATCH_TEST_EXPIRY_DAYS {
            return PatchTestValidation {
                is_valid: false,
                can_proceed: false,
                message: "Patch test expired (over 6 months old). New patch test required."
                    .to_string(),
            };
        }

        if result == "negative" {
            return PatchTestValidation {
                is_valid: true,
                can_proceed: true,
                message: "Patch test valid and negative. Safe to proceed.".to_string(),
            };
        }

        if result == "mild_reaction" || result == "moderate_reaction" {
            return PatchTestValidation {
                is_valid: true,
                can_proceed: false,
                message: format!(
                    "Patch test showed {}. Do NOT proceed with this product.",
                    result.replace('_', " ")
                ),
            };
        }

        // Any other non-negative result: generic reaction gate.
        PatchTestValidation {
            is_valid: true,
            can_proceed: false,
            message: "Patch test showed reaction. Service cannot proceed with this product."
                .to_string(),
        }
    }

    /// Stylist chemical-exposure check. Rules raise urgency but the
    /// current rule set never reaches ImmediateAction, so
    /// within_limits stays true; the stricter failure state is kept
    /// representable for the day a rule produces it.
    pub fn check_exposure_limits(
        chemical_name: &str,
        duration_minutes: u32,
        has_ventilation: bool,
        has_gloves: bool,
    ) -> ExposureCheck {
        let mut recommendations: Vec<String> = Vec::new();
        let mut urgency = ExposureUrgency::Ok;

        if duration_minutes > 240 {
            urgency = ExposureUrgency::Warning;
            recommendations.push(
                "Extended chemical exposure (4+ hours). Take a 15-minute break in fresh air."
                    .to_string(),
            );
        } else if duration_minutes > 120 {
            urgency = ExposureUrgency::Caution;
            recommendations.push(
                "Consider a short break for fresh air after 2 hours of chemical work."
                    .to_string(),
            );
        }

        if !has_ventilation {
            if urgency == ExposureUrgency::Ok {
                urgency = ExposureUrgency::Caution;
            }
            recommendations.push(
                "Ensure adequate ventilation. Open windows or use exhaust fans.".to_string(),
            );
        }

        if !has_gloves {
            urgency = ExposureUrgency::Warning;
            recommendations.push(
                "Always wear nitrile gloves when handling hair color chemicals.".to_string(),
            );
        }

        // Lightener/bleach dust carries respiratory risk.
        let lowered = chemical_name.to_lowercase();
        if (lowered.contains("lightener") || lowered.contains("bleach"))
            && duration_minutes > 60
            && !has_ventilation
        {
            urgency = ExposureUrgency::Warning;
            recommendations.push(
                "Lightener dust exposure without ventilation - risk of respiratory irritation."
                    .to_string(),
            );
        }

        ExposureCheck {
            within_limits: urgency != ExposureUrgency::ImmediateAction,
            recommendations,
            urgency,
        }
    }
}
