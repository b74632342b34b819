// ==========================================
// Formulation API Tests
// ==========================================
// Facade behavior end to end: JSON requests in, complete plans out,
// defaults applied, safety gates honored, plan serializable.
// ==========================================

use chrono::{DateTime, Duration, Utc};
use salon_color_engine::{
    ColorCategory, ConsultationRequest, DeveloperVolume, FormulationApi, HairDensity, HairLength,
    HairLevel, HairTexture, PhCategory, PorosityLevel, SafetyLevel, SalonConfig, TreatmentUrgency,
};

// ==========================================
// Test helpers
// ==========================================

fn api() -> FormulationApi {
    salon_color_engine::logging::init_test();
    FormulationApi::new(SalonConfig::default())
}

fn base_request() -> ConsultationRequest {
    ConsultationRequest {
        start_level: HairLevel::L6,
        target_level: HairLevel::L8,
        category: ColorCategory::Permanent,
        developer_volume: None,
        porosity: PorosityLevel::Low,
        texture: HairTexture::Coarse,
        base_time_minutes: None,
        mixing_ratio: None,
        hair_length: HairLength::Long,
        hair_density: HairDensity::Thick,
        full_head: true,
        products: vec![],
        existing_chemicals: vec![],
        gray_percentage: None,
        service_date: None,
        patch_test_date: None,
        patch_test_result: None,
    }
}

fn service_date() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-14T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

// ==========================================
// Request parsing
// ==========================================

#[test]
fn test_request_parses_from_minimal_json() {
    let raw = r#"{
        "start_level": 6,
        "target_level": 8,
        "category": "permanent",
        "porosity": "low",
        "texture": "coarse",
        "hair_length": "long",
        "hair_density": "thick",
        "full_head": true
    }"#;
    let request: ConsultationRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.start_level, HairLevel::L6);
    assert_eq!(request.category, ColorCategory::Permanent);
    assert!(request.developer_volume.is_none());
    assert!(request.products.is_empty());
}

#[test]
fn test_request_rejects_out_of_domain_values() {
    let raw = r#"{
        "start_level": 11,
        "target_level": 8,
        "category": "permanent",
        "porosity": "low",
        "texture": "coarse",
        "hair_length": "long",
        "hair_density": "thick",
        "full_head": true
    }"#;
    let parsed: Result<ConsultationRequest, _> = serde_json::from_str(raw);
    assert!(parsed.is_err());
}

// ==========================================
// Default resolution
// ==========================================

#[test]
fn test_defaults_derive_from_lift_and_category() {
    let plan = api().formulate(&base_request());

    // Two levels of lift: 20V minimum, permanent standard ratio 1:1,
    // base time from the top of the 20V processing range (45).
    assert_eq!(plan.lift.required_developer_volume, DeveloperVolume::V20);
    assert_eq!(plan.mixing.ratio_display, "1:1");
    assert_eq!(plan.timing.base_time_minutes, 45);

    // Low porosity + coarse texture pushes past the permanent cap.
    assert_eq!(plan.timing.adjustment_factor, 1.38);
    assert_eq!(plan.timing.adjusted_time_minutes, 45);

    // Long + thick full head: 120 * 1.35 = 162g, split 1:1.
    assert_eq!(plan.total_grams, 162);
    assert_eq!(plan.mixing.color_grams, 81.0);
    assert_eq!(plan.mixing.developer_grams, 81.0);

    // Permanent midpoint 10.0 with 20V developer at 1:1 -> 6.9.
    assert_eq!(plan.ph.estimated_ph, 6.9);
    assert_eq!(plan.ph.category, PhCategory::Neutral);
    assert_eq!(plan.ph.safety_level, SafetyLevel::Safe);
    assert_eq!(plan.post_treatment.urgency, TreatmentUrgency::Recommended);

    assert!(plan.gray_coverage.is_none());
    assert!(plan.patch_test.is_none());
    assert!(plan.compatibility.is_compatible);
}

#[test]
fn test_explicit_inputs_override_defaults() {
    let mut request = base_request();
    request.developer_volume = Some(DeveloperVolume::V30);
    request.mixing_ratio = Some("1:2".to_string());
    request.base_time_minutes = Some(30);
    let plan = api().formulate(&request);

    assert_eq!(plan.mixing.ratio_display, "1:2");
    assert_eq!(plan.timing.base_time_minutes, 30);
    assert_eq!(plan.mixing.color_grams, 54.0);
    assert_eq!(plan.mixing.developer_grams, 108.0);
    // 30V developer raises the predicted pH: (10 + 4*2)/3 = 6.0.
    assert_eq!(plan.ph.estimated_ph, 6.0);
    // Permanent + >=30V scalp protection note surfaces in the plan.
    assert!(plan.warnings.iter().any(|w| w.contains("Scalp protection")));
}

// ==========================================
// Optional sections
// ==========================================

#[test]
fn test_gray_coverage_included_when_percentage_given() {
    let mut request = base_request();
    request.gray_percentage = Some(60.0);
    let plan = api().formulate(&request);

    let gray = plan.gray_coverage.as_ref().unwrap();
    assert!(gray.needs_special_formulation);
    assert_eq!(gray.recommended_base_ratio, 50);
    assert_eq!(gray.processing_time_boost, 5);
    assert!(plan.warnings.iter().any(|w| w.contains("Resistant gray")));
}

#[test]
fn test_patch_test_validated_when_service_date_given() {
    let mut request = base_request();
    request.service_date = Some(service_date());
    request.patch_test_date = Some(service_date() - Duration::hours(72));
    request.patch_test_result = Some("negative".to_string());
    let plan = api().formulate(&request);

    let patch = plan.patch_test.as_ref().unwrap();
    assert!(patch.is_valid);
    assert!(patch.can_proceed);
}

#[test]
fn test_missing_patch_test_blocks_when_service_scheduled() {
    let mut request = base_request();
    request.service_date = Some(service_date());
    let plan = api().formulate(&request);

    let patch = plan.patch_test.as_ref().unwrap();
    assert!(!patch.is_valid);
    assert!(!patch.can_proceed);
}

// ==========================================
// Safety gates
// ==========================================

#[test]
fn test_metallic_history_blocks_lightener_service() {
    let mut request = base_request();
    request.category = ColorCategory::Lightener;
    request.existing_chemicals = vec!["metallic_salt_dye".to_string()];
    let plan = api().formulate(&request);

    assert!(!plan.compatibility.is_compatible);
    assert!(plan.warnings.iter().any(|w| w.contains("extreme heat")));
    // Lightener service carries the two extra precautions.
    assert_eq!(plan.compatibility.required_precautions.len(), 5);
}

// ==========================================
// Plan serialization
// ==========================================

#[test]
fn test_plan_serializes_to_json() {
    let plan = api().formulate(&base_request());
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["lift"]["required_developer_volume"], 20);
    assert_eq!(value["ph"]["category"], "neutral");
    assert_eq!(value["compatibility"]["risk_level"], "none");
    assert_eq!(value["total_grams"], 162);
    assert!(value["warnings"].is_array());
}
