// ==========================================
// Salon Color Engine - Pigment Model
// ==========================================
// Responsibility: exposed underlying pigment by hair level
// Input: hair levels
// Output: pigment entries + neutralizing tone suggestions
// ==========================================
// The pigment map is industry-standard and 100% deterministic.
// It is a compile-time table, never rebuilt per call.
// ==========================================

use crate::domain::pigment::UnderlyingPigment;
use crate::domain::types::{DominantWavelength, HairLevel};

/// Underlying pigment exposed at each level as melanin breaks down.
///
/// Level 1-3: red pigments dominate. Level 4-6: red-orange to orange.
/// Level 7-8: yellow. Level 9-10: pale yellow.
const UNDERLYING_PIGMENTS: [UnderlyingPigment; 10] = [
    UnderlyingPigment {
        level: HairLevel::L1,
        pigment_name: "Deep Red",
        hex_color: "#2D0A0A",
        warmth_intensity: 10,
        dominant_wavelength: DominantWavelength::Red,
    },
    UnderlyingPigment {
        level: HairLevel::L2,
        pigment_name: "Red",
        hex_color: "#5C1A1A",
        warmth_intensity: 9,
        dominant_wavelength: DominantWavelength::Red,
    },
    UnderlyingPigment {
        level: HairLevel::L3,
        pigment_name: "Red-Orange",
        hex_color: "#8B2500",
        warmth_intensity: 8,
        dominant_wavelength: DominantWavelength::Red,
    },
    UnderlyingPigment {
        level: HairLevel::L4,
        pigment_name: "Orange-Red",
        hex_color: "#B33A00",
        warmth_intensity: 7,
        dominant_wavelength: DominantWavelength::Orange,
    },
    UnderlyingPigment {
        level: HairLevel::L5,
        pigment_name: "Orange",
        hex_color: "#CC5500",
        warmth_intensity: 6,
        dominant_wavelength: DominantWavelength::Orange,
    },
    UnderlyingPigment {
        level: HairLevel::L6,
        pigment_name: "Orange-Yellow",
        hex_color: "#E07020",
        warmth_intensity: 5,
        dominant_wavelength: DominantWavelength::Orange,
    },
    UnderlyingPigment {
        level: HairLevel::L7,
        pigment_name: "Yellow-Orange",
        hex_color: "#F0A030",
        warmth_intensity: 4,
        dominant_wavelength: DominantWavelength::Yellow,
    },
    UnderlyingPigment {
        level: HairLevel::L8,
        pigment_name: "Yellow",
        hex_color: "#F5C040",
        warmth_intensity: 3,
        dominant_wavelength: DominantWavelength::Yellow,
    },
    UnderlyingPigment {
        level: HairLevel::L9,
        pigment_name: "Light Yellow",
        hex_color: "#F8D860",
        warmth_intensity: 2,
        dominant_wavelength: DominantWavelength::PaleYellow,
    },
    UnderlyingPigment {
        level: HairLevel::L10,
        pigment_name: "Pale Yellow",
        hex_color: "#FBE8A0",
        warmth_intensity: 1,
        dominant_wavelength: DominantWavelength::PaleYellow,
    },
];

// ==========================================
// PigmentModel - stateless pure-function engine
// ==========================================
pub struct PigmentModel;

impl PigmentModel {
    /// Underlying pigment exposed at the given hair level.
    pub fn underlying_pigment(level: HairLevel) -> &'static UnderlyingPigment {
        match level {
            HairLevel::L1 => &UNDERLYING_PIGMENTS[0],
            HairLevel::L2 => &UNDERLYING_PIGMENTS[1],
            HairLevel::L3 => &UNDERLYING_PIGMENTS[2],
            HairLevel::L4 => &UNDERLYING_PIGMENTS[3],
            HairLevel::L5 => &UNDERLYING_PIGMENTS[4],
            HairLevel::L6 => &UNDERLYING_PIGMENTS[5],
            HairLevel::L7 => &UNDERLYING_PIGMENTS[6],
            HairLevel::L8 => &UNDERLYING_PIGMENTS[7],
            HairLevel::L9 => &UNDERLYING_PIGMENTS[8],
            HairLevel::L10 => &UNDERLYING_PIGMENTS[9],
        }
    }

    /// All pigment entries in level order (UI listing).
    pub fn all_pigments() -> &'static [UnderlyingPigment; 10] {
        &UNDERLYING_PIGMENTS
    }

    /// Pigment that will be exposed after lifting from `start_level` to
    /// `target_level`. No lift means no exposure.
    pub fn exposed_pigment_after_lift(
        start_level: HairLevel,
        target_level: HairLevel,
    ) -> Option<&'static UnderlyingPigment> {
        if target_level <= start_level {
            return None;
        }
        Some(Self::underlying_pigment(target_level))
    }

    /// Warmth that must be neutralized when lifting to `target_level`.
    pub fn warmth_to_neutralize(target_level: HairLevel) -> u8 {
        Self::underlying_pigment(target_level).warmth_intensity
    }

    /// Neutralizing tones for an exposed pigment. Pure color theory:
    /// warm pigments are cancelled by their complements. Total over the
    /// four wavelength families; a new family will not compile until
    /// this mapping is extended.
    pub fn suggest_neutralizing_tones(
        exposed_pigment: &UnderlyingPigment,
    ) -> &'static [&'static str] {
        match exposed_pigment.dominant_wavelength {
            DominantWavelength::Red => &["green", "ash", "blue-green"],
            DominantWavelength::Orange => &["blue", "ash-blue", "violet-blue"],
            DominantWavelength::Yellow => &["violet", "blue-violet", "ash"],
            DominantWavelength::PaleYellow => &["violet", "pearl", "silver"],
        }
    }
}
