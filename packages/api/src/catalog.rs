//! Static reference data for the server-defined acne types.
//!
//! The classification categories are fixed server-side; the client ships
//! their display labels, short descriptions, and sample imagery so the
//! catalog screen works without a round-trip.

/// One entry of the acne-type catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcneTypeInfo {
    /// Server-side type code, e.g. `"acne_nodules"`.
    pub code: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub sample_image_url: &'static str,
}

/// Every classification category the backend can assign.
pub const ACNE_TYPES: &[AcneTypeInfo] = &[
    AcneTypeInfo {
        code: "acne_nodules",
        label: "Nodules",
        description: "Large, painful lumps that form deep under the skin when clogged pores \
                      become inflamed. Nodular acne rarely clears on its own and usually needs \
                      dermatologist-prescribed treatment.",
        sample_image_url: "https://storage.googleapis.com/acnetify-assets/types/acne_nodules.jpg",
    },
    AcneTypeInfo {
        code: "milia",
        label: "Milia",
        description: "Tiny white cysts of trapped keratin just beneath the surface, most often \
                      around the eyes and cheeks. Harmless, but they do not pop like whiteheads.",
        sample_image_url: "https://storage.googleapis.com/acnetify-assets/types/milia.jpg",
    },
    AcneTypeInfo {
        code: "blackhead",
        label: "Blackheads",
        description: "Open comedones: pores clogged with oil and dead skin whose surface \
                      oxidizes and darkens. Responds well to salicylic-acid cleansers and \
                      retinoids.",
        sample_image_url: "https://storage.googleapis.com/acnetify-assets/types/blackhead.jpg",
    },
    AcneTypeInfo {
        code: "whitehead",
        label: "Whiteheads",
        description: "Closed comedones: clogged pores sealed under a thin layer of skin, \
                      appearing as small flesh-colored or white bumps.",
        sample_image_url: "https://storage.googleapis.com/acnetify-assets/types/whitehead.jpg",
    },
    AcneTypeInfo {
        code: "papula_pustula",
        label: "Papules & Pustules",
        description: "Inflamed red bumps (papules) and their pus-topped counterparts \
                      (pustules). The classic \"breakout\" lesions, often triggered by \
                      bacteria in clogged pores.",
        sample_image_url: "https://storage.googleapis.com/acnetify-assets/types/papula_pustula.jpg",
    },
];

/// Catalog entry for a type code, if it is one we know.
pub fn find(code: &str) -> Option<&'static AcneTypeInfo> {
    ACNE_TYPES.iter().find(|info| info.code == code)
}

/// Display label for a type code; unknown codes fall back to the raw code.
pub fn display_label(code: &str) -> &str {
    find(code).map(|info| info.label).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_resolves_to_itself() {
        for info in ACNE_TYPES {
            assert_eq!(find(info.code).unwrap().code, info.code);
        }
    }

    #[test]
    fn labels_map_and_unknown_codes_fall_through() {
        assert_eq!(display_label("acne_nodules"), "Nodules");
        assert_eq!(display_label("papula_pustula"), "Papules & Pustules");
        assert_eq!(display_label("rosacea"), "rosacea");
    }
}
