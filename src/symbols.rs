// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The closed catalog of named Unicode glyphs the builder can append or
//! prepend on demand. Each entry in the table below expands to an
//! `append_*` / `prepend_*` accessor pair on [`StyledMessage`]; both are thin
//! delegations to [`StyledMessage::append`] / [`StyledMessage::prepend`], so
//! a glyph picks up whatever style state is already pending and nothing else.

use crate::StyledMessage;

/// Generates the accessor pair for every `(append, prepend, glyph, name)` row,
/// plus a test-only table of glyphs and fn pointers so the whole catalog is
/// covered by one loop instead of ~112 hand-written cases.
macro_rules! symbol_catalog {
    (
        $( ($append_fn:ident, $prepend_fn:ident, $glyph:literal, $name:literal) ),*
        $(,)?
    ) => {
        impl StyledMessage {
            $(
                #[doc = concat!("Appends the ", $name, " symbol (", $glyph, ").")]
                #[must_use]
                pub fn $append_fn(self) -> Self {
                    self.append($glyph)
                }

                #[doc = concat!("Prepends the ", $name, " symbol (", $glyph, ").")]
                #[must_use]
                pub fn $prepend_fn(self) -> Self {
                    self.prepend($glyph)
                }
            )*
        }

        /// Every catalog entry as `(glyph, append accessor, prepend accessor)`.
        #[cfg(test)]
        pub(crate) const SYMBOL_CATALOG: &[(
            &str,
            fn(StyledMessage) -> StyledMessage,
            fn(StyledMessage) -> StyledMessage,
        )] = &[
            $( ($glyph, StyledMessage::$append_fn, StyledMessage::$prepend_fn) ),*
        ];
    };
}

symbol_catalog![
    // Typographic.
    (append_copyright_symbol, prepend_copyright_symbol, "\u{00A9}", "copyright"),
    (append_registered_symbol, prepend_registered_symbol, "\u{00AE}", "registered"),
    // Logical & set theory.
    (append_logical_not_symbol, prepend_logical_not_symbol, "\u{00AC}", "logical not"),
    (append_logical_for_all_symbol, prepend_logical_for_all_symbol, "\u{2200}", "universal quantifier (for all)"),
    (append_logical_exists_symbol, prepend_logical_exists_symbol, "\u{2203}", "existential quantifier (exists)"),
    (append_logical_conjunction_symbol, prepend_logical_conjunction_symbol, "\u{22C0}", "logical conjunction (and)"),
    (append_logical_disjunction_symbol, prepend_logical_disjunction_symbol, "\u{22C1}", "logical disjunction (or)"),
    (append_logical_element_of_symbol, prepend_logical_element_of_symbol, "\u{2208}", "element of"),
    (append_logical_follows_symbol, prepend_logical_follows_symbol, "\u{21D2}", "implies (follows)"),
    (append_logical_inverse_follows_symbol, prepend_logical_inverse_follows_symbol, "\u{21D0}", "inverse implication"),
    (append_logical_equivalence_symbol, prepend_logical_equivalence_symbol, "\u{21D4}", "logical equivalence (iff)"),
    (append_logical_identical, prepend_logical_identical, "\u{2261}", "identical to"),
    (append_logical_not_identical, prepend_logical_not_identical, "\u{2262}", "not identical to"),
    // Calculus & algebra.
    (append_math_natural_numbers_symbol, prepend_math_natural_numbers_symbol, "\u{2115}", "natural numbers"),
    (append_math_partial_differential, prepend_math_partial_differential, "\u{2202}", "partial differential"),
    (append_math_empty_set, prepend_math_empty_set, "\u{2205}", "empty set"),
    (append_math_determinant, prepend_math_determinant, "\u{2206}", "determinant (increment)"),
    (append_math_nabla, prepend_math_nabla, "\u{2207}", "nabla"),
    (append_math_product_symbol, prepend_math_product_symbol, "\u{220F}", "n-ary product"),
    (append_math_summation_symbol, prepend_math_summation_symbol, "\u{2211}", "n-ary summation"),
    (append_math_intersection_symbol, prepend_math_intersection_symbol, "\u{2229}", "intersection"),
    (append_math_union_symbol, prepend_math_union_symbol, "\u{222A}", "union"),
    (append_math_integral_symbol, prepend_math_integral_symbol, "\u{222B}", "integral"),
    (append_math_double_integral_symbol, prepend_math_double_integral_symbol, "\u{222C}", "double integral"),
    (append_math_triple_integral_symbol, prepend_math_triple_integral_symbol, "\u{222D}", "triple integral"),
    (append_math_contour_integral, prepend_math_contour_integral, "\u{222E}", "contour integral"),
    (append_math_volume_integral, prepend_math_volume_integral, "\u{2230}", "volume integral"),
    (append_math_proportional_symbol, prepend_math_proportional_symbol, "\u{221D}", "proportional to"),
    (append_math_infinity_symbol, prepend_math_infinity_symbol, "\u{221E}", "infinity"),
    (append_math_almost_equal, prepend_math_almost_equal, "\u{2248}", "almost equal"),
    (append_math_almost_equal_or_equal, prepend_math_almost_equal_or_equal, "\u{224A}", "almost equal or equal"),
    (append_math_estimates, prepend_math_estimates, "\u{2259}", "estimates"),
    (append_math_equal_by_definition, prepend_math_equal_by_definition, "\u{225D}", "equal by definition"),
    (append_math_sqrt_symbol, prepend_math_sqrt_symbol, "\u{221A}", "square root"),
    (append_math_cube_root_symbol, prepend_math_cube_root_symbol, "\u{221B}", "cube root"),
    (append_math_forth_root_symbol, prepend_math_forth_root_symbol, "\u{221C}", "fourth root"),
    (append_math_subset_of_symbol, prepend_math_subset_of_symbol, "\u{2282}", "subset of"),
    (append_math_superset_of_symbol, prepend_math_superset_of_symbol, "\u{2283}", "superset of"),
    // Check marks & signs.
    (append_check_mark, prepend_check_mark, "\u{2713}", "check mark"),
    (append_not_check_mark, prepend_not_check_mark, "\u{237B}", "not check mark"),
    (append_ballot_box_with_check_mark, prepend_ballot_box_with_check_mark, "\u{2611}", "ballot box with check"),
    (append_white_heavy_check_mark, prepend_white_heavy_check_mark, "\u{2705}", "white heavy check mark"),
    (append_heavy_check_mark, prepend_heavy_check_mark, "\u{2714}", "heavy check mark"),
    (append_warning_sign, prepend_warning_sign, "\u{26A0}", "warning sign"),
    // Office & ornament.
    (append_hourglass_symbol, prepend_hourglass_symbol, "\u{231B}", "hourglass"),
    (append_keyboard_symbol, prepend_keyboard_symbol, "\u{2328}", "keyboard"),
    (append_question_mark_ornament, prepend_question_mark_ornament, "\u{2753}", "question mark ornament"),
    // Currency.
    (append_bitcoin_symbol, prepend_bitcoin_symbol, "\u{20BF}", "Bitcoin"),
    (append_euro_symbol, prepend_euro_symbol, "\u{20AC}", "Euro"),
    // Emoji.
    (append_face_with_tears_of_joy, prepend_face_with_tears_of_joy, "\u{1F602}", "face with tears of joy"),
    (append_heart_symbol, prepend_heart_symbol, "\u{2764}", "heart"),
    (append_corona_virus_symbol, prepend_corona_virus_symbol, "\u{1F9A0}", "coronavirus"),
    (append_ambulance_symbol, prepend_ambulance_symbol, "\u{1F691}", "ambulance"),
    (append_potable_water_symbol, prepend_potable_water_symbol, "\u{1F6B0}", "potable water"),
    (append_face_with_medical_mask_symbol, prepend_face_with_medical_mask_symbol, "\u{1F637}", "face with medical mask"),
    (append_rose_symbol, prepend_rose_symbol, "\u{1F339}", "rose"),
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{SYMBOL_CATALOG, StyledMessage};

    #[test]
    fn every_accessor_appends_exactly_its_glyph() {
        for (glyph, append_accessor, _) in SYMBOL_CATALOG {
            let msg = append_accessor(StyledMessage::new());
            assert_eq!(msg.text, format!("{glyph}\x1b[0m"), "glyph {glyph:?}");
        }
    }

    #[test]
    fn every_accessor_prepends_before_existing_text() {
        for (glyph, _, prepend_accessor) in SYMBOL_CATALOG {
            let msg = prepend_accessor(StyledMessage::from("Y"));
            assert_eq!(msg.text, format!("{glyph}\x1b[0mY"), "glyph {glyph:?}");
        }
    }

    #[test]
    fn accessors_pick_up_pending_styles() {
        let msg = StyledMessage::new().set_color_green().append_check_mark();
        assert_eq!(msg.text, "\x1b[32m\u{2713}\x1b[0m");
    }

    #[test]
    fn the_catalog_is_closed() {
        assert_eq!(SYMBOL_CATALOG.len(), 56);
    }
}
