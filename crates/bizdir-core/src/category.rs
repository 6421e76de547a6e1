//! Free-form category labels → canonical catalog taxonomy codes.
//!
//! The catalog API filters on canonical codes (`businessType=plumbing`),
//! while users type or pick loosely-worded labels ("Plumbers", "AC repair
//! service"). The mapping is an ordered rule table rather than code
//! branches so it can be tested in isolation and extended without touching
//! control flow.

/// Ordered (keyword fragment → canonical code) rules. First match wins, so
/// more specific fragments must precede the generic ones they overlap with
/// (e.g. `landscap` before `garden`).
///
/// Every canonical code also matches itself through one of its fragments,
/// which keeps the mapper idempotent: `map_category(map_category(x)) ==
/// map_category(x)`.
const CATEGORY_RULES: &[(&str, &str)] = &[
    ("plumb", "plumbing"),
    ("electric", "electrical"),
    ("carpent", "carpentry"),
    ("paint", "painting"),
    ("clean", "cleaning"),
    ("ac_repair", "ac_repair"),
    ("ac repair", "ac_repair"),
    ("air condition", "ac_repair"),
    ("hvac", "ac_repair"),
    ("mechan", "mechanic"),
    ("salon", "beauty"),
    ("beaut", "beauty"),
    ("tutor", "tutoring"),
    ("cater", "catering"),
    ("photograph", "photography"),
    ("tailor", "tailoring"),
    ("pest", "pest_control"),
    ("landscap", "gardening"),
    ("garden", "gardening"),
];

/// Maps a free-form category label to a canonical taxonomy code.
///
/// Pure and total: case-insensitive substring match against
/// [`CATEGORY_RULES`], first match wins. Returns `""` (no constraint) for
/// empty input, the "all"/"all categories" sentinels, and any label no rule
/// matches. Never panics.
#[must_use]
pub fn map_category(label: &str) -> &'static str {
    let needle = label.trim().to_lowercase();
    if needle.is_empty() || needle == "all" || needle == "all categories" {
        return "";
    }
    for &(fragment, code) in CATEGORY_RULES {
        if needle.contains(fragment) {
            return code;
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_common_labels() {
        assert_eq!(map_category("Plumbers"), "plumbing");
        assert_eq!(map_category("Electrician"), "electrical");
        assert_eq!(map_category("AC Repair Service"), "ac_repair");
        assert_eq!(map_category("HVAC"), "ac_repair");
        assert_eq!(map_category("Beauty Salon"), "beauty");
        assert_eq!(map_category("Landscaping"), "gardening");
    }

    #[test]
    fn canonical_codes_map_to_themselves() {
        for &(_, code) in CATEGORY_RULES {
            assert_eq!(map_category(code), code, "code {code} must be stable");
        }
    }

    #[test]
    fn sentinels_and_unknown_yield_no_constraint() {
        assert_eq!(map_category(""), "");
        assert_eq!(map_category("all"), "");
        assert_eq!(map_category("All Categories"), "");
        assert_eq!(map_category("quantum chromodynamics"), "");
    }

    #[test]
    fn matching_is_case_insensitive_and_trims() {
        assert_eq!(map_category("  PLUMBING  "), "plumbing");
        assert_eq!(map_category("Tutoring center"), "tutoring");
    }

    #[test]
    fn first_match_wins_on_overlap() {
        // "landscap" precedes "garden"; both resolve to the same code, so
        // ordering only matters for stability, which this pins down.
        assert_eq!(map_category("landscape gardening"), "gardening");
    }

    #[test]
    fn deterministic_across_calls() {
        let a = map_category("cleaning service");
        let b = map_category("cleaning service");
        assert_eq!(a, b);
    }
}
