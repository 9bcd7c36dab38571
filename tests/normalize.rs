// tests/normalize.rs
use vn_slang::core::normalize_term;

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "1.2. Từ lóng (slang) – cool term",
    "3. Trẻ trâu – Immature youngster",
    ".4 Gét gô (Let's go)",
    "10. Ét o ét – SOS",
    "  (just an aside) ",
    "Check-in",
    "1. 2 3 Thả thính",
    "(a) 5 Cạn lời - speechless",
    "Ao trình (a (nested) aside)",
    "ĐỈNH CỦA CHÓP",
    "1.\u{a0}Xịn xò — awesome",
    "a - b - c",
    "x (open - close)",
];

#[test]
fn worked_example() {
    assert_eq!(normalize_term("1.2. Từ lóng (slang) – cool term"), "từ lóng");
}

#[test]
fn empty_in_empty_out() {
    assert_eq!(normalize_term(""), "");
}

#[test]
fn numbering_is_stripped_in_all_forms() {
    assert_eq!(normalize_term("1. Trẻ trâu"), "trẻ trâu");
    assert_eq!(normalize_term("1.2.3 Trẻ trâu"), "trẻ trâu");
    assert_eq!(normalize_term(".7 Trẻ trâu"), "trẻ trâu");
}

#[test]
fn lowercases_vietnamese_capitals() {
    assert_eq!(normalize_term("ĐỈNH CỦA CHÓP"), "đỉnh của chóp");
}

#[test]
fn idempotent_over_samples() {
    for s in SAMPLES {
        let once = normalize_term(s);
        assert_eq!(normalize_term(&once), once, "not a fixed point for {s:?}");
    }
}

#[test]
fn result_is_trimmed_and_lowercase() {
    for s in SAMPLES {
        let n = normalize_term(s);
        assert_eq!(n.trim(), n);
        assert_eq!(n.to_lowercase(), n);
    }
}
