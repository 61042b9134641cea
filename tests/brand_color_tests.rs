use sheet_bars::core::brand::{
    AMD_RED, DEFAULT_BAR_COLOR, INTEL_BLUE, NVIDIA_GREEN, has_brand_labels,
};
use sheet_bars::core::{BrandFamily, ColorMapping, brand_color, resolve_colors};

#[test]
fn nvidia_labels_resolve_green() {
    assert_eq!(
        resolve_colors(&["RTX 4090", "RTX 4080"]),
        Some(vec!["#76B900", "#76B900"])
    );
}

#[test]
fn labels_without_brand_tokens_resolve_to_none() {
    assert_eq!(resolve_colors(&["Apple", "Banana"]), None);
}

#[test]
fn mixed_families_resolve_independently() {
    assert_eq!(
        resolve_colors(&["Ryzen 9", "Intel Core i9", "RTX 4070", "Arc A770"]),
        Some(vec![AMD_RED, INTEL_BLUE, NVIDIA_GREEN, INTEL_BLUE])
    );
}

#[test]
fn coloring_uses_prefix_while_gate_uses_substring() {
    // `Core i9` opens the gate through `I9` but does not start with an Intel token.
    assert!(has_brand_labels(&["Core i9"]));
    assert_eq!(
        resolve_colors(&["Ryzen 9", "Core i9"]),
        Some(vec![AMD_RED, DEFAULT_BAR_COLOR])
    );
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(brand_color("nvidia geforce"), NVIDIA_GREEN);
    assert_eq!(brand_color("amd radeon"), AMD_RED);
    assert_eq!(brand_color("intel arc"), INTEL_BLUE);
    assert_eq!(brand_color("r7 5800x"), AMD_RED);
}

#[test]
fn amd_short_prefixes_are_not_detection_tokens() {
    // R5/R7 color red once the gate is open, but never open it themselves.
    assert_eq!(resolve_colors(&["R5 5600", "R7 5700"]), None);
    assert_eq!(
        resolve_colors(&["R5 5600", "RX 7600"]),
        Some(vec![AMD_RED, AMD_RED])
    );
}

#[test]
fn unmatched_labels_fall_back_to_yellow() {
    assert_eq!(
        resolve_colors(&["RTX 3060", "Apple M2"]),
        Some(vec![NVIDIA_GREEN, "yellow"])
    );
}

#[test]
fn family_order_is_fixed() {
    assert_eq!(
        BrandFamily::PRECEDENCE,
        [BrandFamily::Nvidia, BrandFamily::Amd, BrandFamily::Intel]
    );
}

#[test]
fn color_mapping_exposes_per_label_colors() {
    let mapping = ColorMapping::from_labels(&["RTX 3060", "RX 6600"]).expect("brand labels");
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.color_for("RTX 3060"), Some(NVIDIA_GREEN));
    assert_eq!(mapping.color_for("RX 6600"), Some(AMD_RED));
    assert_eq!(mapping.color_for("missing"), None);
    assert!(ColorMapping::from_labels(&["Apple"]).is_none());
}
