use indexmap::IndexMap;

pub const NVIDIA_GREEN: &str = "#76B900";
pub const AMD_RED: &str = "#af1319";
pub const INTEL_BLUE: &str = "#0071c5";
/// Color for bars whose label matches no brand family, and for charts
/// without brand labels at all.
pub const DEFAULT_BAR_COLOR: &str = "yellow";

/// Tokens whose presence anywhere in any label turns brand coloring on.
pub const BRAND_DETECTION_TOKENS: [&str; 11] = [
    "RTX", "RX", "ARC", "NVIDIA", "RYZEN", "AMD", "INTEL", "I3", "I5", "I7", "I9",
];

/// Hardware vendor family recognized from a label prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandFamily {
    Nvidia,
    Amd,
    Intel,
}

impl BrandFamily {
    /// Families in the order labels are tested against them.
    pub const PRECEDENCE: [Self; 3] = [Self::Nvidia, Self::Amd, Self::Intel];

    #[must_use]
    pub const fn prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Nvidia => &["RTX", "NVIDIA"],
            Self::Amd => &["RX", "RYZEN", "AMD", "R3", "R5", "R7", "R9"],
            Self::Intel => &["ARC", "INTEL", "I3", "I5", "I7", "I9"],
        }
    }

    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Nvidia => NVIDIA_GREEN,
            Self::Amd => AMD_RED,
            Self::Intel => INTEL_BLUE,
        }
    }

    /// First family (in precedence order) with a prefix of `label`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.to_uppercase();
        Self::PRECEDENCE.into_iter().find(|family| {
            family
                .prefixes()
                .iter()
                .any(|prefix| upper.starts_with(prefix))
        })
    }
}

/// Color for one label: its brand family color, or [`DEFAULT_BAR_COLOR`].
#[must_use]
pub fn brand_color(label: &str) -> &'static str {
    BrandFamily::from_label(label).map_or(DEFAULT_BAR_COLOR, BrandFamily::color)
}

/// Returns `true` when any detection token occurs anywhere inside any label.
///
/// This is a substring test while [`brand_color`] is a prefix test, so a label
/// such as `"GeForce RTX 4090"` enables brand coloring yet itself stays yellow.
#[must_use]
pub fn has_brand_labels<S: AsRef<str>>(labels: &[S]) -> bool {
    labels.iter().any(|label| {
        let upper = label.as_ref().to_uppercase();
        BRAND_DETECTION_TOKENS
            .iter()
            .any(|token| upper.contains(token))
    })
}

/// Resolves one color per label, or `None` when the labels carry no brand
/// tokens and the caller should fall back to a single marker color.
#[must_use]
pub fn resolve_colors<S: AsRef<str>>(labels: &[S]) -> Option<Vec<&'static str>> {
    if !has_brand_labels(labels) {
        return None;
    }
    Some(
        labels
            .iter()
            .map(|label| brand_color(label.as_ref()))
            .collect(),
    )
}

/// Per-render category label → color lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorMapping {
    colors: IndexMap<String, &'static str>,
}

impl ColorMapping {
    /// Builds the mapping for a category column, `None` without brand labels.
    #[must_use]
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Option<Self> {
        let resolved = resolve_colors(labels)?;
        let colors = labels
            .iter()
            .map(|label| label.as_ref().to_owned())
            .zip(resolved)
            .collect();
        Some(Self { colors })
    }

    #[must_use]
    pub fn color_for(&self, label: &str) -> Option<&'static str> {
        self.colors.get(label).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.colors
            .iter()
            .map(|(label, color)| (label.as_str(), *color))
    }
}
