//! Design token tree - the single source of truth for brand styling
//!
//! The tree is built once per run by [`TokenTree::brand`] and never mutated.
//! Every generated artifact serializes the same value, so the outputs are
//! always consistent with each other.
//!
//! Map order is declaration order. Integer-like keys (spacing steps, border
//! widths) are declared before named keys because that is the order a
//! JavaScript engine enumerates them in, which keeps the JSON embedded in the
//! module files identical to what a consumer would re-serialize.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered string-keyed token scale
pub type Scale<V = String> = IndexMap<String, V>;

/// The complete brand token tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTree {
    pub colors: Scale,
    pub semantic: Scale,
    pub theme: Scale,
    pub typography: Typography,
    pub spacing: Scale,
    pub borders: Borders,
    pub shadows: Scale,
    pub transitions: Transitions,
    pub breakpoints: Scale,
    pub containers: Scale,
    pub z_index: Scale<u32>,
    pub gradients: Scale,
    pub brand_rules: BrandRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_families: Scale,
    pub font_weights: Scale<u32>,
    pub font_sizes: Scale,
    pub line_heights: Scale<f64>,
    pub letter_spacings: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub widths: Scale,
    pub radii: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transitions {
    pub durations: Scale,
    pub timing: String,
}

/// Brand guideline rules used by the validation helpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRules {
    /// Unordered pairs of colors that must never appear together
    pub forbidden_combinations: Vec<(String, String)>,

    /// Colors that must not be used for text
    pub non_typography_colors: Vec<String>,

    pub max_photo_border_radius: String,
}

fn scale<V: Clone>(entries: &[(&str, V)]) -> Scale<V> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

fn strings(entries: &[(&str, &str)]) -> Scale {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

impl TokenTree {
    /// The GivingTuesday brand tokens
    pub fn brand() -> Self {
        Self {
            colors: strings(&[
                // Brand primary
                ("red", "#ED132E"),
                ("navy", "#001548"),
                ("black", "#000000"),
                // Brand secondary
                ("lavender", "#CAC7F8"),
                ("lightBlue", "#6CF4FF"),
                ("beige", "#FDF7F7"),
                ("white", "#FFFFFF"),
                // Digital / website
                ("teal", "#0fb5c3"),
                ("tealHover", "#10c8d8"),
                ("headingBlue", "#33487e"),
                ("copy", "#1b1a19"),
                ("lightBg", "#f4f4f1"),
                ("divider", "#e0e0e0"),
            ]),
            semantic: strings(&[
                ("primary", "#ED132E"),
                ("secondary", "#001548"),
                ("accent", "#0fb5c3"),
                ("background", "#FDF7F7"),
                ("backgroundAlt", "#f4f4f1"),
                ("surface", "#FFFFFF"),
                ("text", "#001548"),
                ("textMuted", "#1b1a19"),
                ("border", "#e0e0e0"),
                ("link", "#0fb5c3"),
                ("linkHover", "#10c8d8"),
            ]),
            theme: strings(&[
                ("primary", "#ED132E"),
                ("secondary", "#001548"),
                ("success", "#0fb5c3"),
                ("warning", "#FFC107"),
                ("error", "#ED132E"),
                ("info", "#0fb5c3"),
            ]),
            typography: Typography {
                font_families: strings(&[
                    (
                        "primary",
                        "'Montserrat', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif",
                    ),
                    ("secondary", "Georgia, 'Times New Roman', serif"),
                    (
                        "mono",
                        "'SF Mono', 'Monaco', 'Inconsolata', 'Roboto Mono', monospace",
                    ),
                ]),
                font_weights: scale(&[
                    ("light", 300),
                    ("regular", 400),
                    ("medium", 500),
                    ("semibold", 600),
                    ("bold", 700),
                ]),
                font_sizes: strings(&[
                    ("xs", "12px"),
                    ("sm", "14px"),
                    ("base", "16px"),
                    ("md", "18px"),
                    ("lg", "20px"),
                    ("xl", "24px"),
                    ("2xl", "32px"),
                    ("3xl", "40px"),
                    ("4xl", "48px"),
                    ("5xl", "64px"),
                    ("6xl", "72px"),
                    // Semantic sizes
                    ("h1", "72px"),
                    ("h2", "48px"),
                    ("h3", "32px"),
                    ("h4", "24px"),
                    ("h5", "18px"),
                    ("h6", "16px"),
                    ("small", "14px"),
                    ("label", "18px"),
                ]),
                line_heights: scale(&[
                    ("headline", 1.1),
                    ("subhead", 1.2),
                    ("label", 1.3),
                    ("body", 1.4),
                    ("loose", 1.6),
                ]),
                letter_spacings: strings(&[
                    ("tight", "-0.02em"),
                    ("normal", "0"),
                    ("wide", "0.05em"),
                    ("wider", "0.1em"),
                ]),
            },
            spacing: strings(&[
                ("0", "0"),
                ("1", "8px"),
                ("2", "16px"),
                ("3", "24px"),
                ("4", "32px"),
                ("5", "40px"),
                ("6", "48px"),
                ("7", "56px"),
                ("8", "64px"),
                ("9", "72px"),
                ("10", "80px"),
                ("12", "96px"),
                ("16", "128px"),
                ("20", "160px"),
                ("base", "8px"),
            ]),
            borders: Borders {
                widths: strings(&[("2", "2px"), ("4", "4px"), ("default", "1px")]),
                radii: strings(&[
                    ("none", "0"),
                    ("sm", "4px"),
                    ("md", "8px"),
                    ("lg", "12px"),
                    ("xl", "16px"),
                    ("2xl", "24px"),
                    ("3xl", "32px"),
                    ("full", "9999px"),
                    // Brand maximum for photos
                    ("photo", "50px"),
                ]),
            },
            shadows: strings(&[
                ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
                (
                    "md",
                    "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
                ),
                (
                    "lg",
                    "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
                ),
                (
                    "xl",
                    "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
                ),
                ("2xl", "0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
            ]),
            transitions: Transitions {
                durations: strings(&[("fast", "150ms"), ("base", "200ms"), ("slow", "300ms")]),
                timing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
            },
            breakpoints: strings(&[
                ("xs", "0"),
                ("sm", "576px"),
                ("md", "768px"),
                ("lg", "992px"),
                ("xl", "1200px"),
                ("2xl", "1400px"),
            ]),
            containers: strings(&[
                ("sm", "540px"),
                ("md", "720px"),
                ("lg", "960px"),
                ("xl", "1140px"),
                ("2xl", "1320px"),
            ]),
            z_index: scale(&[
                ("dropdown", 1000),
                ("sticky", 1020),
                ("fixed", 1030),
                ("modalBackdrop", 1040),
                ("modal", 1050),
                ("popover", 1060),
                ("tooltip", 1070),
            ]),
            gradients: strings(&[
                (
                    "lavenderNavy",
                    "linear-gradient(135deg, #CAC7F8 0%, #001548 100%)",
                ),
                (
                    "lightBlueBeige",
                    "linear-gradient(135deg, #6CF4FF 0%, #FDF7F7 100%)",
                ),
                (
                    "beigeLavender",
                    "linear-gradient(135deg, #FDF7F7 0%, #CAC7F8 100%)",
                ),
                ("redBeige", "linear-gradient(135deg, #ED132E 0%, #FDF7F7 100%)"),
            ]),
            brand_rules: BrandRules {
                // Red + lavender
                forbidden_combinations: vec![("#ED132E".to_string(), "#CAC7F8".to_string())],
                // Light blue, lavender, beige (beige only reads on dark backgrounds)
                non_typography_colors: vec![
                    "#6CF4FF".to_string(),
                    "#CAC7F8".to_string(),
                    "#FDF7F7".to_string(),
                ],
                max_photo_border_radius: "50px".to_string(),
            },
        }
    }

    /// Look up a color by name in `colors`, then `semantic`, then `theme`
    pub fn get_color(&self, name: &str) -> Option<&str> {
        [&self.colors, &self.semantic, &self.theme]
            .into_iter()
            .find_map(|group| group.get(name))
            .map(String::as_str)
    }

    /// Look up a spacing step; numeric steps may be passed as integers
    pub fn get_spacing(&self, key: impl fmt::Display) -> Option<&str> {
        self.spacing.get(&key.to_string()).map(String::as_str)
    }

    pub fn get_font_size(&self, key: &str) -> Option<&str> {
        self.typography.font_sizes.get(key).map(String::as_str)
    }

    /// Whether two colors may be used together. Order does not matter.
    pub fn is_valid_color_combo(&self, color1: &str, color2: &str) -> bool {
        !self
            .brand_rules
            .forbidden_combinations
            .iter()
            .any(|(c1, c2)| (color1 == c1 && color2 == c2) || (color1 == c2 && color2 == c1))
    }

    /// Whether a color may be used for text
    pub fn is_typography_safe(&self, color: &str) -> bool {
        !self
            .brand_rules
            .non_typography_colors
            .iter()
            .any(|c| c == color)
    }

    /// Top-level category names with the number of entries in each
    pub fn category_sizes(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("colors", self.colors.len()),
            ("semantic", self.semantic.len()),
            ("theme", self.theme.len()),
            (
                "typography",
                self.typography.font_families.len()
                    + self.typography.font_weights.len()
                    + self.typography.font_sizes.len()
                    + self.typography.line_heights.len()
                    + self.typography.letter_spacings.len(),
            ),
            ("spacing", self.spacing.len()),
            ("borders", self.borders.widths.len() + self.borders.radii.len()),
            ("shadows", self.shadows.len()),
            ("transitions", self.transitions.durations.len() + 1),
            ("breakpoints", self.breakpoints.len()),
            ("containers", self.containers.len()),
            ("zIndex", self.z_index.len()),
            ("gradients", self.gradients.len()),
            (
                "brandRules",
                self.brand_rules.forbidden_combinations.len()
                    + self.brand_rules.non_typography_colors.len()
                    + 1,
            ),
        ]
    }
}

impl Default for TokenTree {
    fn default() -> Self {
        Self::brand()
    }
}
