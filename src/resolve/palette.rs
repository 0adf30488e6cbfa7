//! Named color palettes
//!
//! Every palette family has a light and a dark variant. Lookup never fails:
//! an unknown family name falls back to "classic".

use crate::site::{Theme, ThemeType};

/// Name of the palette used when a lookup misses
pub const FALLBACK_PALETTE: &str = "classic";

/// One variant of a palette family
#[derive(Debug, Clone, Copy)]
struct Colors {
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    text: &'static str,
}

impl Colors {
    fn to_theme(self) -> Theme {
        Theme {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            accent: self.accent.to_string(),
            background: self.background.to_string(),
            text: self.text.to_string(),
        }
    }
}

/// A palette family: name plus its light and dark variants
#[derive(Debug, Clone, Copy)]
struct Palette {
    name: &'static str,
    light: Colors,
    dark: Colors,
}

const fn colors(
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    background: &'static str,
    text: &'static str,
) -> Colors {
    Colors {
        primary,
        secondary,
        accent,
        background,
        text,
    }
}

const PALETTES: &[Palette] = &[
    Palette {
        name: "classic",
        light: colors("#1c1917", "#f8fafc", "#ca8a04", "#ffffff", "#334155"),
        dark: colors("#f8fafc", "#1c1917", "#eab308", "#0f172a", "#e2e8f0"),
    },
    Palette {
        name: "modern",
        light: colors("#0f172a", "#f1f5f9", "#0ea5e9", "#ffffff", "#334155"),
        dark: colors("#f1f5f9", "#0f172a", "#38bdf8", "#020617", "#e2e8f0"),
    },
    Palette {
        name: "rustic",
        light: colors("#451a03", "#ffe2d5", "#ea580c", "#ffffff", "#422006"),
        dark: colors("#fef3c7", "#451a03", "#f97316", "#1c1917", "#fef3c7"),
    },
    Palette {
        name: "minimal",
        light: colors("#2d3436", "#f5f6fa", "#00b894", "#ffffff", "#2d3436"),
        dark: colors("#f5f6fa", "#2d3436", "#00b894", "#1e272e", "#f5f6fa"),
    },
    Palette {
        name: "retro",
        light: colors("#1a1a1a", "#f4f4f4", "#d4af37", "#ffffff", "#333333"),
        dark: colors("#f4f4f4", "#1a1a1a", "#d4af37", "#121212", "#e0e0e0"),
    },
    Palette {
        name: "nature",
        light: colors("#2f5233", "#f0f7f0", "#88b06a", "#ffffff", "#1a331d"),
        dark: colors("#88b06a", "#1a331d", "#d4e6c4", "#0f1f12", "#f0f7f0"),
    },
    Palette {
        name: "ocean",
        light: colors("#1e3d59", "#f5f8fa", "#17a2b8", "#ffffff", "#2c3e50"),
        dark: colors("#17a2b8", "#1e3d59", "#48dbfb", "#102a43", "#f5f8fa"),
    },
];

/// Returns the names of all known palette families, in table order
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.name)
}

/// Looks up a palette by family name and variant
///
/// # Arguments
///
/// * `theme_name` - Palette family, e.g. "ocean"
/// * `theme_type` - Light or dark variant
///
/// # Returns
///
/// The requested palette, or the same variant of "classic" when the family
/// name is unknown
///
/// # Example
///
/// ```
/// use oasis_sitegen::{palette_for, ThemeType};
///
/// let theme = palette_for("rustic", ThemeType::Dark);
/// assert_eq!(theme.accent, "#f97316");
/// ```
pub fn palette_for(theme_name: &str, theme_type: ThemeType) -> Theme {
    let palette = PALETTES
        .iter()
        .find(|p| p.name == theme_name)
        .or_else(|| PALETTES.iter().find(|p| p.name == FALLBACK_PALETTE))
        .unwrap_or(&PALETTES[0]);

    match theme_type {
        ThemeType::Light => palette.light.to_theme(),
        ThemeType::Dark => palette.dark.to_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rustic_dark_values() {
        let theme = palette_for("rustic", ThemeType::Dark);
        assert_eq!(theme.primary, "#fef3c7");
        assert_eq!(theme.secondary, "#451a03");
        assert_eq!(theme.accent, "#f97316");
        assert_eq!(theme.background, "#1c1917");
        assert_eq!(theme.text, "#fef3c7");
    }

    #[test]
    fn test_unknown_name_falls_back_to_classic_variant() {
        assert_eq!(
            palette_for("unknown-name", ThemeType::Dark),
            palette_for("classic", ThemeType::Dark)
        );
        assert_eq!(
            palette_for("", ThemeType::Light),
            palette_for("classic", ThemeType::Light)
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(
            palette_for("Ocean", ThemeType::Light),
            palette_for("classic", ThemeType::Light)
        );
    }

    #[test]
    fn test_every_family_has_distinct_variants() {
        let names: Vec<_> = palette_names().collect();
        assert_eq!(
            names,
            vec!["classic", "modern", "rustic", "minimal", "retro", "nature", "ocean"]
        );
        for name in names {
            assert_ne!(
                palette_for(name, ThemeType::Light),
                palette_for(name, ThemeType::Dark),
                "{} light and dark should differ",
                name
            );
        }
    }
}
