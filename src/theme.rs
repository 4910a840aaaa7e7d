/// Light/dark display palettes.
///
/// Pure data consumed by the presentation layer; the chosen theme itself is
/// persisted through `persist`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_code(code: &str) -> Option<Theme> {
        match code {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Hex colors for one theme.
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub card_bg: &'static str,
    pub header_text: &'static str,
    pub icon: &'static str,
    pub recommendation_bg: &'static str,
    pub cloud: &'static str,
}

static LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f3f4f6",
    text: "#1f2937",
    text_secondary: "#6b7280",
    text_muted: "#9ca3af",
    border: "#e5e7eb",
    card_bg: "#ffffff",
    header_text: "#1f2937",
    icon: "#374151",
    recommendation_bg: "#eff6ff",
    cloud: "#94a3b8",
};

static DARK: Palette = Palette {
    background: "#111827",
    surface: "#1f2937",
    text: "#f9fafb",
    text_secondary: "#d1d5db",
    text_muted: "#9ca3af",
    border: "#374151",
    card_bg: "#1f2937",
    header_text: "#f9fafb",
    icon: "#d1d5db",
    recommendation_bg: "#1e3a5f",
    cloud: "#64748b",
};
