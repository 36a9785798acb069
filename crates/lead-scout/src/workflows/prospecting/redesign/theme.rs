use serde::Serialize;

/// Business categories with dedicated redesign styling. Anything else is styled as a restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Niche {
    Restaurants,
    Dentists,
    Plumbers,
}

impl Niche {
    pub fn parse(niche: &str) -> Self {
        match niche.trim().to_lowercase().as_str() {
            "dentists" => Self::Dentists,
            "plumbers" => Self::Plumbers,
            _ => Self::Restaurants,
        }
    }

    pub fn theme(self) -> &'static Theme {
        match self {
            Self::Restaurants => &THEMES[0],
            Self::Dentists => &THEMES[1],
            Self::Plumbers => &THEMES[2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub accent_color: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

static THEMES: [Theme; 3] = [
    Theme {
        name: "Warm & Inviting",
        primary_color: "#D97706",
        secondary_color: "#92400E",
        accent_color: "#FEF3C7",
        background_color: "#FFFBEB",
        text_color: "#1F2937",
        heading_font: "Playfair Display",
        body_font: "Inter",
    },
    Theme {
        name: "Clean & Professional",
        primary_color: "#0EA5E9",
        secondary_color: "#0284C7",
        accent_color: "#E0F2FE",
        background_color: "#FFFFFF",
        text_color: "#374151",
        heading_font: "Inter",
        body_font: "Inter",
    },
    Theme {
        name: "Trustworthy & Reliable",
        primary_color: "#DC2626",
        secondary_color: "#B91C1C",
        accent_color: "#FEE2E2",
        background_color: "#F9FAFB",
        text_color: "#111827",
        heading_font: "Inter",
        body_font: "Inter",
    },
];

pub fn select_theme(niche: &str) -> &'static Theme {
    Niche::parse(niche).theme()
}
