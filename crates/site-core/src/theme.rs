use crate::constants::MENU_LINE_PX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuTheme {
    /// Blue chrome over light content.
    OnLight,
    /// White chrome over the dark Over Ons section.
    OnDark,
}

pub struct ThemeColors {
    pub label: &'static str,
    pub bars: &'static str,
    pub border: &'static str,
}

impl MenuTheme {
    /// Theme for the dark section's viewport rect.
    pub fn for_section(top: f64, bottom: f64) -> MenuTheme {
        if top <= MENU_LINE_PX && bottom >= MENU_LINE_PX {
            MenuTheme::OnDark
        } else {
            MenuTheme::OnLight
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            MenuTheme::OnLight => ThemeColors {
                label: "#04295B",
                bars: "#04295B",
                border: "rgba(4, 41, 91, 0.2)",
            },
            MenuTheme::OnDark => ThemeColors {
                label: "#FFFFFF",
                bars: "#FFFFFF",
                border: "rgba(255, 255, 255, 0.3)",
            },
        }
    }
}
