/// Local storage key of the persisted dark theme flag.
pub const THEME_STORAGE_KEY: &str = "darkTheme";

/// Attribute set on `<body>` to select the stylesheet's theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        Theme::from_dark_flag(!self.is_dark())
    }

    /// Value of [THEME_ATTRIBUTE].
    pub fn attribute(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_preference_is_light() {
        assert_eq!(Theme::default().attribute(), "light");
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn toggle_twice_is_identity() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(
                Theme::from_dark_flag(theme.toggled().toggled().is_dark()),
                theme
            );
        }
    }
}
