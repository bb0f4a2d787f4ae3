pub const THEME_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark-theme";
pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Font Awesome glyph shown on the switcher: the sun offers a way out of
    /// dark mode, the moon a way into it.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "moon",
            Self::Dark => "sun",
        }
    }

    pub fn icon_markup(self) -> String {
        format!("<i class=\"fas fa-{}\"></i>", self.icon())
    }
}

/// Where the chosen theme survives page reloads.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// Picks the startup theme: an explicit saved choice wins, then the system
/// preference.
pub fn resolve_theme(store: &impl ThemeStore, system_prefers_dark: bool) -> Theme {
    store.load().unwrap_or(if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

pub struct ThemeSwitcher<S> {
    theme: Theme,
    store: S,
}

impl<S: ThemeStore> ThemeSwitcher<S> {
    pub fn new(store: S, system_prefers_dark: bool) -> Self {
        let theme = resolve_theme(&store, system_prefers_dark);
        Self { theme, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new choice.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.save(self.theme);
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        items: HashMap<String, String>,
        writes: usize,
    }

    impl ThemeStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.items.get(THEME_KEY).and_then(|value| Theme::from_str(value))
        }

        fn save(&mut self, theme: Theme) {
            self.writes += 1;
            self.items.insert(THEME_KEY.to_string(), theme.as_str().to_string());
        }
    }

    fn store_with(value: &str) -> MemoryStore {
        let mut store = MemoryStore::default();
        store.items.insert(THEME_KEY.to_string(), value.to_string());
        store
    }

    #[test]
    fn saved_choice_wins_over_system_preference() {
        assert_eq!(resolve_theme(&store_with("light"), true), Theme::Light);
        assert_eq!(resolve_theme(&store_with("dark"), false), Theme::Dark);
    }

    #[test]
    fn unknown_or_missing_value_uses_system_preference() {
        assert_eq!(resolve_theme(&store_with("sepia"), true), Theme::Dark);
        assert_eq!(resolve_theme(&MemoryStore::default(), false), Theme::Light);
    }

    #[test]
    fn toggle_writes_once_per_flip() {
        let mut switcher = ThemeSwitcher::new(MemoryStore::default(), false);

        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.store().writes, 1);
        assert_eq!(switcher.store().load(), Some(Theme::Dark));
        assert_eq!(switcher.theme().icon(), "sun");
    }

    #[test]
    fn double_toggle_restores_persisted_value_and_icon() {
        let mut switcher = ThemeSwitcher::new(store_with("light"), false);
        let icon_before = switcher.theme().icon_markup();

        for _ in 0..3 {
            switcher.toggle();
            switcher.toggle();

            assert_eq!(switcher.theme(), Theme::Light);
            assert_eq!(switcher.store().items.get(THEME_KEY).map(String::as_str), Some("light"));
            assert_eq!(switcher.theme().icon_markup(), icon_before);
        }
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
