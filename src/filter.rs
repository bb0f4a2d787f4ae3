pub const ALL: &str = "all";
pub const HIDE_CLASS: &str = "hide";
pub const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    /// Reads a `data-filter` value; a missing or blank value means everything.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => Self::All,
            Some(category) => Self::Category(category.to_string()),
        }
    }

    pub fn matches<'a>(&self, mut classes: impl Iterator<Item = &'a str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => classes.any(|class| class == category),
        }
    }

    /// Splits a `class` attribute the way `classList` does.
    pub fn matches_class_attr(&self, class_attr: &str) -> bool {
        self.matches(class_attr.split_ascii_whitespace())
    }
}
