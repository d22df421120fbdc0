//! Project card filter.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";

/// Inline animation applied uniformly to every card that becomes visible.
pub const SHOW_ANIMATION: &str = "fadeInUp 0.5s ease-out";

/// Selected project category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a button's `data-filter` value. A button without the attribute
    /// acts as `all`; any other value is compared to `data-category`
    /// exactly as written, whitespace included.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            None | Some(FILTER_ALL) => Self::All,
            Some(category) => Self::Category(category.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Category(category) => category,
        }
    }

    /// Whether a card with this `data-category` is shown.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Visibility for each card, in input order.
    #[must_use]
    pub fn visibility<'a, I>(&self, categories: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        categories.into_iter().map(|category| self.matches(category)).collect()
    }
}

/// Inline style changes for one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    pub display: &'static str,
    pub animation: Option<&'static str>,
}

impl CardStyle {
    #[must_use]
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self { display: "block", animation: Some(SHOW_ANIMATION) }
        } else {
            Self { display: "none", animation: None }
        }
    }
}

/// Active filter button tracking.
#[derive(Clone, Debug, Default)]
pub struct FilterState {
    active: ProjectFilter,
    active_button: Option<usize>,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &ProjectFilter {
        &self.active
    }

    /// Index of the sole active filter button.
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    /// Select the button at `index` carrying `filter`.
    pub fn select(&mut self, index: usize, filter: ProjectFilter) -> &ProjectFilter {
        self.active_button = Some(index);
        self.active = filter;
        &self.active
    }
}
