//! Tri-state outcome of loading a fixture list, plus list filters.
//!
//! DESIGN
//! ======
//! A failed fetch and an empty successful fetch must render differently, so
//! they are distinct variants instead of `Option<Vec<_>>` plus `is_empty()`
//! checks scattered through the renderers.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

/// Result of loading a list of records.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    /// The fetch failed; render the error state.
    Failed,
    /// The fetch (or a filter) produced no records; render the empty state.
    Empty,
    /// At least one record.
    Ready(Vec<T>),
}

impl<T> LoadState<T> {
    /// Classify a fetch result. `None` is the fetcher's failure sentinel.
    #[must_use]
    pub fn from_fetch(result: Option<Vec<T>>) -> Self {
        result.map_or(Self::Failed, Self::from_records)
    }

    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() { Self::Empty } else { Self::Ready(records) }
    }

    /// Records to render; empty for both `Failed` and `Empty`.
    #[must_use]
    pub fn records(&self) -> &[T] {
        match self {
            Self::Ready(records) => records,
            Self::Failed | Self::Empty => &[],
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Transform the record list of a loaded state. `Failed` stays `Failed`;
    /// a transform that empties the list yields `Empty`.
    #[must_use]
    pub fn map_records<U>(self, f: impl FnOnce(Vec<T>) -> Vec<U>) -> LoadState<U> {
        match self {
            Self::Failed => LoadState::Failed,
            Self::Empty => LoadState::Empty,
            Self::Ready(records) => LoadState::from_records(f(records)),
        }
    }

    /// Keep records matching `keep`. Filtering never turns an empty result
    /// into an error, or an error into an empty result.
    #[must_use]
    pub fn filtered(&self, keep: impl Fn(&T) -> bool) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Failed => Self::Failed,
            Self::Empty => Self::Empty,
            Self::Ready(records) => Self::from_records(records.iter().filter(|r| keep(r)).cloned().collect()),
        }
    }
}

/// Category/type filter selected by the page's filter buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// Parse a `data-filter` value or `?filter=` query parameter. `all`,
    /// blank, and absent all mean no filtering.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("" | "all") => Self::All,
            Some(value) => Self::Only(value.to_owned()),
        }
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Value as it appears in `data-filter` attributes.
    #[must_use]
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(value) => value,
        }
    }
}
