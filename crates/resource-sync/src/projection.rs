//! # View Projection
//!
//! A pure function from the store's items plus UI query state to the rows on screen.
//! It is recomputed from scratch on every render:
//!
//! 1. **Filter** by case-insensitive substring on the entity's search text, and by category.
//! 2. **Sort** by price, ascending or descending, or keep server order.
//! 3. **Paginate** with a fixed page size; pages are 1-indexed.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// What the projection needs to know about an entity.
pub trait Projectable {
    /// Rows per page for this entity's table.
    const PAGE_SIZE: usize;

    /// Text matched against the search query.
    fn search_text(&self) -> Cow<'_, str>;

    /// Category used by [`CategoryFilter::Only`]. Entities without one are never filtered out.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Key used by [`SortOrder::PriceAsc`] and [`SortOrder::PriceDesc`].
    fn sort_price(&self) -> Option<f64> {
        None
    }
}

/// Category selection. `"All"` in the UI maps to [`CategoryFilter::All`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "All" => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        })
    }
}

/// Three-way sort option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Server order.
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "priceAsc" => Ok(SortOrder::PriceAsc),
            "priceDesc" => Ok(SortOrder::PriceDesc),
            other => Err(format!("unknown sort option: {other}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Default => "default",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
        })
    }
}

/// UI-held query state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
    /// 1-indexed; 0 is treated as 1.
    pub page: usize,
    pub page_size: usize,
}

impl ViewQuery {
    /// First page, no filters, server order, with `T`'s page size.
    pub fn for_entity<T: Projectable>() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortOrder::Default,
            page: 1,
            page_size: T::PAGE_SIZE,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, filter: CategoryFilter) -> Self {
        self.category = filter;
        self
    }

    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// One page of projected rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub page_count: usize,
    /// Number of entities that passed the filter, across all pages.
    pub total_filtered: usize,
}

/// A [`Page`] with cloned rows, detached from the collection it was projected from.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedPage<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total_filtered: usize,
}

impl<T: Clone> From<Page<'_, T>> for OwnedPage<T> {
    fn from(page: Page<'_, T>) -> Self {
        Self {
            items: page.items.into_iter().cloned().collect(),
            page: page.page,
            page_count: page.page_count,
            total_filtered: page.total_filtered,
        }
    }
}

/// Filter, sort and paginate `items` according to `query`.
pub fn project<'a, T: Projectable>(items: &'a [T], query: &ViewQuery) -> Page<'a, T> {
    let needle = query.search.to_lowercase();
    let mut rows: Vec<&T> = items
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&needle))
        .filter(|item| match (&query.category, item.category()) {
            (CategoryFilter::All, _) | (_, None) => true,
            (CategoryFilter::Only(wanted), Some(category)) => category == wanted,
        })
        .collect();

    match query.sort {
        SortOrder::Default => {}
        SortOrder::PriceAsc => rows.sort_by(|a, b| compare_price(a.sort_price(), b.sort_price())),
        SortOrder::PriceDesc => rows.sort_by(|a, b| compare_price(b.sort_price(), a.sort_price())),
    }

    let page_size = query.page_size.max(1);
    let page = query.page.max(1);
    let total_filtered = rows.len();
    let start = (page - 1).saturating_mul(page_size);
    let items = rows.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        page,
        page_count: total_filtered.div_ceil(page_size),
        total_filtered,
    }
}

// Missing keys sort first so the comparison stays a total order.
fn compare_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}
