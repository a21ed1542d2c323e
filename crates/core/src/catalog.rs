//! Catalog query parameters, filtering, and sorting.
//!
//! Two entry points share the same filter rules:
//!
//! - [`ProductQuery`] backs `GET /api/products` (`sortBy` / `sortOrder` over a
//!   column). The PostgreSQL store translates it to SQL; the in-memory store
//!   evaluates it with [`ProductQuery::apply`].
//! - [`CatalogView`] backs the storefront browse view (`price-low`,
//!   `price-high`, `name`, `newest`) and is always evaluated in-process.
//!
//! Both work over anything implementing [`Listing`] so this crate stays free of
//! database types.

use std::cmp::Ordering;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Category filter value meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";

/// Read access to the fields the catalog filters and sorts on.
pub trait Listing {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn price(&self) -> f64;
    fn category(&self) -> &str;
    fn created_at(&self) -> Timestamp;
    fn updated_at(&self) -> Timestamp;
}

// ---------------------------------------------------------------------------
// Shared filter rules
// ---------------------------------------------------------------------------

/// Normalise a raw category parameter: absent, empty, and `"all"` mean no filter.
pub fn category_filter(raw: Option<&str>) -> Option<&str> {
    match raw {
        None | Some("") | Some(CATEGORY_ALL) => None,
        Some(category) => Some(category),
    }
}

/// Normalise a raw search parameter: absent and empty mean no filter.
pub fn search_filter(raw: Option<&str>) -> Option<&str> {
    raw.filter(|term| !term.is_empty())
}

/// Exact category membership. `None` passes everything through.
pub fn matches_category<T: Listing>(item: &T, category: Option<&str>) -> bool {
    category.map_or(true, |c| item.category() == c)
}

/// Case-insensitive substring match against name OR description.
pub fn matches_search<T: Listing>(item: &T, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    let needle = term.to_lowercase();
    item.name().to_lowercase().contains(&needle)
        || item.description().to_lowercase().contains(&needle)
}

/// Distinct categories in first-seen order, prefixed with [`CATEGORY_ALL`].
pub fn categories<T: Listing>(items: &[T]) -> Vec<String> {
    let mut out = vec![CATEGORY_ALL.to_string()];
    for item in items {
        if !out.iter().any(|c| c == item.category()) {
            out.push(item.category().to_string());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Column sort (query endpoint)
// ---------------------------------------------------------------------------

/// Columns accepted by `sortBy`.
pub const VALID_SORT_FIELDS: &[&str] = &["created_at", "updated_at", "name", "price", "category"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    UpdatedAt,
    Name,
    Price,
    Category,
}

impl SortField {
    /// Parse a `sortBy` value. Unknown columns are rejected.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "created_at" => Ok(Self::CreatedAt),
            "updated_at" => Ok(Self::UpdatedAt),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "category" => Ok(Self::Category),
            other => Err(CoreError::Validation(format!(
                "Unknown sortBy '{other}'. Expected one of: {}",
                VALID_SORT_FIELDS.join(", ")
            ))),
        }
    }

    /// Column name in the `products` table.
    pub fn column(self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Name => "name",
            Self::Price => "price",
            Self::Category => "category",
        }
    }

    /// SQL `ORDER BY` expression. Text columns use the `"C"` collation so
    /// PostgreSQL orders them byte-wise, the same as [`str::cmp`].
    pub fn order_by(self) -> &'static str {
        match self {
            Self::Name => r#"name COLLATE "C""#,
            Self::Category => r#"category COLLATE "C""#,
            other => other.column(),
        }
    }

    fn compare<T: Listing>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
            Self::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
            Self::Name => a.name().cmp(b.name()),
            Self::Price => a.price().total_cmp(&b.price()),
            Self::Category => a.category().cmp(b.category()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Ascending only for the literal `"asc"`; everything else is descending.
    pub fn parse(raw: &str) -> Self {
        if raw == "asc" {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// SQL keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Parsed parameters of the product query endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl ProductQuery {
    /// Build a query from raw request parameters.
    pub fn from_params(
        category: Option<&str>,
        search: Option<&str>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort_by = match sort_by {
            Some(raw) if !raw.is_empty() => SortField::parse(raw)?,
            _ => SortField::default(),
        };
        let sort_order = sort_order.map(SortOrder::parse).unwrap_or_default();

        Ok(Self {
            category: category_filter(category).map(str::to_string),
            search: search_filter(search).map(str::to_string),
            sort_by,
            sort_order,
        })
    }

    pub fn matches<T: Listing>(&self, item: &T) -> bool {
        matches_category(item, self.category.as_deref())
            && matches_search(item, self.search.as_deref())
    }

    /// Filter then stable-sort `items` according to this query.
    pub fn apply<T: Listing>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let mut out: Vec<T> = items.into_iter().filter(|i| self.matches(i)).collect();
        out.sort_by(|a, b| {
            let ord = self.sort_by.compare(a, b);
            match self.sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        out
    }
}

// ---------------------------------------------------------------------------
// Browse view (storefront)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    PriceLow,
    PriceHigh,
    Name,
    #[default]
    Newest,
}

impl CatalogSort {
    /// Parse a storefront sort key. Unknown keys fall back to [`CatalogSort::Newest`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "name" => Self::Name,
            _ => Self::Newest,
        }
    }

    fn compare<T: Listing>(self, a: &T, b: &T) -> Ordering {
        match self {
            Self::PriceLow => a.price().total_cmp(&b.price()),
            Self::PriceHigh => b.price().total_cmp(&a.price()),
            Self::Name => a.name().cmp(b.name()),
            Self::Newest => b.created_at().cmp(&a.created_at()),
        }
    }
}

/// Storefront selection: category, search term, and sort key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogView {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: CatalogSort,
}

impl CatalogView {
    pub fn from_params(category: Option<&str>, search: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            category: category_filter(category).map(str::to_string),
            search: search_filter(search).map(str::to_string),
            sort: sort.map(CatalogSort::parse).unwrap_or_default(),
        }
    }

    /// Derive the visible product list. Pure; the input is left untouched.
    pub fn derive<T: Listing + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out: Vec<T> = items
            .iter()
            .filter(|i| {
                matches_category(*i, self.category.as_deref())
                    && matches_search(*i, self.search.as_deref())
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        name: &'static str,
        description: &'static str,
        price: f64,
        category: &'static str,
        created_at: Timestamp,
    }

    impl Listing for Item {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            self.description
        }
        fn price(&self) -> f64 {
            self.price
        }
        fn category(&self) -> &str {
            self.category
        }
        fn created_at(&self) -> Timestamp {
            self.created_at
        }
        fn updated_at(&self) -> Timestamp {
            self.created_at
        }
    }

    fn item(name: &'static str, price: f64, category: &'static str, age_days: i64) -> Item {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Item {
            name,
            description: "Gas stove",
            price,
            category,
            created_at: base - Duration::days(age_days),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item("Pro", 15999.0, "4-burner", 2),
            item("Mini", 8999.0, "2-burner", 1),
            item("Chef", 25999.0, "commercial", 3),
        ]
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn category_filter_treats_all_and_empty_as_absent() {
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some("")), None);
        assert_eq!(category_filter(Some("all")), None);
        assert_eq!(category_filter(Some("2-burner")), Some("2-burner"));
    }

    #[test]
    fn filter_by_category() {
        let q = ProductQuery::from_params(Some("2-burner"), None, None, None).unwrap();
        assert_eq!(names(&q.apply(sample())), vec!["Mini"]);
    }

    #[test]
    fn unknown_category_yields_empty() {
        let q = ProductQuery::from_params(Some("portable"), None, None, None).unwrap();
        assert!(q.apply(sample()).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name() {
        let q = ProductQuery::from_params(Some("all"), Some("pro"), None, None).unwrap();
        assert_eq!(names(&q.apply(sample())), vec!["Pro"]);
    }

    #[test]
    fn search_matches_description() {
        let mut items = sample();
        items[2].description = "Heavy-duty RESTAURANT burner";
        let q = ProductQuery::from_params(None, Some("restaurant"), None, None).unwrap();
        assert_eq!(names(&q.apply(items)), vec!["Chef"]);
    }

    #[test]
    fn search_inclusion_iff_substring() {
        let terms = ["o", "PRO", "stove", "xyz", "ef"];
        for term in terms {
            let q = ProductQuery::from_params(None, Some(term), None, None).unwrap();
            let result = q.apply(sample());
            for i in sample() {
                let expected = i.name.to_lowercase().contains(&term.to_lowercase())
                    || i.description.to_lowercase().contains(&term.to_lowercase());
                let included = result.iter().any(|r| r.name == i.name);
                assert_eq!(included, expected, "term '{term}', item '{}'", i.name);
            }
        }
    }

    #[test]
    fn default_order_is_newest_first() {
        let q = ProductQuery::default();
        assert_eq!(names(&q.apply(sample())), vec!["Mini", "Pro", "Chef"]);
    }

    #[test]
    fn sort_by_price_ascending() {
        let items = vec![item("Pro", 15999.0, "4-burner", 2), item("Mini", 8999.0, "2-burner", 1)];
        let q = ProductQuery::from_params(None, None, Some("price"), Some("asc")).unwrap();
        assert_eq!(names(&q.apply(items)), vec!["Mini", "Pro"]);
    }

    #[test]
    fn sort_order_other_than_asc_is_descending() {
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("ASC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("whatever"), SortOrder::Desc);
    }

    #[test]
    fn name_sort_is_byte_wise() {
        let items = vec![
            item("apple", 1.0, "2-burner", 1),
            item("Banana", 1.0, "2-burner", 2),
            item("cherry", 1.0, "2-burner", 3),
        ];
        let q = ProductQuery::from_params(None, None, Some("name"), Some("asc")).unwrap();
        assert_eq!(names(&q.apply(items)), vec!["Banana", "apple", "cherry"]);
    }

    #[test]
    fn text_sorts_use_c_collation_in_sql() {
        assert_eq!(SortField::Name.order_by(), r#"name COLLATE "C""#);
        assert_eq!(SortField::Category.order_by(), r#"category COLLATE "C""#);
        assert_eq!(SortField::Price.order_by(), "price");
        assert_eq!(SortField::CreatedAt.order_by(), "created_at");
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = ProductQuery::from_params(None, None, Some("id; DROP TABLE"), None).unwrap_err();
        assert_matches!(err, CoreError::Validation(_));
    }

    #[test]
    fn view_price_low_is_non_decreasing() {
        let view = CatalogView::from_params(None, None, Some("price-low"));
        let out = view.derive(&sample());
        assert!(out.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn view_price_high_is_non_increasing() {
        let view = CatalogView::from_params(None, None, Some("price-high"));
        let out = view.derive(&sample());
        assert!(out.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn view_name_is_lexicographic() {
        let view = CatalogView::from_params(None, None, Some("name"));
        assert_eq!(names(&view.derive(&sample())), vec!["Chef", "Mini", "Pro"]);
    }

    #[test]
    fn view_unknown_sort_falls_back_to_newest() {
        let view = CatalogView::from_params(None, None, Some("popular"));
        assert_eq!(view.sort, CatalogSort::Newest);
        assert_eq!(names(&view.derive(&sample())), vec!["Mini", "Pro", "Chef"]);
    }

    #[test]
    fn view_ties_keep_input_order() {
        let items = vec![
            item("B", 100.0, "x", 1),
            item("A", 100.0, "x", 1),
            item("C", 50.0, "x", 1),
        ];
        let view = CatalogView::from_params(None, None, Some("price-low"));
        assert_eq!(names(&view.derive(&items)), vec!["C", "B", "A"]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let mut items = sample();
        items.push(item("Pro Max", 17999.0, "4-burner", 0));
        assert_eq!(
            categories(&items),
            vec!["all", "4-burner", "2-burner", "commercial"]
        );
    }
}
