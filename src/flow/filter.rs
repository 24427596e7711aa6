//! Search and facet filtering over static record lists.
//!
//! Filtering is a pure function of (records, query, facets). The result is a
//! list of indices into the original slice, in original order, so callers
//! can keep per-record state (bookmarks, click ids) keyed by position.

use crate::catalog::{Career, Course};

/// Records that can be matched against a free-text query.
pub trait Searchable {
    /// Every field the text query is tried against. A record matches if any
    /// of them contains the query.
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring.
    Contains,
    /// Case-insensitive equality.
    Equals,
}

/// One categorical filter, e.g. industry or difficulty.
pub struct Facet<R> {
    pub field: fn(&R) -> &str,
    pub mode: MatchMode,
    /// `None` means "all".
    pub selected: Option<String>,
}

impl<R> Facet<R> {
    pub fn new(field: fn(&R) -> &str, mode: MatchMode) -> Self {
        Self {
            field,
            mode,
            selected: None,
        }
    }

    pub fn select(&mut self, value: Option<&str>) {
        self.selected = value.map(str::to_string);
    }

    pub fn is_all(&self) -> bool {
        self.selected.is_none()
    }

    fn accepts(&self, record: &R) -> bool {
        let Some(want) = &self.selected else {
            return true;
        };
        let have = (self.field)(record).to_lowercase();
        let want = want.to_lowercase();
        match self.mode {
            MatchMode::Contains => have.contains(&want),
            MatchMode::Equals => have == want,
        }
    }
}

/// Filter result as seen by a page. `NotComputed` is distinct from an empty
/// result so the page can tell "nothing matches" from "not filtered yet".
#[derive(Clone, Debug, PartialEq)]
pub enum FilterView {
    NotComputed,
    Computed(Vec<usize>),
}

impl FilterView {
    pub fn indices(&self) -> &[usize] {
        match self {
            FilterView::NotComputed => &[],
            FilterView::Computed(v) => v,
        }
    }

    /// True only for a computed result with no matches.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, FilterView::Computed(v) if v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.indices().len()
    }
}

pub fn matches_query<R: Searchable>(record: &R, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
}

/// Indices of every record that matches the query and all facets.
pub fn filter_indices<R: Searchable>(records: &[R], query: &str, facets: &[&Facet<R>]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| matches_query(*r, query) && facets.iter().all(|f| f.accepts(r)))
        .map(|(i, _)| i)
        .collect()
}

// ── Fixture bindings ──────────────────────────────────────────────────

impl Searchable for Career {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.industry.as_str()]
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.provider.as_str()];
        fields.extend(self.topics.iter().map(String::as_str));
        fields
    }
}

pub fn career_industry(c: &Career) -> &str {
    &c.industry
}

pub fn course_category(c: &Course) -> &str {
    &c.category
}

pub fn course_difficulty(c: &Course) -> &str {
    c.difficulty.label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::bundled().unwrap()
    }

    #[test]
    fn empty_query_and_all_facets_keep_everything() {
        let c = catalog();
        let industry = Facet::new(career_industry, MatchMode::Contains);
        let idx = filter_indices(&c.careers, "", &[&industry]);
        assert_eq!(idx, (0..c.careers.len()).collect::<Vec<_>>());
    }

    #[test]
    fn query_is_case_insensitive() {
        let c = catalog();
        let idx = filter_indices(&c.careers, "DATA", &[]);
        let titles: Vec<&str> = idx.iter().map(|i| c.careers[*i].title.as_str()).collect();
        assert_eq!(titles, vec!["Data Scientist"]);
    }

    #[test]
    fn career_query_matches_industry_too() {
        let c = catalog();
        let idx = filter_indices(&c.careers, "health", &[]);
        assert_eq!(idx.len(), 1);
        assert_eq!(c.careers[idx[0]].industry, "Healthcare");
    }

    #[test]
    fn industry_facet_is_substring() {
        let c = catalog();
        let mut industry = Facet::new(career_industry, MatchMode::Contains);
        industry.select(Some("tech"));
        let idx = filter_indices(&c.careers, "", &[&industry]);
        assert_eq!(idx.len(), 2);
        assert!(idx.iter().all(|i| c.careers[*i].industry == "Technology"));
    }

    #[test]
    fn course_query_matches_topics() {
        let c = catalog();
        let idx = filter_indices(&c.courses, "pandas", &[]);
        assert_eq!(idx.len(), 1);
        assert_eq!(c.courses[idx[0]].title, "Python for Data Science");
    }

    #[test]
    fn course_query_matches_provider() {
        let c = catalog();
        let idx = filter_indices(&c.courses, "google", &[]);
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn category_facet_is_exact() {
        let c = catalog();
        let mut category = Facet::new(course_category, MatchMode::Equals);
        category.select(Some("sec"));
        assert!(filter_indices(&c.courses, "", &[&category]).is_empty());
        category.select(Some("security"));
        assert_eq!(filter_indices(&c.courses, "", &[&category]).len(), 2);
    }

    #[test]
    fn facets_combine_with_and() {
        let c = catalog();
        let mut category = Facet::new(course_category, MatchMode::Equals);
        let mut difficulty = Facet::new(course_difficulty, MatchMode::Equals);
        category.select(Some("technology"));
        difficulty.select(Some("advanced"));
        let idx = filter_indices(&c.courses, "", &[&category, &difficulty]);
        let titles: Vec<&str> = idx.iter().map(|i| c.courses[*i].title.as_str()).collect();
        assert_eq!(titles, vec!["Deep Learning with PyTorch"]);
    }

    #[test]
    fn no_match_is_empty() {
        let c = catalog();
        assert!(filter_indices(&c.courses, "underwater basket weaving", &[]).is_empty());
    }

    #[test]
    fn view_distinguishes_not_computed_from_empty() {
        assert!(!FilterView::NotComputed.is_empty_result());
        assert!(FilterView::Computed(vec![]).is_empty_result());
        assert!(!FilterView::Computed(vec![1]).is_empty_result());
        assert_eq!(FilterView::NotComputed.len(), 0);
    }
}
