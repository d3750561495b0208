//! Filter categories and the multi-select option store.
//!
//! The four categories and their option vocabularies are fixed and
//! disjoint. Options are opaque labels; the Salary bands in particular
//! carry no numeric semantics here.

use crate::error::{JobSeekError, Result};

/// The closed set of filter categories shown under the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    Experience,
    JobType,
    Salary,
    Education,
}

impl FilterCategory {
    /// All categories, in display order
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::Experience,
        FilterCategory::JobType,
        FilterCategory::Salary,
        FilterCategory::Education,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterCategory::Experience => "Experience",
            FilterCategory::JobType => "Job Type",
            FilterCategory::Salary => "Salary",
            FilterCategory::Education => "Education",
        }
    }

    /// The fixed option vocabulary for this category
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FilterCategory::Experience => {
                &["Entry Level", "Intermediate", "Senior", "Executive"]
            }
            FilterCategory::JobType => &["Full Time", "Part Time", "Contract", "Internship"],
            FilterCategory::Salary => &["$0-$50k", "$50k-$100k", "$100k-$150k", "$150k+"],
            FilterCategory::Education => &["High School", "Bachelor's", "Master's", "PhD"],
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterCategory::Experience => FilterCategory::JobType,
            FilterCategory::JobType => FilterCategory::Salary,
            FilterCategory::Salary => FilterCategory::Education,
            FilterCategory::Education => FilterCategory::Experience,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterCategory::Experience => FilterCategory::Education,
            FilterCategory::JobType => FilterCategory::Experience,
            FilterCategory::Salary => FilterCategory::JobType,
            FilterCategory::Education => FilterCategory::Salary,
        }
    }

    fn index(&self) -> usize {
        match self {
            FilterCategory::Experience => 0,
            FilterCategory::JobType => 1,
            FilterCategory::Salary => 2,
            FilterCategory::Education => 3,
        }
    }
}

/// Per-category sets of selected option labels.
///
/// Selection order is irrelevant; duplicates are impossible because the
/// only mutation is [`SelectionStore::toggle`].
#[derive(Debug, Default, Clone)]
pub struct SelectionStore {
    selected: [Vec<&'static str>; 4],
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle an option within a category: remove it if selected, select it
    /// otherwise. An option outside the category's vocabulary is a
    /// programming error and is rejected rather than stored.
    pub fn toggle(&mut self, category: FilterCategory, option: &str) -> Result<()> {
        let canonical = category
            .options()
            .iter()
            .copied()
            .find(|o| *o == option)
            .ok_or_else(|| JobSeekError::UnknownOption {
                category: category.label(),
                option: option.to_string(),
            })?;

        let set = &mut self.selected[category.index()];
        if let Some(pos) = set.iter().position(|o| *o == canonical) {
            set.remove(pos);
        } else {
            set.push(canonical);
        }
        Ok(())
    }

    pub fn is_selected(&self, category: FilterCategory, option: &str) -> bool {
        self.selected[category.index()].iter().any(|o| *o == option)
    }

    /// Selected options of a category, in vocabulary order
    pub fn selected(&self, category: FilterCategory) -> Vec<&'static str> {
        category
            .options()
            .iter()
            .copied()
            .filter(|o| self.is_selected(category, o))
            .collect()
    }

    /// Number of selected options in a category
    pub fn count(&self, category: FilterCategory) -> usize {
        self.selected[category.index()].len()
    }

    /// Total selections across all categories
    pub fn total(&self) -> usize {
        self.selected.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut store = SelectionStore::new();
        store.toggle(FilterCategory::JobType, "Full Time").unwrap();
        assert!(store.is_selected(FilterCategory::JobType, "Full Time"));
        store.toggle(FilterCategory::JobType, "Full Time").unwrap();
        assert!(!store.is_selected(FilterCategory::JobType, "Full Time"));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn double_toggle_restores_any_starting_set() {
        let mut store = SelectionStore::new();
        store.toggle(FilterCategory::Salary, "$0-$50k").unwrap();
        store.toggle(FilterCategory::Salary, "$150k+").unwrap();
        let before = store.selected(FilterCategory::Salary);

        store.toggle(FilterCategory::Salary, "$50k-$100k").unwrap();
        store.toggle(FilterCategory::Salary, "$50k-$100k").unwrap();

        assert_eq!(store.selected(FilterCategory::Salary), before);
    }

    #[test]
    fn untoggling_one_of_two_leaves_the_other() {
        let mut store = SelectionStore::new();
        store.toggle(FilterCategory::JobType, "Full Time").unwrap();
        store.toggle(FilterCategory::JobType, "Contract").unwrap();
        store.toggle(FilterCategory::JobType, "Full Time").unwrap();
        assert_eq!(store.selected(FilterCategory::JobType), vec!["Contract"]);
    }

    #[test]
    fn categories_are_independent() {
        let mut store = SelectionStore::new();
        store.toggle(FilterCategory::Experience, "Senior").unwrap();
        assert_eq!(store.count(FilterCategory::Experience), 1);
        assert_eq!(store.count(FilterCategory::JobType), 0);
        assert_eq!(store.count(FilterCategory::Salary), 0);
        assert_eq!(store.count(FilterCategory::Education), 0);
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut store = SelectionStore::new();
        let err = store.toggle(FilterCategory::Education, "Bootcamp");
        assert!(matches!(
            err,
            Err(JobSeekError::UnknownOption { category: "Education", .. })
        ));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn selected_reports_vocabulary_order() {
        let mut store = SelectionStore::new();
        store.toggle(FilterCategory::Experience, "Executive").unwrap();
        store.toggle(FilterCategory::Experience, "Entry Level").unwrap();
        assert_eq!(
            store.selected(FilterCategory::Experience),
            vec!["Entry Level", "Executive"]
        );
    }

    #[test]
    fn category_cycling_wraps() {
        assert_eq!(FilterCategory::Education.next(), FilterCategory::Experience);
        assert_eq!(FilterCategory::Experience.prev(), FilterCategory::Education);
        let mut cat = FilterCategory::Experience;
        for _ in 0..4 {
            cat = cat.next();
        }
        assert_eq!(cat, FilterCategory::Experience);
    }
}
