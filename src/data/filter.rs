use crate::data::Project;

pub const ALL_CATEGORIES: &str = "all";

/// Multi-select category filter over projects.
///
/// The selection is never empty: clearing the last category falls back to
/// [`ALL_CATEGORIES`], and picking a concrete category drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    selected: Vec<String>,
}

impl CategoryFilter {
    pub fn new() -> Self {
        Self {
            selected: vec![ALL_CATEGORIES.to_string()],
        }
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_all(&self) -> bool {
        self.selected.iter().any(|c| c == ALL_CATEGORIES)
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.iter().any(|c| c == category)
    }

    pub fn toggle(&mut self, category: &str) {
        if category == ALL_CATEGORIES {
            self.reset();
            return;
        }

        self.selected.retain(|c| c != ALL_CATEGORIES);

        if self.is_selected(category) {
            self.selected.retain(|c| c != category);
        } else {
            self.selected.push(category.to_string());
        }

        if self.selected.is_empty() {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.selected = vec![ALL_CATEGORIES.to_string()];
    }

    pub fn matches(&self, project: &Project) -> bool {
        if self.is_all() {
            return true;
        }

        match &project.categories {
            Some(categories) => categories.iter().any(|c| self.is_selected(c)),
            None => false,
        }
    }

    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = Self::new();
        for category in iter {
            filter.toggle(category.as_ref());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u64, categories: Option<&[&str]>) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: None,
            details: None,
            image: None,
            tags: vec![],
            categories: categories.map(|c| c.iter().map(|s| s.to_string()).collect()),
            features: vec![],
            version: None,
            downloads: None,
            download_link: None,
            video_link: None,
        }
    }

    #[test]
    fn test_starts_with_all() {
        let filter = CategoryFilter::new();
        assert_eq!(filter.selected(), &["all".to_string()]);
        assert!(filter.is_all());
    }

    #[test]
    fn test_toggle_sequence() {
        let mut filter = CategoryFilter::new();

        filter.toggle("Maps");
        assert_eq!(filter.selected(), &["Maps".to_string()]);

        filter.toggle("Mods");
        assert_eq!(filter.selected(), &["Maps".to_string(), "Mods".to_string()]);

        filter.toggle("Maps");
        assert_eq!(filter.selected(), &["Mods".to_string()]);

        // Clearing the last category reverts to all
        filter.toggle("Mods");
        assert!(filter.is_all());

        filter.toggle("Maps");
        filter.toggle("all");
        assert_eq!(filter.selected(), &["all".to_string()]);
    }

    #[test]
    fn test_apply() {
        let projects = vec![
            project(1, Some(&["Maps"])),
            project(2, Some(&["Mods", "Tools"])),
            project(3, None),
            project(4, Some(&[])),
        ];

        let all: Vec<u64> = CategoryFilter::new().apply(&projects).iter().map(|p| p.id).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);

        let filter: CategoryFilter = ["Tools", "Maps"].into_iter().collect();
        let picked: Vec<u64> = filter.apply(&projects).iter().map(|p| p.id).collect();
        assert_eq!(picked, vec![1, 2]);

        let filter: CategoryFilter = ["Shaders"].into_iter().collect();
        assert!(filter.apply(&projects).is_empty());
    }
}
