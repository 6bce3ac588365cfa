// Host-side tests for the project catalog: lookup, filtering, data integrity.

use site_core::{
    filter_projects, filter_slice, find_project, projects, Category, CategoryFilter, Project,
};

#[test]
fn lookup_by_present_id_returns_matching_record() {
    let project = find_project(1).expect("id 1 is in the catalog");
    assert_eq!(project.id, 1);
}

#[test]
fn lookup_by_absent_id_returns_none() {
    assert!(find_project(9999).is_none());
    assert!(find_project(0).is_none());
}

#[test]
fn ids_are_unique_and_stable() {
    let mut seen = std::collections::HashSet::new();
    for project in projects() {
        assert!(seen.insert(project.id), "duplicate id {}", project.id);
    }
}

#[test]
fn every_record_is_complete() {
    for project in projects() {
        assert!(!project.title.is_empty());
        assert!(!project.label.is_empty());
        assert!(!project.client.is_empty());
        assert!(!project.location.is_empty());
        assert!(!project.year.is_empty());
        assert!(!project.status.is_empty());
        assert!(!project.long_description.is_empty());
        assert!(!project.challenges.is_empty());
        assert!(!project.solutions.is_empty());
    }
}

#[test]
fn default_filter_is_all_and_returns_the_full_catalog() {
    assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    assert_eq!(filter_projects(CategoryFilter::All).len(), projects().len());
}

#[test]
fn filtering_preserves_catalog_order() {
    let filtered = filter_projects(CategoryFilter::Only(Category::Topography));
    let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn per_category_filters_partition_the_catalog() {
    let total: usize = Category::ALL
        .into_iter()
        .map(|c| filter_projects(CategoryFilter::Only(c)).len())
        .sum();
    assert_eq!(total, projects().len());
}

#[test]
fn selecting_all_after_a_filter_restores_the_full_catalog() {
    let narrowed = filter_projects(CategoryFilter::Only(Category::Gis));
    assert!(narrowed.len() < projects().len());
    let restored = filter_projects(CategoryFilter::All);
    assert_eq!(restored.len(), projects().len());
    let ids: Vec<u32> = restored.iter().map(|p| p.id).collect();
    let expected: Vec<u32> = projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn zero_match_filter_yields_an_empty_set_not_an_error() {
    fn record(id: u32, category: Category) -> Project {
        Project {
            id,
            title: "title",
            category,
            label: "label",
            image: "/assets/none.jpg",
            client: "client",
            location: "location",
            year: "2024",
            status: "Delivered",
            long_description: "description",
            challenges: &["challenge"],
            solutions: &["solution"],
        }
    }
    let items = [
        record(1, Category::Topography),
        record(2, Category::Cadastre),
    ];
    let none = filter_slice(&items, CategoryFilter::Only(Category::Gis));
    assert!(none.is_empty());
    // Reapplying the default filter restores everything.
    assert_eq!(filter_slice(&items, CategoryFilter::All).len(), items.len());
}

#[test]
fn category_slugs_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_slug(category.slug()), Some(category));
    }
    assert_eq!(Category::from_slug("nonsense"), None);
}
