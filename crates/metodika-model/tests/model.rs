//! Tests for metodika-model types.

use chrono::NaiveDate;
use metodika_model::{Category, CategoryFilter, Material, MaterialId, SortKey};

fn make_material(title: &str, description: &str) -> Material {
    Material {
        id: MaterialId(1),
        title: title.to_string(),
        description: description.to_string(),
        category: Category::Mathematics,
        author: "Иванова М.П.".to_string(),
        author_avatar: "/placeholder.svg".to_string(),
        published: NaiveDate::from_ymd_opt(2024, 10, 15).expect("valid date"),
        likes: 42,
        comment_count: 8,
        downloads: 156,
    }
}

#[test]
fn search_is_case_insensitive_for_cyrillic() {
    let material = make_material("Интерактивные методы", "Сборник заданий");
    assert!(material.matches_search("ИНТЕРАКТИВНЫЕ"));
    assert!(material.matches_search("сборник"));
    assert!(!material.matches_search("физика"));
}

#[test]
fn empty_query_matches_everything() {
    let material = make_material("Интерактивные методы", "Сборник заданий");
    assert!(material.matches_search(""));
}

#[test]
fn search_checks_title_and_description() {
    let material = make_material("Проектная деятельность", "Методические рекомендации");
    assert!(material.matches_search("проектная"));
    assert!(material.matches_search("рекомендации"));
}

#[test]
fn filter_options_start_with_sentinel() {
    let options = CategoryFilter::all();
    assert_eq!(options[0], CategoryFilter::All);
    assert_eq!(options.len(), Category::all().len() + 1);
}

#[test]
fn filter_round_trips_through_labels() {
    for option in CategoryFilter::all() {
        let parsed: CategoryFilter = option.as_str().parse().expect("parse filter label");
        assert_eq!(parsed, option);
    }
}

#[test]
fn sort_keys_have_distinct_labels() {
    let labels: Vec<_> = SortKey::all().iter().map(|k| k.label()).collect();
    let mut dedup = labels.clone();
    dedup.sort_unstable();
    dedup.dedup();
    assert_eq!(dedup.len(), labels.len());
    assert_eq!(SortKey::default(), SortKey::Date);
}
