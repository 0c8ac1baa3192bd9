//! Tests for the derivation layer: filter/sort, comment threads, author
//! aggregates.

use chrono::NaiveDate;
use metodika_catalog::Catalog;
use metodika_model::{Category, CategoryFilter, MaterialId, SortKey};
use proptest::prelude::*;

fn seeded() -> Catalog {
    Catalog::load().expect("seed tables are valid")
}

fn ids(materials: &[&metodika_model::Material]) -> Vec<u32> {
    materials.iter().map(|m| m.id.0).collect()
}

#[test]
fn search_for_critical_thinking_finds_one_material() {
    let catalog = seeded();
    let found = catalog.filter_materials("критическ", CategoryFilter::All, SortKey::Date);
    assert_eq!(ids(&found), vec![3]);
}

#[test]
fn category_narrows_the_same_query_to_nothing() {
    let catalog = seeded();
    let found = catalog.filter_materials(
        "критическ",
        CategoryFilter::Only(Category::Mathematics),
        SortKey::Date,
    );
    assert!(found.is_empty());
}

#[test]
fn empty_query_returns_the_whole_table() {
    let catalog = seeded();
    let found = catalog.filter_materials("", CategoryFilter::All, SortKey::Date);
    assert_eq!(found.len(), catalog.materials().len());
}

#[test]
fn sort_is_descending_per_key() {
    let catalog = seeded();
    let by_date = catalog.filter_materials("", CategoryFilter::All, SortKey::Date);
    assert_eq!(ids(&by_date), vec![1, 2, 3, 4]);

    let by_likes = catalog.filter_materials("", CategoryFilter::All, SortKey::Likes);
    assert_eq!(ids(&by_likes), vec![4, 3, 1, 2]);

    let by_downloads = catalog.filter_materials("", CategoryFilter::All, SortKey::Downloads);
    assert_eq!(ids(&by_downloads), vec![4, 3, 2, 1]);

    let by_comments = catalog.filter_materials("", CategoryFilter::All, SortKey::Comments);
    assert_eq!(ids(&by_comments), vec![4, 3, 2, 1]);
}

#[test]
fn search_is_case_insensitive() {
    let catalog = seeded();
    let found = catalog.filter_materials("ПРОЕКТНАЯ", CategoryFilter::All, SortKey::Date);
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn comment_thread_keeps_insertion_order() {
    let catalog = seeded();
    let thread = catalog.comments_for(MaterialId(1));
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].id, 1);
    assert_eq!(thread[1].id, 2);
    assert!(catalog.comments_for(MaterialId(2)).is_empty());
}

#[test]
fn appending_a_comment_grows_only_that_thread() {
    let mut catalog = seeded();
    let today = NaiveDate::from_ymd_opt(2024, 10, 20).expect("valid date");
    let before: Vec<usize> = catalog
        .materials()
        .iter()
        .map(|m| catalog.comments_for(m.id).len())
        .collect();

    let appended = catalog
        .add_comment(MaterialId(1), "Отличный урок!", today)
        .expect("non-empty draft is accepted");
    assert_eq!(appended.id, 3);
    assert_eq!(appended.author, "Вы");
    assert_eq!(appended.posted, today);

    let after: Vec<usize> = catalog
        .materials()
        .iter()
        .map(|m| catalog.comments_for(m.id).len())
        .collect();
    assert_eq!(after[0], before[0] + 1);
    assert_eq!(&after[1..], &before[1..]);
}

#[test]
fn whitespace_draft_is_rejected() {
    let mut catalog = seeded();
    let today = NaiveDate::from_ymd_opt(2024, 10, 20).expect("valid date");
    let before = catalog.comments_for(MaterialId(1)).len();

    assert!(catalog.add_comment(MaterialId(1), "", today).is_none());
    assert!(catalog.add_comment(MaterialId(1), "   \n\t", today).is_none());
    assert_eq!(catalog.comments_for(MaterialId(1)).len(), before);
}

#[test]
fn comment_for_unknown_material_is_dropped() {
    let mut catalog = seeded();
    let today = NaiveDate::from_ymd_opt(2024, 10, 20).expect("valid date");
    assert!(catalog.add_comment(MaterialId(99), "Текст", today).is_none());
}

#[test]
fn comment_text_is_stored_verbatim() {
    let mut catalog = seeded();
    let today = NaiveDate::from_ymd_opt(2024, 10, 20).expect("valid date");
    let appended = catalog
        .add_comment(MaterialId(1), "  Спасибо за материал!  ", today)
        .expect("draft with surrounding whitespace is accepted");
    assert_eq!(appended.text, "  Спасибо за материал!  ");
}

#[test]
fn author_profile_joins_materials_and_sums_downloads() {
    let catalog = seeded();
    let profile = catalog
        .author_profile("Иванова М.П.")
        .expect("seeded author has a profile");
    assert_eq!(ids(&profile.materials), vec![1]);
    assert_eq!(profile.total_downloads, 156);
}

#[test]
fn author_profile_keeps_denormalized_stats() {
    let catalog = seeded();
    let profile = catalog
        .author_profile("Козлов Д.И.")
        .expect("seeded author has a profile");
    // Live-computed from the material table.
    assert_eq!(profile.total_downloads, 412);
    // Static source-data fields, deliberately not recomputed.
    assert_eq!(profile.author.materials_count, 20);
    assert_eq!(profile.author.total_likes, 891);
}

#[test]
fn unknown_author_has_no_profile() {
    let catalog = seeded();
    assert!(catalog.author_profile("Неизвестный А.А.").is_none());
}

fn any_filter() -> impl Strategy<Value = CategoryFilter> {
    proptest::sample::select(CategoryFilter::all())
}

fn any_sort() -> impl Strategy<Value = SortKey> {
    proptest::sample::select(SortKey::all().to_vec())
}

proptest! {
    /// The filtered set is a subset of the table and exactly the elements
    /// satisfying both predicates.
    #[test]
    fn filter_is_exactly_the_matching_subset(
        query in "[а-яА-Яa-z ]{0,12}",
        filter in any_filter(),
        sort in any_sort(),
    ) {
        let catalog = seeded();
        let found = catalog.filter_materials(&query, filter, sort);
        let found_ids: Vec<u32> = found.iter().map(|m| m.id.0).collect();

        for material in &found {
            prop_assert!(filter.matches(material.category));
            prop_assert!(material.matches_search(&query));
        }
        for material in catalog.materials() {
            let matches = filter.matches(material.category) && material.matches_search(&query);
            prop_assert_eq!(found_ids.contains(&material.id.0), matches);
        }
    }

    /// Changing the sort key never changes membership, only order.
    #[test]
    fn sort_key_preserves_membership(
        query in "[а-яА-Яa-z ]{0,12}",
        filter in any_filter(),
    ) {
        let catalog = seeded();
        let mut baseline: Vec<u32> = catalog
            .filter_materials(&query, filter, SortKey::Date)
            .iter()
            .map(|m| m.id.0)
            .collect();
        baseline.sort_unstable();

        for sort in SortKey::all() {
            let mut found: Vec<u32> = catalog
                .filter_materials(&query, filter, *sort)
                .iter()
                .map(|m| m.id.0)
                .collect();
            found.sort_unstable();
            prop_assert_eq!(&found, &baseline);
        }
    }
}
