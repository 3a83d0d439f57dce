//! Property tests for index ordering and filtering.

#![allow(clippy::unwrap_used)]

use inkpost_index::{ContentIndex, MemorySource};
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = Option<String>> {
    prop::option::of((2000u32..2030, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        format!("{y:04}-{m:02}-{d:02}")
    }))
}

fn arb_category() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["Rust", "rust", "RUST", "Go", "misc"]))
        .prop_map(|c| c.map(str::to_string))
}

fn document(date: &Option<String>, category: &Option<String>) -> String {
    let mut header = String::new();
    if let Some(date) = date {
        header.push_str(&format!("date: {date}\n"));
    }
    if let Some(category) = category {
        header.push_str(&format!("category: {category}\n"));
    }
    format!("---\n{header}---\nBody.")
}

fn build(items: &[(Option<String>, Option<String>)]) -> ContentIndex {
    let source = items
        .iter()
        .enumerate()
        .fold(MemorySource::new(), |source, (i, (date, category))| {
            source.with_document(format!("post{i:03}.md"), document(date, category))
        });
    let index = ContentIndex::new(source);
    tokio_test::block_on(index.load()).unwrap();
    index
}

proptest! {
    #[test]
    fn list_is_newest_first_with_undated_last(
        items in prop::collection::vec((arb_date(), arb_category()), 0..30)
    ) {
        let index = build(&items);
        let list = index.list_all();
        prop_assert_eq!(list.len(), items.len());

        for pair in list.windows(2) {
            match (pair[0].date, pair[1].date) {
                (Some(a), Some(b)) => prop_assert!(a >= b),
                (None, Some(_)) => prop_assert!(false, "undated before dated"),
                _ => {}
            }
        }
    }

    #[test]
    fn category_filter_is_case_insensitive_subsequence(
        items in prop::collection::vec((arb_date(), arb_category()), 0..30)
    ) {
        let index = build(&items);
        let all = index.list_all();
        let filtered = index.list_by_category("rUsT");

        let expected: Vec<_> = all
            .iter()
            .filter(|m| m.category.as_deref().is_some_and(|c| c.eq_ignore_ascii_case("rust")))
            .map(|m| m.slug.clone())
            .collect();
        let actual: Vec<_> = filtered.iter().map(|m| m.slug.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn related_respects_limit_and_exclusion(
        items in prop::collection::vec((arb_date(), arb_category()), 1..30),
        limit in 0usize..6,
    ) {
        let index = build(&items);
        let first = index.list_all()[0].clone();
        let related = index.get_related(first.category.as_deref(), &first.slug, limit);

        prop_assert!(related.len() <= limit);
        prop_assert!(related.iter().all(|m| m.slug != first.slug));
        if first.category.is_none() {
            prop_assert!(related.is_empty());
        }
    }
}
