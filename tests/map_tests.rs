//! Unit tests for Map and the Dictionary operations.
//!
//! Covers insertion order, relative insertion, set algebra on values and
//! keys, sorting, grouping and re-keying.

use kuria_collections::map;
use kuria_collections::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;

fn letters() -> Map<&'static str, i32> {
    map! { "a" => 1, "b" => 2, "c" => 3 }
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn map_from_iterable_keeps_first_position_last_value() {
    let map = Map::from_iterable([("x", 1), ("y", 2), ("x", 3)]);
    assert_eq!(map.to_pairs(), vec![("x", 3), ("y", 2)]);
}

#[rstest]
fn map_combine_zips_keys_and_values() {
    let map: Map<&str, i32> = Map::combine(["one", "two"], [1, 2]);
    assert_eq!(map.to_pairs(), vec![("one", 1), ("two", 2)]);
}

#[rstest]
fn map_try_combine_reports_lengths() {
    let error = Map::<&str, i32>::try_combine(["one"], [1, 2]).unwrap_err();
    assert_eq!(error, CollectionError::LengthMismatch { keys: 1, values: 2 });
}

#[rstest]
#[should_panic(expected = "Cannot combine 2 keys with 1 values")]
fn map_combine_panics_on_mismatch() {
    let _: Map<&str, i32> = Map::combine(["one", "two"], [1]);
}

// =============================================================================
// Read
// =============================================================================

#[rstest]
fn map_lookups() {
    let map = letters();
    assert!(map.has(&"b"));
    assert!(!map.has(&"z"));
    assert!(map.contains(&3));
    assert_eq!(map.find(&2).copied(), Maybe::Some("b"));
    assert!(map.find(&9).is_none());
    assert_eq!(map.find_using(|value| *value > 1).copied(), Maybe::Some("b"));
    assert_eq!(map.get(&"c").copied(), Maybe::Some(3));
}

#[rstest]
fn map_ends() {
    let map = letters();
    assert_eq!(map.first().copied(), Maybe::Some(1));
    assert_eq!(map.last().copied(), Maybe::Some(3));
    assert_eq!(map.first_key().copied(), Maybe::Some("a"));
    assert_eq!(map.last_key().copied(), Maybe::Some("c"));

    let empty: Map<&str, i32> = Map::new();
    assert!(empty.first().is_none());
    assert!(empty.last_key().is_none());
    assert!(empty.random().is_none());
}

#[rstest]
fn map_random_draws_a_member() {
    let mut rng = StdRng::seed_from_u64(3);
    let map = letters();
    let value = map.random_with(&mut rng).copied().unwrap();
    assert!(map.contains(&value));
    let key = map.random_key_with(&mut rng).copied().unwrap();
    assert!(map.has(&key));
}

#[rstest]
fn map_keys_and_values_in_insertion_order() {
    let map = letters();
    assert_eq!(map.keys().to_vec(), vec!["a", "b", "c"]);
    assert_eq!(map.values().to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn map_set_updates_in_place() {
    let mut map = letters();
    map.set("a", 10);
    map.set("d", 4);
    assert_eq!(map.to_pairs(), vec![("a", 10), ("b", 2), ("c", 3), ("d", 4)]);
}

#[rstest]
fn map_set_multiple_and_set_pairs() {
    let mut map = letters();
    map.set_multiple(["b", "z"], 0);
    assert_eq!(map.to_pairs(), vec![("a", 1), ("b", 0), ("c", 3), ("z", 0)]);

    map.set_pairs([("q", 7)]);
    assert_eq!(map.to_pairs(), vec![("q", 7)]);
}

#[rstest]
#[case("b", vec!["a", "x", "y", "b", "c"])]
#[case("a", vec!["x", "y", "a", "b", "c"])]
#[case("missing", vec!["x", "y", "a", "b", "c"])]
fn map_insert_before(#[case] anchor: &'static str, #[case] expected: Vec<&str>) {
    let mut map = letters();
    map.insert_before(&anchor, [("x", 8), ("y", 9)]);
    assert_eq!(map.keys().to_vec(), expected);
}

#[rstest]
#[case("b", vec!["a", "b", "x", "y", "c"])]
#[case("c", vec!["a", "b", "c", "x", "y"])]
#[case("missing", vec!["a", "b", "c", "x", "y"])]
fn map_insert_after(#[case] anchor: &'static str, #[case] expected: Vec<&str>) {
    let mut map = letters();
    map.insert_after(&anchor, [("x", 8), ("y", 9)]);
    assert_eq!(map.keys().to_vec(), expected);
}

#[rstest]
fn map_add_remove_clear() {
    let mut map = letters();
    map.add([("c", 30), ("d", 4)]);
    assert_eq!(map.to_pairs(), vec![("a", 1), ("b", 2), ("c", 30), ("d", 4)]);

    map.remove(&["a", "missing", "c"]);
    assert_eq!(map.to_pairs(), vec![("b", 2), ("d", 4)]);
    assert_eq!(map.get(&"d").copied(), Maybe::Some(4));

    map.clear();
    assert!(map.is_empty());
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn map_reduce_sees_keys_and_values() {
    let joined = letters().reduce(|carry, key, value| format!("{carry}{key}{value}"), String::new());
    assert_eq!(joined, "a1b2c3");
}

#[rstest]
fn map_slice_chunk_split() {
    let map = letters();
    assert_eq!(map.slice(1, None).keys().to_vec(), vec!["b", "c"]);
    assert_eq!(map.slice(-1, None).keys().to_vec(), vec!["c"]);

    let chunks = map.chunk(2);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].to_pairs(), vec![("c", 3)]);

    assert_eq!(map.split(3).len(), 3);
    assert!(map.split(0).is_empty());
}

#[rstest]
fn map_reverse_and_shuffle_keep_pairs() {
    let map = letters();
    assert_eq!(map.reverse().keys().to_vec(), vec!["c", "b", "a"]);

    let mut rng = StdRng::seed_from_u64(11);
    let mut shuffled = map.shuffle_with(&mut rng).to_pairs();
    shuffled.sort_unstable();
    assert_eq!(shuffled, map.to_pairs());
}

#[rstest]
fn map_pick_keeps_relative_order() {
    let map = map! { 1 => 'a', 2 => 'b', 3 => 'c', 4 => 'd', 5 => 'e' };
    let mut rng = StdRng::seed_from_u64(9);
    let picked = map.pick_with(3, &mut rng);
    let keys = picked.keys().to_vec();
    assert_eq!(keys.len(), 3);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(map.pick(10), map);
}

#[rstest]
fn map_filter_apply_walk() {
    let map = letters();
    assert_eq!(map.filter(|_, value| value % 2 == 1).keys().to_vec(), vec!["a", "c"]);
    assert_eq!(
        map.apply(|key, value| format!("{key}={value}")).values().to_vec(),
        vec!["a=1", "b=2", "c=3"]
    );

    let mut seen = Vec::new();
    map.walk(|key, _| seen.push(*key));
    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[rstest]
fn map_merge_upserts_in_order() {
    let merged = letters().merge([vec![("b", 20), ("d", 4)], vec![("a", 10)]]);
    assert_eq!(merged.to_pairs(), vec![("a", 10), ("b", 20), ("c", 3), ("d", 4)]);
}

#[rstest]
fn map_flip_uses_text_form() {
    let map = map! { "a" => 1, "b" => 2, "c" => 1 };
    assert_eq!(
        map.flip().to_pairs(),
        vec![("1".to_owned(), "c"), ("2".to_owned(), "b")]
    );
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn map_intersect_and_diff_compare_values_under_same_key() {
    let map = letters();
    let other = vec![("a", 1), ("b", 20), ("z", 3)];
    assert_eq!(map.intersect([other.clone()]).keys().to_vec(), vec!["a"]);
    assert_eq!(map.diff([other]).keys().to_vec(), vec!["b", "c"]);
}

#[rstest]
fn map_diff_using_comparator() {
    let map = letters();
    let close = map.intersect_using(
        |left, right| (left / 10).cmp(&(right / 10)),
        [vec![("a", 9), ("b", 12), ("c", 0)]],
    );
    assert_eq!(close.keys().to_vec(), vec!["a", "c"]);
    let far = map.diff_using(|left, right| left.cmp(right), [vec![("b", 2)]]);
    assert_eq!(far.keys().to_vec(), vec!["a", "c"]);
}

#[rstest]
fn map_key_set_algebra() {
    let map = letters();
    let keys_only = vec![("c", ()), ("a", ())];
    assert_eq!(map.intersect_keys([keys_only.clone()]).keys().to_vec(), vec!["a", "c"]);
    assert_eq!(map.diff_keys([keys_only]).keys().to_vec(), vec!["b"]);

    let upper = vec![("B", 0.5)];
    let ignoring_case = |left: &&str, right: &&str| left.to_lowercase().cmp(&right.to_lowercase());
    assert_eq!(
        map.intersect_keys_using(ignoring_case, [upper.clone()]).keys().to_vec(),
        vec!["b"]
    );
    assert_eq!(
        map.diff_keys_using(ignoring_case, [upper]).keys().to_vec(),
        vec!["a", "c"]
    );
}

#[rstest]
fn map_set_algebra_with_nothing_to_compare_is_empty() {
    let none: [Vec<(&str, i32)>; 0] = [];
    assert!(letters().intersect(none.clone()).is_empty());
    assert!(letters().diff(none).is_empty());

    let empty: Map<&str, i32> = Map::new();
    assert!(empty.diff([vec![("a", 1)]]).is_empty());
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
#[case(SortMode::Regular, false, vec!["c", "a", "b"])]
#[case(SortMode::Regular, true, vec!["b", "a", "c"])]
#[case(SortMode::String, false, vec!["c", "a", "b"])]
#[case(SortMode::Natural, false, vec!["b", "c", "a"])]
#[case(SortMode::Natural, true, vec!["a", "c", "b"])]
fn map_sort_by_value(#[case] mode: SortMode, #[case] reverse: bool, #[case] expected: Vec<&str>) {
    let map = map! { "a" => "v20", "b" => "v3", "c" => "v10" };
    assert_eq!(map.sort(mode, reverse).keys().to_vec(), expected);
}

#[rstest]
fn map_sort_keys() {
    let map = map! { "b" => 1, "C" => 2, "a" => 3 };
    assert_eq!(map.sort_keys(SortMode::String, false).keys().to_vec(), vec!["C", "a", "b"]);
    assert_eq!(
        map.sort_keys(SortMode::StringCaseInsensitive, false).keys().to_vec(),
        vec!["a", "b", "C"]
    );
    assert_eq!(
        map.sort_keys_by(|left, right| right.cmp(left)).keys().to_vec(),
        vec!["b", "a", "C"]
    );
}

#[rstest]
fn map_sort_by_is_stable() {
    let map = map! { "x" => 2, "y" => 1, "z" => 2, "w" => 1 };
    let sorted = map.sort_by(|left, right| left.cmp(right));
    assert_eq!(sorted.keys().to_vec(), vec!["y", "w", "x", "z"]);
}

// =============================================================================
// Grouping and re-keying
// =============================================================================

#[rstest]
fn map_group_by_value() {
    let map = map! { "a" => 1, "b" => 2, "c" => 1 };
    let groups = map.group(|_, value| *value);
    assert_eq!(groups.keys().to_vec(), vec![1, 2]);
    assert_eq!(groups[&1].to_pairs(), vec![("a", 1), ("c", 1)]);
    assert_eq!(groups[&2].to_pairs(), vec![("b", 2)]);
}

#[rstest]
fn map_remap_and_rebuild() {
    let map = letters();
    let remapped = map.remap(|key, value| format!("{key}{value}"));
    assert_eq!(remapped.keys().to_vec(), vec!["a1", "b2", "c3"]);

    let rebuilt = map.rebuild(|key, value| [(*value, key.to_uppercase())]);
    assert_eq!(rebuilt.get(&2).cloned(), Maybe::Some("B".to_owned()));
}

#[rstest]
fn map_column_and_index_by_with() {
    let map = map! { "a" => (1, Some('x')), "b" => (2, None) };
    assert_eq!(map.column_with(|(_, tag)| *tag).to_pairs(), vec![("a", 'x')]);
    assert_eq!(map.index_by_with(|(id, _)| Some(*id)).keys().to_vec(), vec![1, 2]);
}

// =============================================================================
// Standard traits
// =============================================================================

#[rstest]
fn map_equality_is_order_sensitive() {
    assert_eq!(letters(), map! { "a" => 1, "b" => 2, "c" => 3 });
    assert_ne!(letters(), map! { "c" => 3, "b" => 2, "a" => 1 });
}

#[rstest]
fn map_display() {
    assert_eq!(letters().to_string(), "{a: 1, b: 2, c: 3}");
    assert_eq!(Map::<i32, i32>::new().to_string(), "{}");
}

#[rstest]
fn map_into_specialized_kinds() {
    let scalars: ScalarMap<&str, i32> = letters().into_kind();
    assert_eq!(scalars.values().sum(), Number::Int(6));
    assert_eq!(letters().into_scalars().values().implode("-"), "1-2-3");
}
