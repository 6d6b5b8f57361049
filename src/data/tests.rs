//! Tests for the rating store and item catalog.

pub(crate) use super::*;

fn item(id: ItemId, dim: usize) -> Item {
    Item::new(
        id,
        format!("item {id}"),
        "a description",
        Vector::from_vec(vec![1.0; dim]),
    )
}

#[test]
fn test_store_from_records() {
    let store = RatingStore::from_records([
        Rating::new(1, 10, 5.0),
        Rating::new(1, 20, 2.0),
        Rating::new(2, 10, 3.0),
    ]);
    assert_eq!(store.n_users(), 2);
    assert_eq!(store.n_ratings(), 3);
    assert!(store.contains_user(1));
    assert!(!store.contains_user(3));
}

#[test]
fn test_store_duplicate_last_write_wins() {
    let store = RatingStore::from_records([Rating::new(1, 10, 2.0), Rating::new(1, 10, 5.0)]);
    assert_eq!(store.n_ratings(), 1);
    let ratings = store.user_ratings(1).expect("user 1 exists");
    assert!((ratings[&10] - 5.0).abs() < 1e-6);
}

#[test]
fn test_store_item_ids_sorted_union() {
    let store = RatingStore::from_records([
        Rating::new(2, 30, 1.0),
        Rating::new(1, 10, 1.0),
        Rating::new(2, 10, 1.0),
    ]);
    let ids: Vec<ItemId> = store.item_ids().into_iter().collect();
    assert_eq!(ids, vec![10, 30]);
}

#[test]
fn test_store_empty() {
    let store = RatingStore::new();
    assert!(store.is_empty());
    assert_eq!(store.n_ratings(), 0);
    assert!(store.user_ratings(1).is_none());
}

#[test]
fn test_catalog_insert_and_lookup() {
    let catalog = ItemCatalog::from_items([item(10, 3), item(20, 3)]).expect("uniform dims");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.embedding_dim(), Some(3));
    assert!(catalog.get(10).is_some());
    assert!(catalog.get(99).is_none());
    assert_eq!(catalog.embedding(20).map(Vector::len), Some(3));
}

#[test]
fn test_catalog_rejects_dimension_mismatch() {
    let result = ItemCatalog::from_items([item(10, 3), item(20, 4)]);
    assert!(matches!(
        result,
        Err(RecomendarError::DimensionMismatch {
            expected: 3,
            actual: 4
        })
    ));
}

#[test]
fn test_catalog_replaces_same_id() {
    let mut catalog = ItemCatalog::new();
    catalog.insert(item(10, 2)).expect("first insert");
    let replacement = Item::new(10, "new title", "new text", Vector::from_slice(&[0.5, 0.5]));
    catalog.insert(replacement).expect("same dimension");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(10).map(|i| i.title.as_str()), Some("new title"));
}

#[test]
fn test_catalog_iter_ascending() {
    let catalog =
        ItemCatalog::from_items([item(30, 2), item(10, 2), item(20, 2)]).expect("uniform dims");
    let ids: Vec<ItemId> = catalog.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_rating_serde_roundtrip() {
    let r = Rating::new(7, 42, 3.5);
    let json = serde_json::to_string(&r).expect("serialize");
    let back: Rating = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(r, back);
}

#[test]
fn test_catalog_serde_roundtrip() {
    let catalog = ItemCatalog::from_items([item(10, 2)]).expect("uniform dims");
    let json = serde_json::to_string(&catalog).expect("serialize");
    let back: ItemCatalog = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(catalog, back);
}
