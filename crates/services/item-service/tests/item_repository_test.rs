//! Item repository integration tests against in-memory SQLite.

mod support;

use common::AppError;
use domain::{Item, ItemSearch, ItemUpdate};
use item_service_lib::repository::ItemRepository;

use support::test_store;

#[tokio::test]
async fn test_save_find_and_list_scenario() {
    let repo = test_store().await;

    let saved = repo.save(Item::new("book", Some(10000), None)).await.unwrap();
    assert_eq!(saved.id, Some(1));

    let found = repo.find_by_id(1).await.unwrap();
    assert_eq!(found, Some(Item::new("book", Some(10000), None).with_id(1)));

    assert_eq!(repo.find_by_id(99).await.unwrap(), None);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![saved]);
}

#[tokio::test]
async fn test_save_then_find_returns_equal_item() {
    let repo = test_store().await;

    for (name, price, quantity) in [("pen", Some(1500), Some(3)), ("cup", None, None)] {
        let saved = repo.save(Item::new(name, price, quantity)).await.unwrap();
        let id = saved.id.expect("id assigned on insert");
        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(saved));
    }
}

#[tokio::test]
async fn test_find_unknown_id_is_absent() {
    let repo = test_store().await;
    assert_eq!(repo.find_by_id(12345).await.unwrap(), None);
    assert!(!repo.exists_by_id(12345).await.unwrap());
}

#[tokio::test]
async fn test_save_with_existing_id_overwrites() {
    let repo = test_store().await;

    let saved = repo.save(Item::new("book", Some(10000), Some(1))).await.unwrap();
    let id = saved.id.unwrap();

    let overwritten = repo
        .save(Item::new("notebook", Some(2000), Some(5)).with_id(id))
        .await
        .unwrap();

    assert_eq!(overwritten.id, Some(id));
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(
        repo.find_by_id(id).await.unwrap(),
        Some(Item::new("notebook", Some(2000), Some(5)).with_id(id))
    );
}

#[tokio::test]
async fn test_save_with_unknown_id_is_not_found() {
    let repo = test_store().await;

    let result = repo.save(Item::new("ghost", None, None).with_id(77)).await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_find_all_tracks_saves_and_deletes() {
    let repo = test_store().await;

    let a = repo.save(Item::new("a", Some(1), None)).await.unwrap();
    let b = repo.save(Item::new("b", Some(2), None)).await.unwrap();
    let c = repo.save(Item::new("c", Some(3), None)).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap().len(), 3);

    assert!(repo.delete_by_id(b.id.unwrap()).await.unwrap());
    let remaining = repo.find_all().await.unwrap();

    assert_eq!(remaining, vec![a, c]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_missing_item_reports_false() {
    let repo = test_store().await;
    assert!(!repo.delete_by_id(5).await.unwrap());
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let repo = test_store().await;
    let id = repo
        .save(Item::new("book", Some(10000), Some(10)))
        .await
        .unwrap()
        .id
        .unwrap();

    let updated = repo
        .update(
            id,
            ItemUpdate {
                item_name: "magazine".to_string(),
                price: Some(7000),
                quantity: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated, Item::new("magazine", Some(7000), None).with_id(id));
    assert_eq!(repo.find_by_id(id).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let repo = test_store().await;

    let result = repo
        .update(
            3,
            ItemUpdate {
                item_name: "nothing".to_string(),
                price: None,
                quantity: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_find_matching_filters() {
    let repo = test_store().await;
    let book = repo.save(Item::new("book", Some(10000), None)).await.unwrap();
    let notebook = repo.save(Item::new("notebook", Some(3000), None)).await.unwrap();
    let pen = repo.save(Item::new("pen", Some(1000), None)).await.unwrap();

    let by_name = repo
        .find_matching(&ItemSearch::new(Some("book".to_string()), None))
        .await
        .unwrap();
    assert_eq!(by_name, vec![book.clone(), notebook.clone()]);

    let by_price = repo
        .find_matching(&ItemSearch::new(None, Some(3000)))
        .await
        .unwrap();
    assert_eq!(by_price, vec![notebook.clone(), pen.clone()]);

    let both = repo
        .find_matching(&ItemSearch::new(Some("book".to_string()), Some(5000)))
        .await
        .unwrap();
    assert_eq!(both, vec![notebook.clone()]);

    let blank = repo
        .find_matching(&ItemSearch::new(Some("  ".to_string()), None))
        .await
        .unwrap();
    assert_eq!(blank, vec![book, notebook, pen]);
}

#[tokio::test]
async fn test_items_without_price_are_excluded_by_price_filter() {
    let repo = test_store().await;
    repo.save(Item::new("gift", None, None)).await.unwrap();

    let cheap = repo
        .find_matching(&ItemSearch::new(None, Some(100_000)))
        .await
        .unwrap();

    assert!(cheap.is_empty());
}

#[tokio::test]
async fn test_name_search_treats_wildcards_literally() {
    let repo = test_store().await;
    repo.save(Item::new("book", Some(10000), None)).await.unwrap();
    let sale = repo.save(Item::new("50% off", Some(500), None)).await.unwrap();
    let snake = repo.save(Item::new("gift_card", Some(2000), None)).await.unwrap();

    let percent = repo
        .find_matching(&ItemSearch::new(Some("%".to_string()), None))
        .await
        .unwrap();
    assert_eq!(percent, vec![sale]);

    let underscore = repo
        .find_matching(&ItemSearch::new(Some("_".to_string()), None))
        .await
        .unwrap();
    assert_eq!(underscore, vec![snake]);
}

#[tokio::test]
async fn test_name_search_ignores_case() {
    let repo = test_store().await;
    let notebook = repo.save(Item::new("NoteBook", Some(3000), None)).await.unwrap();
    repo.save(Item::new("pen", Some(1000), None)).await.unwrap();

    let found = repo
        .find_matching(&ItemSearch::new(Some("notebook".to_string()), None))
        .await
        .unwrap();
    assert_eq!(found, vec![notebook.clone()]);

    let upper = repo
        .find_matching(&ItemSearch::new(Some("BOOK".to_string()), None))
        .await
        .unwrap();
    assert_eq!(upper, vec![notebook]);
}
