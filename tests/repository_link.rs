mod common;

use brevly::domain::repositories::LinkRepository;
use brevly::error::{ErrorKind, LinkError, ValidationError};
use brevly::infrastructure::persistence::InMemoryLinkRepository;
use std::num::NonZeroUsize;
use uuid::Uuid;

fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

async fn all_slugs(repo: &InMemoryLinkRepository) -> Vec<String> {
    repo.list(None, page_size(1000))
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|l| l.short_slug)
        .collect()
}

#[tokio::test]
async fn test_create_link() {
    let repo = InMemoryLinkRepository::new();

    let link = repo
        .create(common::new_link("https://example.com", "promo"))
        .await
        .unwrap();

    assert_eq!(link.short_slug, "promo");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.access_count, 0);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_duplicate_slug_leaves_registry_unchanged() {
    let repo = InMemoryLinkRepository::new();
    let first = common::create_test_link(&repo, "promo").await;

    let err = repo
        .create(common::new_link("https://other.com", "promo"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LinkError::DuplicateSlug {
            slug: "promo".into()
        }
    );
    assert_eq!(repo.count().await.unwrap(), 1);
    assert_eq!(
        repo.find_by_slug("promo").await.unwrap().unwrap().id,
        first.id
    );
}

#[tokio::test]
async fn test_ids_are_unique_and_created_at_increases() {
    let repo = InMemoryLinkRepository::new();

    let mut previous = common::create_test_link(&repo, "a0").await;
    for i in 1..50 {
        let next = common::create_test_link(&repo, &format!("a{i}")).await;
        assert_ne!(next.id, previous.id);
        assert!(next.created_at > previous.created_at);
        previous = next;
    }
}

#[tokio::test]
async fn test_find_by_slug() {
    let repo = InMemoryLinkRepository::new();
    let link = common::create_test_link(&repo, "abc123").await;

    let found = repo.find_by_slug("abc123").await.unwrap();
    assert_eq!(found, Some(link));

    assert!(repo.find_by_slug("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_then_lookup_not_found() {
    let repo = InMemoryLinkRepository::new();
    let link = common::create_test_link(&repo, "promo").await;

    let deleted_id = repo.delete("promo").await.unwrap();

    assert_eq!(deleted_id, link.id);
    assert!(repo.find_by_slug("promo").await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_slug_leaves_registry_unchanged() {
    let repo = InMemoryLinkRepository::new();
    common::create_test_link(&repo, "a").await;
    common::create_test_link(&repo, "b").await;

    let err = repo.delete("missing").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(all_slugs(&repo).await, ["a", "b"]);
}

#[tokio::test]
async fn test_delete_twice_is_not_found() {
    let repo = InMemoryLinkRepository::new();
    common::create_test_link(&repo, "promo").await;

    repo.delete("promo").await.unwrap();
    let err = repo.delete("promo").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_create_delete_create_gets_new_identity() {
    let repo = InMemoryLinkRepository::new();
    let first = common::create_test_link(&repo, "promo").await;
    repo.delete("promo").await.unwrap();

    let second = repo
        .create(common::new_link("https://example.com/again", "promo"))
        .await
        .unwrap();

    assert_ne!(second.id, first.id);
    assert!(second.created_at > first.created_at);
    assert_eq!(second.original_url, "https://example.com/again");
}

#[tokio::test]
async fn test_five_records_page_size_two() {
    let repo = InMemoryLinkRepository::new();
    for slug in ["a", "b", "c", "d", "e"] {
        common::create_test_link(&repo, slug).await;
    }

    let first = repo.list(None, page_size(2)).await.unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total, 5);
    assert_eq!(first.next_cursor, Some(first.items[1].id));

    let second = repo.list(first.next_cursor, page_size(2)).await.unwrap();
    assert_eq!(second.items.len(), 2);
    assert!(second.next_cursor.is_some());

    let third = repo.list(second.next_cursor, page_size(2)).await.unwrap();
    assert_eq!(third.items.len(), 1);
    assert!(third.next_cursor.is_none());

    let slugs: Vec<_> = [first, second, third]
        .into_iter()
        .flat_map(|p| p.items)
        .map(|l| l.short_slug)
        .collect();
    assert_eq!(slugs, ["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_exact_multiple_has_no_trailing_cursor() {
    let repo = InMemoryLinkRepository::new();
    for slug in ["a", "b", "c", "d"] {
        common::create_test_link(&repo, slug).await;
    }

    let first = repo.list(None, page_size(2)).await.unwrap();
    let second = repo.list(first.next_cursor, page_size(2)).await.unwrap();

    assert_eq!(second.items.len(), 2);
    assert!(second.next_cursor.is_none());
}

#[tokio::test]
async fn test_empty_registry_lists_empty_page() {
    let repo = InMemoryLinkRepository::new();

    let page = repo.list(None, page_size(20)).await.unwrap();

    assert!(page.items.is_empty());
    assert!(page.next_cursor.is_none());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_cursor_of_deleted_record_stays_valid() {
    let repo = InMemoryLinkRepository::new();
    for slug in ["a", "b", "c"] {
        common::create_test_link(&repo, slug).await;
    }

    let first = repo.list(None, page_size(2)).await.unwrap();
    repo.delete("b").await.unwrap();

    let second = repo.list(first.next_cursor, page_size(2)).await.unwrap();

    let slugs: Vec<_> = second.items.iter().map(|l| l.short_slug.as_str()).collect();
    assert_eq!(slugs, ["c"]);
    assert_eq!(second.total, 2);
    assert!(second.next_cursor.is_none());
}

#[tokio::test]
async fn test_unknown_cursor_is_rejected() {
    let repo = InMemoryLinkRepository::new();
    common::create_test_link(&repo, "a").await;
    let cursor = Uuid::now_v7();

    let err = repo.list(Some(cursor), page_size(2)).await.unwrap_err();

    assert_eq!(err, LinkError::from(ValidationError::Cursor { cursor }));
}

#[tokio::test]
async fn test_concurrent_creates_with_same_slug() {
    let repo = std::sync::Arc::new(InMemoryLinkRepository::new());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create(common::new_link(&format!("https://example.com/{i}"), "race"))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert_eq!(e.kind(), ErrorKind::DuplicateSlug),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}
