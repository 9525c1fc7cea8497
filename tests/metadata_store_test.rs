use std::sync::Arc;

use askpdf::application::ports::{MetadataRepository, MetadataRepositoryError};
use askpdf::domain::FileId;
use askpdf::infrastructure::persistence::JsonMetadataRepository;

fn create_test_repo() -> (tempfile::TempDir, JsonMetadataRepository) {
    let dir = tempfile::TempDir::new().unwrap();
    let repo = JsonMetadataRepository::new(dir.path().join("metadata.json"));
    (dir, repo)
}

#[tokio::test]
async fn given_no_backing_file_when_loading_then_returns_empty_mapping() {
    let (_dir, repo) = create_test_repo();

    let records = repo.load().await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn given_added_record_when_getting_then_fields_match() {
    let (_dir, repo) = create_test_repo();
    let file_id = FileId::new();

    repo.add(file_id.clone(), "alice".to_string(), "doc.pdf".to_string())
        .await
        .unwrap();

    let record = repo.get(&file_id).await.unwrap().unwrap();
    assert_eq!(record.file_id, file_id);
    assert_eq!(record.username, "alice");
    assert_eq!(record.original_filename, "doc.pdf");
    assert!(record.upload_time_utc <= chrono::Utc::now());
}

#[tokio::test]
async fn given_unknown_id_when_getting_then_returns_none() {
    let (_dir, repo) = create_test_repo();

    let result = repo.get(&FileId::new()).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn given_same_id_added_twice_when_listing_then_one_record_remains() {
    let (_dir, repo) = create_test_repo();
    let file_id = FileId::new();

    repo.add(file_id.clone(), "alice".to_string(), "first.pdf".to_string())
        .await
        .unwrap();
    repo.add(file_id.clone(), "alice".to_string(), "second.pdf".to_string())
        .await
        .unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].original_filename, "second.pdf");
}

#[tokio::test]
async fn given_existing_record_when_deleting_then_returns_record_and_removes_it() {
    let (_dir, repo) = create_test_repo();
    let file_id = FileId::new();
    repo.add(file_id.clone(), "bob".to_string(), "doc.pdf".to_string())
        .await
        .unwrap();

    let removed = repo.delete(&file_id).await.unwrap();
    assert_eq!(removed.unwrap().username, "bob");

    assert!(repo.get(&file_id).await.unwrap().is_none());
    assert!(repo.delete(&file_id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_corrupt_backing_file_when_loading_then_returns_corrupt_store() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("metadata.json");
    std::fs::write(&path, b"{ not json").unwrap();
    let repo = JsonMetadataRepository::new(path);

    let result = repo.load().await;

    assert!(matches!(
        result,
        Err(MetadataRepositoryError::CorruptStore(_))
    ));
}

#[tokio::test]
async fn given_populated_store_when_saving_loaded_mapping_then_content_is_unchanged() {
    let (_dir, repo) = create_test_repo();
    repo.add(FileId::new(), "alice".to_string(), "a.pdf".to_string())
        .await
        .unwrap();
    repo.add(FileId::new(), "bob".to_string(), "b.pdf".to_string())
        .await
        .unwrap();

    let first = repo.load().await.unwrap();
    repo.save(&first).await.unwrap();
    let second = repo.load().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_concurrent_adds_when_listing_then_no_write_is_lost() {
    let (_dir, repo) = create_test_repo();
    let repo = Arc::new(repo);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                repo.add(FileId::new(), format!("user{i}"), format!("doc{i}.pdf"))
                    .await
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 8);
}
