use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;

use super::*;

#[test]
fn objects_from_contents_maps_key_and_size() {
    let contents = [Object::builder().key("a.txt").size(5).build()];
    assert_eq!(objects_from_contents(&contents), vec![StorageObject { key: "a.txt".into(), size: 5 }]);
}

#[test]
fn objects_from_contents_keeps_order_and_count() {
    let contents = [
        Object::builder().key("z.bin").size(1).build(),
        Object::builder().key("a.bin").size(2).build(),
        Object::builder().key("m.bin").size(3).build(),
    ];
    let keys: Vec<_> = objects_from_contents(&contents).into_iter().map(|o| o.key).collect();
    assert_eq!(keys, vec!["z.bin", "a.bin", "m.bin"]);
}

#[test]
fn objects_from_contents_defaults_missing_metadata() {
    let contents = [Object::builder().build()];
    assert_eq!(objects_from_contents(&contents), vec![StorageObject { key: String::new(), size: 0 }]);
}

#[test]
fn response_without_contents_is_empty_listing() {
    let output = ListObjectsV2Output::builder().name("media").key_count(0).build();
    assert!(objects_from_contents(output.contents()).is_empty());
}

// =============================================================================
// ERROR MESSAGES
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("bucket was missing")]
struct MissingBucket;

#[derive(Debug, thiserror::Error)]
#[error("bucket was missing")]
struct RepeatsSource(#[source] MissingBucket);

#[derive(Debug, thiserror::Error)]
#[error("failed to construct request")]
struct Construction(#[source] RepeatsSource);

#[test]
fn error_chain_message_joins_display_of_sources() {
    let err = Construction(RepeatsSource(MissingBucket));
    assert_eq!(error_chain_message(&err), "failed to construct request: bucket was missing");
}

#[test]
fn error_chain_message_single_error() {
    assert_eq!(error_chain_message(&MissingBucket), "bucket was missing");
}

// =============================================================================
// LISTING
// =============================================================================

#[tokio::test]
async fn list_without_bucket_fails_with_readable_storage_error() {
    let lister = S3ObjectLister::new(StorageConfig { region: "us-east-1".into(), bucket_name: None });

    let err = lister.list_objects().await.unwrap_err();
    let FetchError::Storage(message) = &err else {
        panic!("expected storage error, got {err:?}");
    };
    assert!(message.contains("bucket"), "unexpected message: {message}");
    assert!(!message.contains("ConstructionFailure"), "debug dump leaked: {message}");
    assert_eq!(err.to_string(), *message);
}
