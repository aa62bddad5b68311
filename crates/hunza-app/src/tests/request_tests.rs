use hunza_config::limits::LimitsConfig;
use hunza_types::{Language, Method, TranslationMetadata, TranslationResult};

use crate::request::{BatchResponse, ValidationError, validate_batch, validate_text};

#[test]
fn test_validate_text_bounds() {
    let limits = LimitsConfig::default();

    assert_eq!(validate_text(&limits, ""), Err(ValidationError::EmptyText));
    assert_eq!(validate_text(&limits, "   "), Err(ValidationError::EmptyText));
    assert!(validate_text(&limits, "haq").is_ok());
    assert_eq!(
        validate_text(&limits, &"a".repeat(501)),
        Err(ValidationError::TextTooLong { len: 501, max: 500 })
    );
}

#[test]
fn test_validate_text_counts_characters() {
    let limits = LimitsConfig::default();
    // 500 characters, 1500 bytes
    assert!(validate_text(&limits, &"ṣ".repeat(500)).is_ok());
}

#[test]
fn test_validate_batch_bounds() {
    let limits = LimitsConfig::default();

    let empty: Vec<String> = vec![];
    assert_eq!(validate_batch(&limits, &empty), Err(ValidationError::EmptyBatch));

    let too_many = vec!["haq"; 51];
    assert_eq!(
        validate_batch(&limits, &too_many),
        Err(ValidationError::BatchTooLarge { len: 51, max: 50 })
    );

    assert!(validate_batch(&limits, &vec!["haq"; 50]).is_ok());
    assert_eq!(
        validate_batch(&limits, &["haq", " "]),
        Err(ValidationError::EmptyText)
    );
}

#[test]
fn test_batch_response_counts() {
    let results = vec![
        TranslationResult::matched(
            Method::Dictionary,
            "haq",
            Language::Burushaski,
            "good",
            TranslationMetadata::default(),
        ),
        TranslationResult::not_found("xyz", Language::Burushaski),
        TranslationResult::suggestions("ha", Language::Burushaski, vec![]),
    ];

    let response = BatchResponse::from(results);
    assert_eq!(response.total, 3);
    assert_eq!(response.successful, 1);
    assert_eq!(response.failed, 2);
}
