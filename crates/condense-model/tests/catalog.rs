use condense_model::catalog::{DEFAULT_MODEL, ModelCatalog, ModelChoice, Provider};
use condense_model::error::SummarizeError;

#[test]
fn default_catalog_offers_bart() {
    let catalog = ModelCatalog::default();
    assert_eq!(catalog.models().len(), 1);
    assert_eq!(catalog.default_model().model_id, DEFAULT_MODEL);
    assert_eq!(catalog.default_model().provider, Provider::HuggingFace);
}

#[test]
fn parses_provider_and_id() {
    let choice: ModelChoice = "huggingface:facebook/bart-large-cnn".parse().unwrap();
    assert_eq!(choice.provider, Provider::HuggingFace);
    assert_eq!(choice.model_id, "facebook/bart-large-cnn");
    assert_eq!(choice.to_string(), "huggingface:facebook/bart-large-cnn");
}

#[test]
fn only_first_colon_splits() {
    let choice: ModelChoice = "bedrock:us.anthropic.claude-haiku-4-5-20251001-v1:0"
        .parse()
        .unwrap();
    assert_eq!(choice.provider, Provider::Bedrock);
    assert_eq!(choice.model_id, "us.anthropic.claude-haiku-4-5-20251001-v1:0");
}

#[test]
fn hf_alias_is_accepted() {
    let choice: ModelChoice = "HF:sshleifer/distilbart-cnn-12-6".parse().unwrap();
    assert_eq!(choice.provider, Provider::HuggingFace);
}

#[test]
fn rejects_malformed_entries() {
    assert!(matches!(
        "facebook/bart-large-cnn".parse::<ModelChoice>(),
        Err(SummarizeError::Config(_))
    ));
    assert!(matches!(
        "openai:gpt".parse::<ModelChoice>(),
        Err(SummarizeError::Config(_))
    ));
    assert!(matches!(
        "bedrock:".parse::<ModelChoice>(),
        Err(SummarizeError::Config(_))
    ));
}

#[test]
fn parse_list_keeps_order_and_skips_blanks() {
    let catalog = ModelCatalog::parse_list(
        " huggingface:facebook/bart-large-cnn , ,bedrock:us.anthropic.claude-sonnet-4-6 ",
    )
    .unwrap();

    assert_eq!(catalog.models().len(), 2);
    assert_eq!(catalog.default_model().model_id, "facebook/bart-large-cnn");
    assert_eq!(
        catalog.find("us.anthropic.claude-sonnet-4-6").map(|m| m.provider),
        Some(Provider::Bedrock)
    );
    assert!(catalog.find("t5-small").is_none());
}

#[test]
fn empty_list_is_rejected() {
    assert!(ModelCatalog::parse_list(" , ").is_err());
    assert!(ModelCatalog::new(Vec::new()).is_err());
}

#[test]
fn catalog_serializes_as_list() {
    let json = serde_json::to_value(ModelCatalog::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{"provider": "huggingface", "model_id": "facebook/bart-large-cnn"}])
    );
}

#[test]
fn duplicate_model_id_is_rejected() {
    let err = ModelCatalog::parse_list("huggingface:x,bedrock:x").unwrap_err();
    assert!(matches!(err, SummarizeError::Config(msg) if msg.contains("duplicate model id: x")));
}
