//! Tests for model selection.

use restaurant_finder::config::DEFAULT_MODEL;
use restaurant_finder::error::FinderError;
use restaurant_finder::models::*;

#[cfg(feature = "google")]
#[test]
fn default_model_is_gemini_flash() {
    let model: LanguageModel = DEFAULT_MODEL.parse().unwrap();
    assert_eq!(model, LanguageModel::Google(google::GoogleModel::Gemini25Flash));
    assert_eq!(model.to_string(), "google:gemini-2.5-flash");
}

#[cfg(all(feature = "openai", feature = "google"))]
#[test]
fn both_separators_are_accepted() {
    let slash: LanguageModel = "openai/gpt-4.1".parse().unwrap();
    let colon: LanguageModel = "openai:gpt-4.1".parse().unwrap();
    assert_eq!(slash, colon);

    let gemini: LanguageModel = "gemini:gemini-2.5-pro".parse().unwrap();
    let google: LanguageModel = "google/gemini-2.5-pro".parse().unwrap();
    assert_eq!(gemini, google);
}

#[cfg(feature = "openai")]
#[test]
fn unknown_model_ids_are_kept_verbatim() {
    let model: LanguageModel = "openai/my-finetune".parse().unwrap();
    assert_eq!(model.model_id(), "my-finetune");
    assert_eq!(model.provider_name(), "openai");
}

#[test]
fn unknown_provider_becomes_custom() {
    let model: LanguageModel = "ollama/llama3".parse().unwrap();
    assert_eq!(
        model,
        LanguageModel::Custom {
            provider: "ollama".into(),
            model_id: "llama3".into()
        }
    );
}

#[test]
fn malformed_selectors_are_rejected() {
    for selector in ["gpt-4o", "/gpt-4o", "openai:", ""] {
        let err = selector.parse::<LanguageModel>().unwrap_err();
        assert!(matches!(err, FinderError::InvalidArgument(_)), "{selector}");
    }
}
