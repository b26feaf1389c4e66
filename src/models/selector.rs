//! Model selection and parsing.

use std::str::FromStr;

use super::LanguageModel;
use crate::error::FinderError;

/// Parses model selector strings into a [`LanguageModel`].
pub struct ModelSelector;

impl ModelSelector {
    /// Parse `provider/model_id` (LiteLLM style) or `provider:model_id`.
    ///
    /// The provider ends at the first separator, so the model ID may itself
    /// contain `/` or `:`.
    ///
    /// Examples: "gemini/gemini-2.5-flash", "openai:gpt-4.1", "openai/ft:gpt-4o:my-org"
    pub fn parse(s: &str) -> Result<LanguageModel, FinderError> {
        let (provider, model_id) = s
            .find(|c: char| c == ':' || c == '/')
            .map(|idx| (&s[..idx], &s[idx + 1..]))
            .filter(|(provider, model_id)| !provider.is_empty() && !model_id.is_empty())
            .ok_or_else(|| {
                FinderError::InvalidArgument(format!(
                    "Invalid model selector '{s}': expected 'provider/model_id'"
                ))
            })?;

        match provider {
            #[cfg(feature = "openai")]
            "openai" => {
                use super::openai::OpenAiModel;
                let m = OpenAiModel::from_str(model_id)
                    .unwrap_or(OpenAiModel::Custom(model_id.to_string()));
                Ok(LanguageModel::OpenAi(m))
            }
            #[cfg(feature = "google")]
            "google" | "gemini" => {
                use super::google::GoogleModel;
                let m = GoogleModel::from_str(model_id)
                    .unwrap_or(GoogleModel::Custom(model_id.to_string()));
                Ok(LanguageModel::Google(m))
            }
            _ => Ok(LanguageModel::Custom {
                provider: provider.to_string(),
                model_id: model_id.to_string(),
            }),
        }
    }
}

impl FromStr for LanguageModel {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelSelector::parse(s)
    }
}
