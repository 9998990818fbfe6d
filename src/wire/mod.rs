use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Variant};

/// ========================================
/// Caller-facing request/result types
/// ========================================

/// One generation call as handed over by the presentation layer.
#[derive(Clone)]
pub struct GenerationRequest {
    pub theme_key: String,
    pub card_count: u32,
    pub custom_text: Option<String>,
    pub credential: Option<String>,
}

impl fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("theme_key", &self.theme_key)
            .field("card_count", &self.card_count)
            .field("custom_text", &self.custom_text)
            .field("credential", &self.credential.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Stands in for credentials in `Debug` output.
pub const REDACTED: &str = "<redacted>";

impl GenerationRequest {
    pub fn new(theme_key: impl Into<String>, card_count: u32) -> Self {
        Self {
            theme_key: theme_key.into(),
            card_count,
            custom_text: None,
            credential: None,
        }
    }

    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        self.custom_text = Some(text.into());
        self
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn effective_count(&self) -> u32 {
        catalog::effective_count(&self.theme_key, self.card_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleScenarioCard {
    #[serde(rename = "scenario")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexScenarioCard {
    pub setup: String,
    pub options: [String; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScenarioCard {
    Simple(SimpleScenarioCard),
    Complex(ComplexScenarioCard),
}

impl ScenarioCard {
    pub fn variant(&self) -> Variant {
        match self {
            ScenarioCard::Simple(_) => Variant::Simple,
            ScenarioCard::Complex(_) => Variant::Complex,
        }
    }
}

/// Cards in provider emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub theme: String,
    pub variant: Variant,
    pub cards: Vec<ScenarioCard>,
}

impl GenerationResult {
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
