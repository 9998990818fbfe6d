use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cancel::CancelToken;
use crate::catalog::Variant;
use crate::config::Config;
use crate::errors::{GenerationError, ProviderFailure};
use crate::prompt;
use crate::provider::{DynProvider, ProviderRequest};
use crate::schema::{self, OPTIONS_FIELD, OPTION_COUNT, SCENARIOS_FIELD, SETUP_FIELD, SIMPLE_TEXT_FIELD};
use crate::wire::{ComplexScenarioCard, GenerationRequest, GenerationResult, ScenarioCard, SimpleScenarioCard};

/// Stateless between calls: every `generate` builds its own prompt, makes one
/// provider call and either returns every card or none.
pub struct Engine {
    provider: DynProvider,
    model: String,
    timeout: Duration,
}

impl Engine {
    pub fn new(provider: DynProvider, cfg: &Config) -> Self {
        Self {
            provider,
            model: cfg.model.clone(),
            timeout: cfg.timeout(),
        }
    }

    #[tracing::instrument(
        name = "generate",
        skip_all,
        fields(request_id = %Uuid::new_v4(), theme = %req.theme_key)
    )]
    pub async fn generate(
        &self,
        req: &GenerationRequest,
        cancel: &CancelToken,
    ) -> Result<GenerationResult, GenerationError> {
        match self.run(req, cancel).await {
            Ok(result) => {
                info!(cards = result.len(), variant = ?result.variant, "generated scenarios");
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "scenario generation failed");
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        req: &GenerationRequest,
        cancel: &CancelToken,
    ) -> Result<GenerationResult, GenerationError> {
        let credential = match req.credential.as_deref() {
            Some(c) if !c.trim().is_empty() => c.to_string(),
            _ => return Err(GenerationError::MissingCredential),
        };

        let count = req.effective_count();
        if count != req.card_count {
            debug!(requested = req.card_count, effective = count, "theme fixes the card count");
        }

        let built = prompt::build_prompt(&req.theme_key, req.custom_text.as_deref(), count);
        let preq = ProviderRequest {
            model: self.model.clone(),
            prompt: built.text,
            schema: schema::schema_for(built.variant),
            temperature: schema::TEMPERATURE,
            credential,
        };

        debug!(model = %preq.model, variant = ?built.variant, count, "requesting scenarios");
        let raw = self.call_provider(&preq, cancel).await?;

        let cards = parse_cards(&raw, built.variant)?;
        if cards.len() != count as usize {
            warn!(expected = count, got = cards.len(), "provider returned a different number of scenarios");
        }

        Ok(GenerationResult {
            theme: built.theme_name,
            variant: built.variant,
            cards,
        })
    }

    async fn call_provider(
        &self,
        preq: &ProviderRequest,
        cancel: &CancelToken,
    ) -> Result<String, ProviderFailure> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ProviderFailure::Cancelled),
            res = tokio::time::timeout(self.timeout, self.provider.complete(preq)) => match res {
                Ok(inner) => inner,
                Err(_elapsed) => Err(ProviderFailure::Timeout(self.timeout)),
            },
        }
    }
}

/// Parse the raw payload and rebuild cards of the requested variant.
/// Each element is checked against that variant's required fields.
pub fn parse_cards(raw: &str, variant: Variant) -> Result<Vec<ScenarioCard>, GenerationError> {
    let parsed: Value = serde_json::from_str(raw.trim())
        .map_err(|e| GenerationError::malformed(format!("response is not valid JSON: {e}")))?;

    let items = parsed
        .get(SCENARIOS_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| GenerationError::malformed("expected a 'scenarios' array"))?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match variant {
            Variant::Simple => simple_card(item).map(ScenarioCard::Simple),
            Variant::Complex => complex_card(item).map(ScenarioCard::Complex),
        }
        .map_err(|why| GenerationError::malformed(format!("scenario {idx}: {why}"))))
        .collect()
}

fn string_field<'a>(item: &'a Value, field: &str) -> Result<&'a str, String> {
    item.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| format!("missing string field '{field}'"))
}

fn simple_card(item: &Value) -> Result<SimpleScenarioCard, String> {
    Ok(SimpleScenarioCard { text: string_field(item, SIMPLE_TEXT_FIELD)?.to_string() })
}

fn complex_card(item: &Value) -> Result<ComplexScenarioCard, String> {
    let setup = string_field(item, SETUP_FIELD)?.to_string();
    let options = item
        .get(OPTIONS_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("missing array field '{OPTIONS_FIELD}'"))?;

    if options.len() != OPTION_COUNT {
        return Err(format!("expected {OPTION_COUNT} options, got {}", options.len()));
    }

    let texts = options
        .iter()
        .map(|o| o.as_str().map(str::to_string).ok_or_else(|| "options must be strings".to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let options: [String; 3] = texts
        .try_into()
        .map_err(|_| format!("expected {OPTION_COUNT} options"))?;

    Ok(ComplexScenarioCard { setup, options })
}
