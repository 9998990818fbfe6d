//! Structured-output descriptors handed to the provider alongside the prompt.
//!
//! These follow the provider's OpenAPI-subset schema dialect (upper-case type
//! names). They are a request-side constraint only; the engine still
//! validates every response it gets back.

use serde_json::{json, Value};

use crate::catalog::Variant;

pub const SCENARIOS_FIELD: &str = "scenarios";
pub const SIMPLE_TEXT_FIELD: &str = "scenario";
pub const SETUP_FIELD: &str = "setup";
pub const OPTIONS_FIELD: &str = "options";
pub const OPTION_COUNT: usize = 3;
/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.9;

pub fn simple_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            SCENARIOS_FIELD: {
                "type": "ARRAY",
                "description": "An array of best-case scenarios.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        SIMPLE_TEXT_FIELD: {
                            "type": "STRING",
                            "description": "A single, positive, interesting, and feel-good scenario. It should be a direct statement."
                        }
                    },
                    "required": [SIMPLE_TEXT_FIELD]
                }
            }
        },
        "required": [SCENARIOS_FIELD]
    })
}

pub fn complex_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            SCENARIOS_FIELD: {
                "type": "ARRAY",
                "description": "An array of complex best-case scenarios.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        SETUP_FIELD: {
                            "type": "STRING",
                            "description": "The setup or context for the scenario."
                        },
                        OPTIONS_FIELD: {
                            "type": "ARRAY",
                            "description": "An array of exactly 3 positive, feel-good choices for the scenario.",
                            "minItems": OPTION_COUNT,
                            "maxItems": OPTION_COUNT,
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": [SETUP_FIELD, OPTIONS_FIELD]
                }
            }
        },
        "required": [SCENARIOS_FIELD]
    })
}

pub fn schema_for(variant: Variant) -> Value {
    match variant {
        Variant::Simple => simple_schema(),
        Variant::Complex => complex_schema(),
    }
}
