mod common;

use std::time::Duration;

use common::{engine, engine_with_config, simple_payload, Reply};
use scenario_deck::catalog::{self, Variant, COMPLEX_THEME_KEY, CUSTOM_THEME_KEY};
use scenario_deck::config::Config;
use scenario_deck::schema::TEMPERATURE;
use scenario_deck::wire::{ComplexScenarioCard, SimpleScenarioCard};
use scenario_deck::{CancelToken, GenerationError, GenerationRequest, ProviderFailure, ScenarioCard};

fn request(theme: &str, count: u32) -> GenerationRequest {
    GenerationRequest::new(theme, count).with_credential("k")
}

#[tokio::test]
async fn simple_themes_return_requested_count_in_order() {
    for theme in catalog::themes().iter().filter(|t| t.variant == Variant::Simple) {
        for &count in catalog::card_counts() {
            let (engine, calls) = engine(Reply::Text(simple_payload(count as usize)));
            let result = engine
                .generate(&request(theme.key, count), &CancelToken::new())
                .await
                .unwrap_or_else(|e| panic!("{} x {count}: {e}", theme.key));

            assert_eq!(result.len(), count as usize);
            for (i, card) in result.cards.iter().enumerate() {
                assert_eq!(card, &ScenarioCard::Simple(SimpleScenarioCard { text: format!("card {i}") }));
            }
            assert_eq!(calls.count(), 1);
            assert!(calls.last().prompt.contains(&format!("generate exactly {count} unique")));
        }
    }
}

#[tokio::test]
async fn travel_triumphs_end_to_end() {
    let payload = r#"{"scenarios":[{"scenario":"A"},{"scenario":"B"},{"scenario":"C"}]}"#;
    let (engine, calls) = engine(Reply::Text(payload.to_string()));

    let result = engine.generate(&request("travel_triumphs", 3), &CancelToken::new()).await.unwrap();

    let texts: Vec<_> = result
        .cards
        .iter()
        .map(|c| match c {
            ScenarioCard::Simple(s) => s.text.as_str(),
            other => panic!("unexpected card {other:?}"),
        })
        .collect();
    assert_eq!(texts, ["A", "B", "C"]);
    assert_eq!(result.theme, "Travel Triumphs");

    let sent = calls.last();
    assert!(sent.prompt.contains("\"Travel Triumphs\""));
    assert_eq!(sent.credential, "k");
    assert_eq!(sent.model, "gemini-2.5-flash");
    assert!((sent.temperature - 0.9).abs() < f32::EPSILON);
    assert_eq!(sent.schema["properties"]["scenarios"]["items"]["required"][0], "scenario");
}

#[tokio::test]
async fn complex_theme_forces_one_card() {
    let payload = r#"{"scenarios":[{"setup":"A genie appears.","options":["wit","music","parking"]}]}"#;
    let (engine, calls) = engine(Reply::Text(payload.to_string()));

    let result = engine.generate(&request(COMPLEX_THEME_KEY, 5), &CancelToken::new()).await.unwrap();

    assert_eq!(result.variant, Variant::Complex);
    assert_eq!(
        result.cards,
        vec![ScenarioCard::Complex(ComplexScenarioCard {
            setup: "A genie appears.".into(),
            options: ["wit".into(), "music".into(), "parking".into()],
        })]
    );

    let sent = calls.last();
    assert!(sent.prompt.contains("generate exactly 1 unique, complex"));
    assert!(!sent.prompt.contains("exactly 5"));
    assert_eq!(sent.schema["properties"]["scenarios"]["items"]["required"][1], "options");
}

#[tokio::test]
async fn custom_text_reaches_prompt_trimmed() {
    let (engine, calls) = engine(Reply::Text(simple_payload(2)));
    let req = request(CUSTOM_THEME_KEY, 2).with_custom_text("  haunted libraries  ");

    let result = engine.generate(&req, &CancelToken::new()).await.unwrap();

    assert_eq!(result.theme, "haunted libraries");
    assert!(calls.last().prompt.contains("based on the theme of \"haunted libraries\""));
}

#[tokio::test]
async fn missing_or_blank_credential_never_calls_provider() {
    for credential in [None, Some(""), Some("   \t\n")] {
        let (engine, calls) = engine(Reply::Panic);
        let mut req = GenerationRequest::new("pet_pals", 2);
        req.credential = credential.map(str::to_string);

        let err = engine.generate(&req, &CancelToken::new()).await.unwrap_err();

        assert!(err.is_missing_credential(), "{err}");
        assert_eq!(calls.count(), 0);
    }
}

#[tokio::test]
async fn malformed_payloads_are_rejected() {
    let bodies = [
        "not json at all",
        r#"{"cards":[]}"#,
        r#"{"scenarios":"A, B, C"}"#,
        r#"{"scenarios":[{"scenario":"A"},{"idea":"B"}]}"#,
    ];
    for body in bodies {
        let (engine, _) = engine(Reply::Text(body.to_string()));
        let err = engine.generate(&request("daily_delights", 2), &CancelToken::new()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)), "{body}: {err}");
    }
}

#[tokio::test]
async fn complex_options_must_number_three() {
    for options in [r#"["a","b"]"#, r#"["a","b","c","d"]"#] {
        let body = format!(r#"{{"scenarios":[{{"setup":"s","options":{options}}}]}}"#);
        let (engine, _) = engine(Reply::Text(body));
        let err = engine.generate(&request(COMPLEX_THEME_KEY, 1), &CancelToken::new()).await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(ref m) if m.contains("expected 3 options")), "{err}");
    }
}

#[tokio::test]
async fn provider_failure_is_wrapped_without_retry() {
    let (engine, calls) = engine(Reply::Fail(|| ProviderFailure::Status { status: 500, body: "boom".into() }));

    let err = engine.generate(&request("tech_success", 3), &CancelToken::new()).await.unwrap_err();

    assert!(matches!(err, GenerationError::Provider(ProviderFailure::Status { status: 500, .. })));
    assert_eq!(err.user_message(), scenario_deck::errors::GENERIC_FAILURE_MESSAGE);
    assert_eq!(calls.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn hung_provider_hits_deadline() {
    let (engine, _) = engine(Reply::Hang);

    let err = engine.generate(&request("pet_pals", 2), &CancelToken::new()).await.unwrap_err();

    assert!(matches!(err, GenerationError::Provider(ProviderFailure::Timeout(d)) if d == Duration::from_secs(5)));
}

#[tokio::test]
async fn cancellation_stops_pending_call() {
    let (engine, calls) = engine(Reply::Hang);
    let cancel = CancelToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let err = engine.generate(&request("pet_pals", 2), &cancel).await.unwrap_err();

    assert!(matches!(err, GenerationError::Provider(ProviderFailure::Cancelled)));
    assert_eq!(calls.count(), 1);
}

#[tokio::test]
async fn already_cancelled_token_skips_provider() {
    let (engine, calls) = engine(Reply::Panic);
    let cancel = CancelToken::new();
    cancel.cancel();

    let err = engine.generate(&request("pet_pals", 2), &cancel).await.unwrap_err();

    assert!(matches!(err, GenerationError::Provider(ProviderFailure::Cancelled)));
    assert_eq!(calls.count(), 0);
}

#[tokio::test]
async fn config_file_cannot_change_temperature() {
    let cfg = Config::from_toml("temperature = 0.1\ntimeout_secs = 5").unwrap();
    let (engine, calls) = engine_with_config(Reply::Text(simple_payload(2)), &cfg);

    engine.generate(&request("pet_pals", 2), &CancelToken::new()).await.unwrap();

    let sent = calls.last().temperature;
    assert!((sent - 0.9).abs() < f32::EPSILON, "sent {sent}");
    assert_eq!(sent, TEMPERATURE);
}
