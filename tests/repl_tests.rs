use eco_footprint_assistant::commands::{Outcome, dispatch};
use eco_footprint_assistant::config::{AppConfig, OutputFormat};
use eco_footprint_assistant::repl;
use eco_footprint_assistant::services::chatbot::FALLBACK_RESPONSE;
use eco_footprint_assistant::services::metrics_manager::FALLBACK_KEY;
use eco_footprint_assistant::state::AppState;

async fn run_session(state: &mut AppState, script: &str) -> String {
    let mut output = Vec::new();
    repl::run(state, script.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_chat_session() {
    let mut state = AppState::new(AppConfig::default());
    let out = run_session(&mut state, "hello\n\n   \nxyz unrelated\n/quit\nbye\n").await;

    assert!(out.starts_with("EcoBot: Hi! Ask me about travel"));
    assert!(out.contains("EcoBot: Hello! I can help you"));
    assert!(out.contains(&format!("EcoBot: {FALLBACK_RESPONSE}")));
    // Nothing after /quit is read
    assert!(!out.contains("Goodbye"));

    assert_eq!(state.transcript.len(), 2);
    let metrics = state.metrics.get_metrics();
    assert_eq!(metrics.keyword_usage.get("hello"), Some(&1));
    assert_eq!(metrics.keyword_usage.get(FALLBACK_KEY), Some(&1));
}

#[tokio::test]
async fn test_session_ends_at_end_of_input() {
    let mut state = AppState::new(AppConfig::default());
    let out = run_session(&mut state, "tips for travel").await;
    assert!(out.contains("Consider walking, cycling"));
    assert_eq!(state.transcript.len(), 1);
}

#[tokio::test]
async fn test_invalid_utf8_line_does_not_end_session() {
    let mut state = AppState::new(AppConfig::default());
    let mut output = Vec::new();
    repl::run(&mut state, b"caf\xe9 food\nhello\n" as &[u8], &mut output)
        .await
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(out.contains("EcoBot: Eat more local"));
    assert!(out.contains("EcoBot: Hello! I can help you"));
    assert_eq!(state.transcript.len(), 2);
}

#[tokio::test]
async fn test_calc_session() {
    let mut state = AppState::new(AppConfig::default());
    let out = run_session(&mut state, "/calc 10 300 2 nonveg\n/calc 10 abc 2 veg\n").await;

    assert!(out.contains("Estimated Annual Carbon Footprint: 6.39 tons"));
    assert!(out.contains("Please enter valid numbers."));
    // Calculations are not chat
    assert!(state.transcript.is_empty());

    let metrics = state.metrics.get_metrics();
    assert_eq!(metrics.band_usage.get("high"), Some(&1));
    assert_eq!(metrics.rejected_calculations, 1);
}

#[test]
fn test_calc_json_output() {
    let config = AppConfig {
        output: OutputFormat::Json,
        ..AppConfig::default()
    };
    let mut state = AppState::new(config);
    let Outcome::Reply(reply) = dispatch(&mut state, "/calc 0 0 0 veg") else {
        panic!("expected a reply");
    };
    let value: serde_json::Value = serde_json::from_str(&reply).unwrap();
    assert_eq!(value["breakdown"]["band"], "low");
    assert_eq!(value["breakdown"]["food_kg"], 1500.0);
}

#[test]
fn test_calc_usage_errors() {
    let mut state = AppState::new(AppConfig::default());
    let Outcome::Reply(reply) = dispatch(&mut state, "/calc 1 2") else {
        panic!("expected a reply");
    };
    assert!(reply.starts_with("Usage: /calc"));

    let Outcome::Reply(reply) = dispatch(&mut state, "/calc 1 2 3 vegan") else {
        panic!("expected a reply");
    };
    assert!(reply.contains("Unknown diet 'vegan'"));

    let Outcome::Reply(reply) = dispatch(&mut state, "/calc 1 -2 3 veg") else {
        panic!("expected a reply");
    };
    assert!(reply.contains("electricity kWh per month"));
    assert_eq!(state.metrics.get_metrics().rejected_calculations, 3);
}

#[test]
fn test_calc_rejects_overflowing_input() {
    let mut state = AppState::new(AppConfig::default());
    let Outcome::Reply(reply) = dispatch(&mut state, "/calc 1e308 0 0 veg") else {
        panic!("expected a reply");
    };
    assert!(reply.starts_with("Please enter valid numbers."));
    assert!(reply.contains("car km per day"));
    assert!(!reply.contains("inf"));
    assert!(state.metrics.get_metrics().band_usage.is_empty());
}

#[test]
fn test_history_and_clear() {
    let config = AppConfig {
        bot_name: "GreenBot".to_string(),
        ..AppConfig::default()
    };
    let mut state = AppState::new(config);
    assert_eq!(
        dispatch(&mut state, "/history"),
        Outcome::Reply("No messages yet.".to_string())
    );

    dispatch(&mut state, "how about food?");
    let Outcome::Reply(history) = dispatch(&mut state, "/history") else {
        panic!("expected a reply");
    };
    assert!(history.starts_with("You: how about food?\nGreenBot: Eat more local"));

    assert_eq!(
        dispatch(&mut state, "/clear"),
        Outcome::Reply("Cleared 1 message(s).".to_string())
    );
    assert!(state.transcript.is_empty());
}

#[test]
fn test_other_commands() {
    let mut state = AppState::new(AppConfig::default());
    assert_eq!(dispatch(&mut state, "/EXIT"), Outcome::Quit);
    assert_eq!(dispatch(&mut state, ""), Outcome::Nothing);
    assert!(matches!(dispatch(&mut state, "/about"), Outcome::Reply(r) if r.starts_with("Eco Footprint Assistant")));
    assert!(matches!(dispatch(&mut state, "/help"), Outcome::Reply(r) if r.contains("/calc")));
    assert!(matches!(dispatch(&mut state, "/nope"), Outcome::Reply(r) if r.contains("Unknown command")));
    assert!(matches!(dispatch(&mut state, "/stats"), Outcome::Reply(r) if r.contains("keyword_usage")));
}
