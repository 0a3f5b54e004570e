use condense_core::models::generation::GenerationParams;
use condense_model::bedrock::{inference_config, system_prompt};

#[test]
fn deterministic_decoding_uses_zero_temperature() {
    let config = inference_config(&GenerationParams::SUMMARY);
    assert_eq!(config.max_tokens(), Some(150));
    assert_eq!(config.temperature(), Some(0.0));
}

#[test]
fn sampling_leaves_temperature_to_the_model() {
    let params = GenerationParams {
        do_sample: true,
        ..GenerationParams::SUMMARY
    };
    assert_eq!(inference_config(&params).temperature(), None);
}

#[test]
fn prompt_mentions_length_bounds() {
    let prompt = system_prompt(&GenerationParams::SUMMARY);
    assert!(prompt.contains("between 30 and 150 tokens"));
}
