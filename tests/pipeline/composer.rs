use digiktav::enhance::prompt::OUTPUT_FORMAT_HEADING;
use digiktav::enhance::{
    EnhancementOptions, PipelineStage, Section, TranslationStyle, closest_summary_percentage,
    compose_prompt,
};

fn output_format(prompt: &str) -> &str {
    let start = prompt
        .find(OUTPUT_FORMAT_HEADING)
        .expect("prompt has an output format section");
    &prompt[start..]
}

/// Every subset of the four stages.
fn all_option_sets() -> Vec<EnhancementOptions> {
    (0u8..16)
        .map(|mask| EnhancementOptions {
            enable_spelling_correction: mask & 1 != 0,
            enable_structuring: mask & 2 != 0,
            enable_summarization: mask & 4 != 0,
            enable_translation: mask & 8 != 0,
            ..EnhancementOptions::default()
        })
        .collect()
}

#[test]
fn composer_is_deterministic() {
    for options in all_option_sets() {
        let first = compose_prompt("כתב יד עברי", &options);
        let second = compose_prompt("כתב יד עברי", &options);
        assert_eq!(first, second);
    }
}

#[test]
fn output_headers_match_enabled_flags() {
    for options in all_option_sets() {
        let prompt = compose_prompt("טקסט", &options);
        let format = output_format(&prompt);
        assert!(format.contains(Section::Original.header()));
        for stage in [
            PipelineStage::SpellingCorrection,
            PipelineStage::Restructuring,
            PipelineStage::Summarization,
            PipelineStage::Translation,
        ] {
            assert_eq!(
                format.contains(stage.section().header()),
                options.is_enabled(stage),
                "{stage} header presence should follow its flag in {options:?}"
            );
        }
    }
}

#[test]
fn step_numbers_count_enabled_stages_only() {
    for options in all_option_sets() {
        let prompt = compose_prompt("טקסט", &options);
        let enabled: Vec<_> = options.enabled_stages().collect();
        for (index, stage) in enabled.iter().enumerate() {
            let step = format!("STEP {}: {}", index + 1, stage.step_title());
            assert!(prompt.contains(&step), "missing {step:?}");
        }
        assert!(!prompt.contains(&format!("STEP {}:", enabled.len() + 1)));
    }
}

#[test]
fn hebrew_translation_example() {
    let options = EnhancementOptions::default().with_translation(TranslationStyle::Natural);
    let prompt = compose_prompt("שלום עולם", &options);

    assert_eq!(prompt.matches("STEP ").count(), 1);
    assert!(prompt.contains("STEP 1: TRANSLATION"));

    let format = output_format(&prompt);
    let headers: Vec<&str> = format
        .lines()
        .filter(|line| line.ends_with(':') && line.chars().all(|c| !c.is_lowercase()))
        .collect();
    assert_eq!(headers, vec!["ORIGINAL TEXT:", "FINAL ENGLISH TRANSLATION:"]);
}

#[test]
fn slider_values_snap() {
    assert_eq!(closest_summary_percentage(23.0), 20);
    assert_eq!(closest_summary_percentage(28.0), 35);

    let prompt = compose_prompt("טקסט", &EnhancementOptions::default().with_summary(28.0));
    assert!(prompt.contains("Create a 35% summary"));
}
