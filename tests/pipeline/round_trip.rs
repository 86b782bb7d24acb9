use digiktav::enhance::{
    EnhancementOptions, Section, TranslationStyle, compose_prompt, decompose, demo_response,
};
use strum::IntoEnumIterator;

#[test]
fn well_formed_reply_recovers_every_body() {
    let bodies = [
        "המקור כפי שנסרק",
        "המקור לאחר תיקון איות",
        "המקור לאחר\nשיפור מבנה",
        "סיכום קצר",
        "A short English summary.",
    ];
    let reply: String = Section::iter()
        .zip(bodies)
        .map(|(section, body)| format!("{}\n  {body}  \n\n", section.header()))
        .collect();

    let result = decompose(&reply);
    for (section, body) in Section::iter().zip(bodies) {
        assert_eq!(result.section(section), body, "{section}");
    }
    assert_eq!(result.full_response, reply);
}

#[test]
fn dashed_lines_in_bodies_survive() {
    let bodies = [
        "--- א ---",
        "טופס בקשה\n----------\nשם: דני",
        "------",
        "שורה\n--- סוף עמוד ---\nהמשך",
        "Request form\n---",
    ];
    let reply: String = Section::iter()
        .zip(bodies)
        .map(|(section, body)| format!("{}\n{body}\n\n", section.header()))
        .collect();

    let result = decompose(&reply);
    for (section, body) in Section::iter().zip(bodies) {
        assert_eq!(result.section(section), body, "{section}");
    }
}

#[test]
fn demo_reply_decomposes_for_every_flag_set() {
    for mask in 0u8..16 {
        let options = EnhancementOptions {
            enable_spelling_correction: mask & 1 != 0,
            enable_structuring: mask & 2 != 0,
            enable_summarization: mask & 4 != 0,
            enable_translation: mask & 8 != 0,
            translation_style: TranslationStyle::Literal,
            ..EnhancementOptions::default()
        };
        let reply = demo_response("וואלה משפט ראשון. משפט שני", &options, "DEMO");
        let result = decompose(&reply);

        assert!(result.original.starts_with("וואלה משפט ראשון. משפט שני"));
        for stage in options.enabled_stages() {
            assert!(
                !result.section(stage.section()).is_empty(),
                "{stage} missing for mask {mask}"
            );
        }
        let expected = 1 + options.enabled_stages().count();
        assert_eq!(result.populated_sections().len(), expected);
    }
}

#[test]
fn echoed_template_yields_placeholders() {
    let options = EnhancementOptions::default().with_summary(20.0);
    let prompt = compose_prompt("טקסט", &options);
    let result = decompose(&prompt);
    assert_eq!(
        result.after_summarization,
        "[Hebrew summary of the processed text]\n\nDo not provide explanations or commentary. \
         Show only the results after each processing step."
    );
}
