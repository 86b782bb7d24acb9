use digiktav::enhance::{PipelineResult, Section, decompose};

#[test]
fn unlabelled_reply_degrades_gracefully() {
    let reply = "I'm sorry, I can only help with Hebrew text.\n\nPlease try again.";
    let result = decompose(reply);
    assert_eq!(
        result,
        PipelineResult {
            full_response: reply.to_string(),
            ..PipelineResult::default()
        }
    );
}

#[test]
fn full_response_is_always_verbatim() {
    for reply in [
        "",
        "   ",
        "ORIGINAL TEXT:",
        "FINAL ENGLISH TRANSLATION:\nHi\n\ntrailing chatter",
        "--- DEMO ---\n--- END ---",
    ] {
        assert_eq!(decompose(reply).full_response, reply);
    }
}

#[test]
fn reply_with_preamble_and_markdown() {
    let reply = "Here are the results:\n\n\
                 **ORIGINAL TEXT:**\nהיום הלכתי לים\n\n\
                 **AFTER SPELLING CORRECTION:**\nהיום הלכתי לים.\n\n\
                 **FINAL ENGLISH TRANSLATION:**\nToday I went to the sea.\n";
    let result = decompose(reply);
    assert_eq!(result.original, "היום הלכתי לים");
    assert_eq!(result.after_spelling, "היום הלכתי לים.");
    assert_eq!(result.final_translation, "Today I went to the sea.");
    assert_eq!(
        result.populated_sections(),
        vec![
            Section::Original,
            Section::AfterSpelling,
            Section::FinalTranslation
        ]
    );
}

#[test]
fn unrequested_sections_are_still_extracted() {
    let result = decompose("AFTER RESTRUCTURING:\nפסקה\n");
    assert_eq!(result.after_restructuring, "פסקה");
}
