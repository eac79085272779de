use recap::prompt::{
    build_user_message, effective_instruction, DEFAULT_INSTRUCTION, SYSTEM_PROMPT,
};

#[test]
fn test_default_instruction_for_missing_or_blank() {
    assert_eq!(effective_instruction(None), DEFAULT_INSTRUCTION);
    assert_eq!(effective_instruction(Some("")), DEFAULT_INSTRUCTION);
    assert_eq!(effective_instruction(Some("   \n\t")), DEFAULT_INSTRUCTION);
}

#[test]
fn test_custom_instruction_is_kept_verbatim() {
    let custom = "Summarize as a haiku.";
    assert_eq!(effective_instruction(Some(custom)), custom);
}

#[test]
fn test_user_message_layout() {
    let message = build_user_message(DEFAULT_INSTRUCTION, "Alice: let's ship Friday.");

    assert!(
        message.starts_with("Instruction:\n"),
        "instruction block should lead the message"
    );
    assert!(
        message.contains("\n\nTranscript:\n"),
        "transcript block should follow a blank line"
    );
    assert!(message.contains(DEFAULT_INSTRUCTION));
    assert!(message.contains("Alice: let's ship Friday."));
}

#[test]
fn test_transcript_is_not_trimmed_in_user_message() {
    let message = build_user_message("x", "  padded transcript  ");
    assert!(message.ends_with("Transcript:\n  padded transcript  "));
}

#[test]
fn test_system_prompt_requests_action_items() {
    assert!(SYSTEM_PROMPT.contains("Action Items"));
    assert!(SYSTEM_PROMPT.contains("meeting notes assistant"));
}
