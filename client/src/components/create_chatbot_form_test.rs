use super::*;

#[test]
fn draft_requires_a_name() {
    assert_eq!(validate_draft("  ", "d", "gemini-pro"), Err("Name is required"));
}

#[test]
fn draft_trims_fields() {
    let draft = validate_draft("  Support Bot ", "  helps customers  ", "gemini-pro").unwrap();
    assert_eq!(draft.name, "Support Bot");
    assert_eq!(draft.description, "helps customers");
    assert_eq!(draft.model, "gemini-pro");
}

#[test]
fn empty_description_is_allowed() {
    assert!(validate_draft("Bot", "", "gemini-ultra").is_ok());
}
