use super::*;

#[test]
fn chatbot_by_id_finds_known_ids() {
    assert_eq!(chatbot_by_id("cb_2").name, "HR Policies Assistant");
}

#[test]
fn chatbot_by_id_falls_back_to_first_fixture() {
    assert_eq!(chatbot_by_id("nope").id, "cb_1");
}

#[test]
fn preview_responses_cycle() {
    assert_eq!(preview_response(0), PREVIEW_RESPONSES[0]);
    assert_eq!(preview_response(PREVIEW_RESPONSES.len()), PREVIEW_RESPONSES[0]);
    assert_eq!(preview_response(PREVIEW_RESPONSES.len() + 2), PREVIEW_RESPONSES[2]);
}

#[test]
fn fixtures_are_nonempty() {
    assert!(!CHATBOTS.is_empty());
    assert!(!DOCUMENTS.is_empty());
    assert!(!PRICING_TIERS.is_empty());
    assert!(!LANDING_FAQS.is_empty());
    assert!(!HELP_FAQS.is_empty());
}

#[test]
fn exactly_one_pricing_tier_is_highlighted() {
    assert_eq!(PRICING_TIERS.iter().filter(|t| t.highlighted).count(), 1);
}
