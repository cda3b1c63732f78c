use super::*;

#[test]
fn empty_query_returns_all_fixtures() {
    assert_eq!(filter_chatbots("").len(), mock::CHATBOTS.len());
    assert_eq!(filter_chatbots("   ").len(), mock::CHATBOTS.len());
}

#[test]
fn filter_matches_name_case_insensitively() {
    let matches = filter_chatbots("hr policies");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "cb_2");
}

#[test]
fn filter_matches_description() {
    let matches = filter_chatbots("developers");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "cb_4");
}

#[test]
fn filter_with_no_hits_is_empty() {
    assert!(filter_chatbots("zebra").is_empty());
}
