use super::page_title;

#[test]
fn page_title_names_active_conversation() {
    assert_eq!(page_title(Some("Emily Zhang")), "Emily Zhang · Helpdesk");
}

#[test]
fn page_title_without_selection_is_app_name() {
    assert_eq!(page_title(None), "Helpdesk");
}
