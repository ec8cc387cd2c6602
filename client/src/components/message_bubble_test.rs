use super::is_activation_key;

#[test]
fn enter_and_space_activate_customer_bubble() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
}

#[test]
fn other_keys_do_not_activate() {
    for key in ["Tab", "Escape", "a", "Spacebar", ""] {
        assert!(!is_activation_key(key), "{key:?} should not activate");
    }
}
