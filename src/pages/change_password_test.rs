use super::*;

#[test]
fn validate_change_password_input_accepts_matching_confirmation() {
    assert_eq!(
        validate_change_password_input("old-pass", "new-pass", "new-pass"),
        Ok(("old-pass".to_owned(), "new-pass".to_owned()))
    );
}

#[test]
fn validate_change_password_input_requires_all_fields() {
    assert_eq!(
        validate_change_password_input("", "new", "new"),
        Err("Fill in all password fields.")
    );
    assert_eq!(
        validate_change_password_input("old", "", ""),
        Err("Fill in all password fields.")
    );
}

#[test]
fn validate_change_password_input_rejects_mismatch() {
    assert_eq!(
        validate_change_password_input("old", "new-pass", "other"),
        Err("Passwords do not match.")
    );
}

#[test]
fn validate_change_password_input_treats_whitespace_as_significant() {
    assert_eq!(
        validate_change_password_input("old", "new ", "new"),
        Err("Passwords do not match.")
    );
}
