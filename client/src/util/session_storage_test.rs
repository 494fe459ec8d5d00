use super::*;

#[test]
fn native_build_reads_as_logged_out() {
    let store = LocalStorageSession;
    assert_eq!(store.get_token(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn native_build_refuses_to_persist() {
    let err = LocalStorageSession.set_token("T1").unwrap_err();
    assert!(matches!(err, SessionError::Unavailable(_)));
    assert!(err.to_string().contains("token"));
}

#[test]
fn native_clear_is_a_no_op() {
    assert!(LocalStorageSession.clear_token().is_ok());
}
