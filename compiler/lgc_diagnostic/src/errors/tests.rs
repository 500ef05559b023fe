#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_get_existing_doc() {
    let doc = ErrorDocs::get(ErrorCode::E1004);
    assert!(doc.is_some());
    assert!(doc.unwrap().contains("Unrecognized Field Name"));
}

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no documentation");
    }
    assert_eq!(ErrorDocs::all_codes().count(), ErrorCode::ALL.len());
}

#[test]
fn test_docs_start_with_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap();
        assert!(
            doc.starts_with(&format!("# {code}")),
            "{code} doc should start with its heading"
        );
    }
}
