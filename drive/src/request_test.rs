use super::*;
use serde_json::json;

const BASE: &str = "https://drive.example.com/api";

#[test]
fn json_request_sets_content_type_and_bearer() {
    let req = build_request(
        BASE,
        "/files/rename/f1",
        Method::Put,
        RequestBody::Json(json!({ "newName": "b" })),
        Some("T1"),
    );
    assert_eq!(req.url, "https://drive.example.com/api/files/rename/f1");
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.header("content-type"), Some(JSON_CONTENT_TYPE));
    assert_eq!(req.header("authorization"), Some("Bearer T1"));
}

#[test]
fn request_without_token_has_no_authorization() {
    let req = build_request(
        BASE,
        "/auth/login",
        Method::Post,
        RequestBody::Json(json!({ "email": "a@x.com", "password": "p" })),
        None,
    );
    assert_eq!(req.header(AUTHORIZATION), None);
    assert_eq!(req.header(CONTENT_TYPE), Some(JSON_CONTENT_TYPE));
}

#[test]
fn bodyless_request_has_no_content_type() {
    let req = build_request(BASE, "/files/my-files", Method::Get, RequestBody::Empty, Some("T1"));
    assert_eq!(req.header(CONTENT_TYPE), None);
    assert_eq!(req.header(AUTHORIZATION), Some("Bearer T1"));
}

#[test]
fn multipart_body_passes_through_without_content_type() {
    let file = UploadFile::new("a.txt", b"hello".to_vec()).with_content_type("text/plain");
    let req = build_request(
        BASE,
        "/files/upload",
        Method::Post,
        RequestBody::Multipart { field: UPLOAD_FIELD.to_owned(), file: file.clone() },
        Some("T1"),
    );
    assert_eq!(req.header(CONTENT_TYPE), None);
    assert_eq!(req.body, RequestBody::Multipart { field: "file".to_owned(), file });
}

#[test]
fn method_strings_are_uppercase_http_verbs() {
    let verbs: Vec<_> = [Method::Get, Method::Post, Method::Put, Method::Delete]
        .into_iter()
        .map(Method::as_str)
        .collect();
    assert_eq!(verbs, vec!["GET", "POST", "PUT", "DELETE"]);
}
