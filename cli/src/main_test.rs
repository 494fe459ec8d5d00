use super::*;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;

use async_trait::async_trait;
use drive::request::{ApiRequest, Method, RequestBody};
use drive::session::MemorySessionStore;
use drive::transport::RawResponse;
use serde_json::json;
use tempfile::TempDir;

const BASE: &str = "http://localhost:3000/api";

#[derive(Default)]
struct StubTransport {
    responses: RefCell<VecDeque<RawResponse>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl StubTransport {
    fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.responses.borrow_mut().push_back(RawResponse { status, body: body.to_string() });
        self
    }
}

#[async_trait(?Send)]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no stubbed response".to_owned()))
    }
}

struct Harness {
    api: Arc<ApiClient<StubTransport>>,
    guard: RouteGuard,
    session: Arc<MemorySessionStore>,
}

impl Harness {
    fn new(transport: StubTransport, token: Option<&str>) -> Self {
        let session = Arc::new(match token {
            Some(token) => MemorySessionStore::with_token(token),
            None => MemorySessionStore::new(),
        });
        let api = Arc::new(ApiClient::new(&ApiConfig::default(), transport, session.clone()));
        let guard = RouteGuard::new(session.clone());
        Self { api, guard, session }
    }

    async fn exec(&self, args: &[&str], stdin: &str) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("drive").chain(args.iter().copied())).unwrap();
        let mut input = Cursor::new(stdin.to_owned());
        let mut out = Vec::new();
        let result = execute(cli.command, Arc::clone(&self.api), &self.guard, &mut input, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    fn sent(&self) -> Vec<(Method, String)> {
        self.api
            .transport()
            .sent
            .borrow()
            .iter()
            .map(|r| (r.method, r.url.trim_start_matches(BASE).to_owned()))
            .collect()
    }
}

fn record(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("http://localhost:3000/uploads/{id}"),
        "createdAt": "2024-01-01T00:00:00Z",
        "ownerId": "u1",
        "accessList": []
    })
}

// =============================================================
// Argument parsing
// =============================================================

#[test]
fn parses_global_flags_and_rm() {
    let cli = Cli::try_parse_from(["drive", "--api-url", "https://d.example.com/api", "-v", "rm", "f1", "--yes"]).unwrap();
    assert_eq!(cli.api_url, "https://d.example.com/api");
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Rm { ref id, yes: true } if id == "f1"));
}

#[test]
fn share_requires_an_email() {
    assert!(Cli::try_parse_from(["drive", "share", "f1"]).is_err());
}

#[test]
fn commands_map_to_guarded_routes() {
    assert_eq!(Command::Ls.route(), Route::Dashboard);
    assert_eq!(Command::Status.route(), Route::Login);
    assert_eq!(Command::Register { email: String::new(), password: None }.route(), Route::Register);
}

// =============================================================
// Session commands
// =============================================================

#[tokio::test]
async fn dashboard_commands_require_session() {
    let h = Harness::new(StubTransport::default(), None);
    let cases: [&[&str]; 6] = [
        &["ls"],
        &["shared"],
        &["rm", "f1", "--yes"],
        &["rename", "f1", "b.txt"],
        &["share", "f1", "a@x.com"],
        &["upload", "a.txt"],
    ];
    for args in cases {
        let (result, _) = h.exec(args, "").await;
        assert!(matches!(result, Err(CliError::NotLoggedIn)), "{args:?}");
    }
    assert!(h.sent().is_empty());
}

#[tokio::test]
async fn login_stores_token() {
    let h = Harness::new(StubTransport::default().reply(200, json!({ "token": "T9" })), None);
    let (result, out) = h.exec(&["login", " a@b.com ", "--password", "pw"], "").await;

    result.unwrap();
    assert_eq!(out, "Logged in as a@b.com\n");
    assert_eq!(h.session.get_token().as_deref(), Some("T9"));
    assert_eq!(h.sent(), vec![(Method::Post, "/auth/login".to_owned())]);
}

#[tokio::test]
async fn login_prompts_for_missing_password() {
    let h = Harness::new(StubTransport::default().reply(200, json!({ "token": "T9" })), None);
    let (result, out) = h.exec(&["login", "a@b.com"], "pw\n").await;

    result.unwrap();
    assert!(out.starts_with("Password: "));
}

#[tokio::test]
async fn failed_login_stays_logged_out() {
    let h = Harness::new(StubTransport::default().reply(401, json!({ "error": "Invalid credentials" })), None);
    let (result, _) = h.exec(&["login", "a@b.com", "--password", "bad"], "").await;

    assert_eq!(result.unwrap_err().to_string(), "Invalid credentials");
    assert_eq!(h.session.get_token(), None);
}

#[tokio::test]
async fn register_does_not_log_in() {
    let h = Harness::new(StubTransport::default().reply(201, json!({ "message": "ok" })), None);
    let (result, out) = h.exec(&["register", "a@b.com", "--password", "pw"], "").await;

    result.unwrap();
    assert_eq!(out, "Registration successful. Please login.\n");
    assert_eq!(h.session.get_token(), None);
}

#[tokio::test]
async fn blank_password_never_reaches_network() {
    let h = Harness::new(StubTransport::default(), None);
    let (result, _) = h.exec(&["login", "a@b.com"], "\n").await;

    assert!(matches!(result, Err(CliError::Input(InputError::MissingCredentials))));
    assert!(h.sent().is_empty());
}

#[tokio::test]
async fn status_then_logout() {
    let h = Harness::new(StubTransport::default(), Some("T1"));
    let (_, out) = h.exec(&["status"], "").await;
    assert_eq!(out, format!("Logged in ({BASE})\n"));

    let (result, out) = h.exec(&["logout"], "").await;
    result.unwrap();
    assert_eq!(out, "Logged out\n");

    let (_, out) = h.exec(&["status"], "").await;
    assert_eq!(out, format!("Not logged in ({BASE})\n"));
    assert!(h.sent().is_empty());
}

// =============================================================
// Dashboard commands
// =============================================================

#[tokio::test]
async fn ls_prints_owned_files() {
    let h = Harness::new(StubTransport::default().reply(200, json!([record("f1", "a.txt")])), Some("T1"));
    let (result, out) = h.exec(&["ls"], "").await;

    result.unwrap();
    assert!(out.starts_with("My Drive\n"));
    assert!(out.contains("a.txt"));
    assert_eq!(h.sent(), vec![(Method::Get, "/files/my-files".to_owned())]);
}

#[tokio::test]
async fn ls_failure_surfaces_server_message() {
    let h = Harness::new(StubTransport::default().reply(500, json!({ "error": "boom" })), Some("T1"));
    let (result, out) = h.exec(&["ls"], "").await;

    assert_eq!(result.unwrap_err().to_string(), "boom");
    assert!(out.is_empty());
}

#[tokio::test]
async fn rm_declined_sends_nothing() {
    let h = Harness::new(StubTransport::default(), Some("T1"));
    let (result, out) = h.exec(&["rm", "f1"], "n\n").await;

    result.unwrap();
    assert!(out.ends_with("Cancelled\n"));
    assert!(h.sent().is_empty());
}

#[tokio::test]
async fn rm_confirmed_deletes_then_refetches_once() {
    let transport = StubTransport::default().reply(200, json!({ "message": "deleted" })).reply(200, json!([]));
    let h = Harness::new(transport, Some("T1"));
    let (result, out) = h.exec(&["rm", "f1"], "y\n").await;

    result.unwrap();
    assert!(out.contains("File deleted\n"));
    assert!(out.ends_with("No files uploaded yet.\n"));
    assert_eq!(
        h.sent(),
        vec![(Method::Delete, "/files/delete/f1".to_owned()), (Method::Get, "/files/my-files".to_owned())]
    );
}

#[tokio::test]
async fn failed_rename_does_not_refetch() {
    let h = Harness::new(StubTransport::default().reply(500, json!({})), Some("T1"));
    let (result, out) = h.exec(&["rename", "f1", "b.txt"], "").await;

    assert_eq!(result.unwrap_err().to_string(), "Rename failed");
    assert!(out.is_empty());
    assert_eq!(h.sent(), vec![(Method::Put, "/files/rename/f1".to_owned())]);
}

#[tokio::test]
async fn blank_rename_is_rejected_locally() {
    let h = Harness::new(StubTransport::default(), Some("T1"));
    let (result, _) = h.exec(&["rename", "f1", "   "], "").await;

    assert!(matches!(result, Err(CliError::Input(InputError::EmptyName))));
    assert!(h.sent().is_empty());
}

#[tokio::test]
async fn share_merges_comma_and_space_separated_emails() {
    let transport = StubTransport::default().reply(200, json!({})).reply(200, json!([]));
    let h = Harness::new(transport, Some("T1"));
    let (result, out) = h.exec(&["share", "f1", "a@x.com,", "b@x.com"], "").await;

    result.unwrap();
    assert!(out.contains("File shared!"));
    let sent = h.api.transport().sent.borrow();
    assert_eq!(sent[0].body, RequestBody::Json(json!({ "userEmails": ["a@x.com", "b@x.com"] })));
}

#[tokio::test]
async fn upload_sends_file_part_and_refetches() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let transport = StubTransport::default()
        .reply(201, record("f9", "notes.txt"))
        .reply(200, json!([record("f9", "notes.txt")]));
    let h = Harness::new(transport, Some("T1"));
    let path_arg = path.to_string_lossy().into_owned();
    let (result, out) = h.exec(&["upload", &path_arg, "--content-type", "text/plain"], "").await;

    result.unwrap();
    assert!(out.starts_with("File uploaded!\n"));
    assert!(out.contains("notes.txt"));

    let sent = h.api.transport().sent.borrow();
    let RequestBody::Multipart { field, file } = &sent[0].body else {
        panic!("expected multipart body, got {:?}", sent[0].body);
    };
    assert_eq!(field, "file");
    assert_eq!(file.file_name, "notes.txt");
    assert_eq!(file.content_type.as_deref(), Some("text/plain"));
    assert_eq!(file.bytes, b"hello");
    assert_eq!(sent.len(), 2);
}

#[tokio::test]
async fn upload_of_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.bin");
    let h = Harness::new(StubTransport::default(), Some("T1"));
    let (result, _) = h.exec(&["upload", &missing.to_string_lossy()], "").await;

    assert!(matches!(result, Err(CliError::ReadFile { .. })));
    assert!(h.sent().is_empty());
}
