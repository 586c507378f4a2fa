//! Integration tests for the USAspending client
//!
//! Each test serves a single canned HTTP response from an in-process
//! `TcpListener` and checks what the client makes of it.

use spending_reporter::{
    AgencyRecord, AgencySource, FetchErrorKind, UsaSpendingClient, UsaSpendingClientConfig,
};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread::{self, JoinHandle};
use std::time::Duration;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const SINGLE_AGENCY_BODY: &str = r#"{"results":[{"toptier_code":"001","agency_name":"Dept of Test","abbreviation":"DOT","budget_authority_amount":1000.0,"outlay_amount":250.0}]}"#;

/// Canned reply for the mock server.
enum Reply {
    Respond { status: &'static str, body: String },
    /// Accept the request, then say nothing for the given duration.
    Stall(Duration),
}

/// Serve one request; the handle yields the raw request head.
fn serve_once(reply: Reply) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
    let url = format!(
        "http://{}/api/v2/references/toptier_agencies/",
        listener.local_addr().expect("local addr")
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).expect("read request") == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        match reply {
            Reply::Respond { status, body } => {
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).expect("write response");
            }
            Reply::Stall(duration) => thread::sleep(duration),
        }
        head
    });

    (url, handle)
}

fn client_for(url: String, timeout: Duration) -> UsaSpendingClient {
    UsaSpendingClient::new(UsaSpendingClientConfig {
        endpoint: url,
        timeout,
        ..Default::default()
    })
    .expect("build client")
}

fn ok(body: impl Into<String>) -> Reply {
    Reply::Respond {
        status: "200 OK",
        body: body.into(),
    }
}

// ============================================================================
// Successful responses
// ============================================================================

#[test]
fn test_fetch_single_agency() {
    let (url, server) = serve_once(ok(SINGLE_AGENCY_BODY));
    let table = client_for(url, Duration::from_secs(5)).fetch();
    server.join().expect("server thread");

    assert_eq!(table.len(), 1);
    assert_eq!(
        table.records()[0],
        AgencyRecord::new("001", "Dept of Test", "DOT", 1000.0, 250.0)
    );
}

#[test]
fn test_fetch_realistic_response() {
    let body = std::fs::read_to_string(Path::new(FIXTURES_DIR).join("toptier_agencies.json"))
        .expect("read fixture");
    let (url, server) = serve_once(ok(body));
    let table = client_for(url, Duration::from_secs(5)).fetch();
    server.join().expect("server thread");

    let codes: Vec<&str> = table.iter().map(|r| r.toptier_code.as_str()).collect();
    assert_eq!(codes, vec!["012", "097", "456"]);

    // Nulls decode as empty values
    let fine_arts = table.find("456").expect("Commission of Fine Arts");
    assert_eq!(fine_arts.abbreviation, "");
    assert_eq!(fine_arts.budget_authority_amount, 0.0);
    assert_eq!(fine_arts.outlay_amount, 0.0);
}

#[test]
fn test_sends_configured_user_agent() {
    let (url, server) = serve_once(ok(r#"{"results":[]}"#));
    let client = UsaSpendingClient::new(UsaSpendingClientConfig {
        endpoint: url,
        user_agent: "spending-reporter-tests/0.1".to_string(),
        timeout: Duration::from_secs(5),
    })
    .expect("build client");
    client.fetch();

    let head = server.join().expect("server thread").to_lowercase();
    assert!(head.starts_with("get /api/v2/references/toptier_agencies/ http/1.1"));
    assert!(head.contains("user-agent: spending-reporter-tests/0.1"));
}

#[test]
fn test_default_user_agent() {
    let (url, server) = serve_once(ok(r#"{"results":[]}"#));
    client_for(url, Duration::from_secs(5)).fetch();

    let head = server.join().expect("server thread").to_lowercase();
    assert!(head.contains("user-agent: mypythonapp/1.0"));
}

#[test]
fn test_missing_results_key_is_empty() {
    let (url, server) = serve_once(ok(r#"{"messages":["nothing here"]}"#));
    let table = client_for(url, Duration::from_secs(5))
        .try_fetch()
        .expect("missing results is not an error");
    server.join().expect("server thread");
    assert!(table.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_http_500_yields_empty_table() {
    let (url, server) = serve_once(Reply::Respond {
        status: "500 Internal Server Error",
        body: r#"{"detail":"boom"}"#.to_string(),
    });
    let client = client_for(url, Duration::from_secs(5));
    assert!(client.fetch().is_empty());
    server.join().expect("server thread");
}

#[test]
fn test_http_500_reports_status() {
    let (url, server) = serve_once(Reply::Respond {
        status: "500 Internal Server Error",
        body: String::new(),
    });
    let err = client_for(url, Duration::from_secs(5))
        .try_fetch()
        .expect_err("500 is an error");
    server.join().expect("server thread");
    assert_eq!(err.fetch_kind(), Some(&FetchErrorKind::Status(500)));
}

#[test]
fn test_malformed_json_is_invalid_response() {
    let (url, server) = serve_once(ok("<html>maintenance</html>"));
    let client = client_for(url, Duration::from_secs(5));
    let err = client.try_fetch().expect_err("malformed body is an error");
    server.join().expect("server thread");
    assert!(matches!(
        err.fetch_kind(),
        Some(FetchErrorKind::InvalidResponse(_))
    ));
}

#[test]
fn test_malformed_json_yields_empty_table() {
    let (url, server) = serve_once(ok(r#"{"results": [{"toptier_code": 12"#));
    assert!(client_for(url, Duration::from_secs(5)).fetch().is_empty());
    server.join().expect("server thread");
}

#[test]
fn test_stalled_server_times_out() {
    let (url, server) = serve_once(Reply::Stall(Duration::from_secs(3)));
    let client = client_for(url, Duration::from_secs(1));

    let err = client.try_fetch().expect_err("stalled server times out");
    assert!(matches!(err.fetch_kind(), Some(FetchErrorKind::Timeout(1))));
    server.join().expect("server thread");
}

#[test]
fn test_stalled_server_fetch_does_not_raise() {
    let (url, server) = serve_once(Reply::Stall(Duration::from_secs(3)));
    let table = client_for(url, Duration::from_secs(1)).fetch();
    assert!(table.is_empty());
    server.join().expect("server thread");
}
