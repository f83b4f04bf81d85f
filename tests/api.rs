use gtv_rs::Client;
use gtv_rs::error::HeatMapError;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Answer exactly one request on a local port with a canned HTTP response.
fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });
    format!("http://{addr}/global-temperature.json")
}

fn response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

#[test]
fn unreachable_host_is_a_fetch_error() {
    // Port 9 (discard) is not expected to serve HTTP locally.
    let client = Client::with_url("http://127.0.0.1:9/global-temperature.json");
    match client.fetch_dataset() {
        Err(HeatMapError::Fetch { url, .. }) => assert_eq!(url, client.url),
        other => panic!("expected Fetch error, got {other:?}"),
    }
}

#[test]
fn non_success_status_is_a_fetch_error() {
    let url = serve_once(response("404 Not Found", "not found"));
    let client = Client::with_url(&url);
    match client.fetch_dataset() {
        Err(HeatMapError::Fetch { url: u, reason }) => {
            assert_eq!(u, url);
            assert!(reason.contains("404"), "reason: {reason}");
        }
        other => panic!("expected Fetch error, got {other:?}"),
    }
}

#[test]
fn body_that_is_not_json_is_a_fetch_error() {
    let url = serve_once(response("200 OK", "<html>oops</html>"));
    assert!(matches!(
        Client::with_url(&url).fetch_dataset(),
        Err(HeatMapError::Fetch { .. })
    ));
}

#[test]
fn successful_response_yields_dataset() {
    let body = r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1753,"month":1,"variance":-1.366}]}"#;
    let url = serve_once(response("200 OK", body));
    let ds = Client::with_url(&url).fetch_dataset().unwrap();
    assert_eq!(ds.base_temperature, 8.66);
    assert_eq!(ds.len(), 1);
}

#[test]
fn default_client_points_at_reference_dataset() {
    assert!(Client::default().url.ends_with("global-temperature.json"));
}
