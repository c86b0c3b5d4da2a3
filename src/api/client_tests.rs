use super::*;

#[test]
fn trims_trailing_slash_from_base_url() {
    let client = HttpApiClient::new("http://localhost:8000/").unwrap();
    assert_eq!(client.url("/api/login"), "http://localhost:8000/api/login");
}

#[test]
fn builds_urls_for_all_operations() {
    let client = HttpApiClient::new("http://localhost:8000").unwrap();

    assert_eq!(client.url("/api/login"), "http://localhost:8000/api/login");
    assert_eq!(client.url("/api/start"), "http://localhost:8000/api/start");
    assert_eq!(client.url("/api/submit"), "http://localhost:8000/api/submit");
    assert_eq!(
        client.url("/api/admin/stats"),
        "http://localhost:8000/api/admin/stats"
    );
}
