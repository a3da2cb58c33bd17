//! End-to-end flows through the runtime with an in-memory backend.

use chrono::NaiveDate;
use samlookup::client::{RawResponse, SearchBackend, SearchOutcome, SearchRequest};
use samlookup::{render, AppState, OutputFormat, PageLimit, Runtime};
use std::sync::Mutex;

/// Serves pages from a fixed list of entities, ten at a time.
struct PagedBackend {
    total: usize,
    requests: Mutex<Vec<SearchRequest>>,
}

impl PagedBackend {
    fn new(total: usize) -> Self {
        Self {
            total,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn pages_requested(&self) -> Vec<Option<u32>> {
        self.requests.lock().unwrap().iter().map(|r| r.page).collect()
    }
}

impl SearchBackend for PagedBackend {
    async fn fetch(&self, request: &SearchRequest) -> SearchOutcome {
        self.requests.lock().unwrap().push(request.clone());

        let start = request.page.unwrap_or(0) as usize * 10;
        let end = (start + 10).min(self.total);
        let entities: Vec<String> = (start..end).map(|i| entity(i, i % 3 != 0)).collect();
        let body = format!(
            r#"{{"success": true, "totalRecords": {}, "entityData": [{}]}}"#,
            self.total,
            entities.join(",")
        );
        SearchOutcome::classify(&ok(&body))
    }
}

/// Always answers with the same response.
struct FixedBackend(RawResponse);

impl SearchBackend for FixedBackend {
    async fn fetch(&self, _request: &SearchRequest) -> SearchOutcome {
        SearchOutcome::classify(&self.0)
    }
}

fn ok(body: &str) -> RawResponse {
    RawResponse {
        status: 200,
        status_text: "OK".to_string(),
        body: body.to_string(),
    }
}

fn entity(index: usize, selectable: bool) -> String {
    format!(
        r#"{{
            "entityRegistration": {{
                "legalBusinessName": "ENTITY {index}",
                "ueiSAM": "UEI{index:09}",
                "cageCode": "C{index}",
                "registrationExpirationDate": "2030-01-01"
            }},
            "coreData": {{
                "entityInformation": {{ "entityURL": "https://entity{index}.example.com/" }},
                "physicalAddress": {{ "city": "Reston", "stateOrProvinceCode": "VA", "countryCode": "USA" }}
            }},
            "samToolsData": {{
                "isSelectable": {selectable},
                "pdfLinks": {{ "entityPDF": "http://localhost/api/file-download/summary?ueiSAM=UEI{index:09}" }},
                "eightEightNine": {{ "isCompliant": {selectable}, "statusText": "{status}" }},
                "exclusions": {{ "hasExclusions": false, "statusText": "No" }}
            }}
        }}"#,
        status = if selectable { "COMPLIANT" } else { "NOT COMPLIANT" },
    )
}

fn state() -> AppState {
    AppState::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

#[tokio::test]
async fn loads_every_page_when_asked() {
    let mut runtime = Runtime::new(PagedBackend::new(25), state());
    runtime.load("entity", PageLimit::All).await.unwrap();

    let vm = runtime.state().compute_viewmodel();
    assert_eq!(vm.items.len(), 25);
    assert!(vm.show_more.is_none());
    assert!(vm.results_visible && !vm.loading_visible);
    assert_eq!(vm.items[0].title, "ENTITY 0");
    assert_eq!(vm.items[24].title, "ENTITY 24");
    assert!(runtime.into_state().error_message.is_none());
}

#[tokio::test]
async fn requests_pages_in_order() {
    let backend = PagedBackend::new(25);
    let mut runtime = Runtime::new(&backend, state());
    runtime.load("entity", PageLimit::All).await.unwrap();

    assert_eq!(backend.pages_requested(), vec![None, Some(1), Some(2)]);
}

#[tokio::test]
async fn stops_at_page_limit_with_control_armed() {
    let mut runtime = Runtime::new(PagedBackend::new(25), state());
    runtime.load("entity", PageLimit::Pages(2)).await.unwrap();

    let vm = runtime.state().compute_viewmodel();
    assert_eq!(vm.items.len(), 20);
    assert_eq!(
        vm.show_more.map(|s| s.label).as_deref(),
        Some("Next 5 results (5 remaining)")
    );
}

#[tokio::test]
async fn first_page_of_twenty_five() {
    let mut runtime = Runtime::new(PagedBackend::new(25), state());
    runtime.load("entity", PageLimit::Pages(1)).await.unwrap();

    let html = render(runtime.state(), OutputFormat::Html).unwrap();
    assert!(html.contains(r#"<span id="show-more-text">Next 10 results (15 remaining)</span>"#));
    assert_eq!(runtime.state().show_more.next_page(), Some(1));
}

#[tokio::test]
async fn exactly_one_full_page_hides_control() {
    let mut runtime = Runtime::new(PagedBackend::new(10), state());
    runtime.load("entity", PageLimit::All).await.unwrap();

    let html = render(runtime.state(), OutputFormat::Html).unwrap();
    assert!(html.contains(
        r#"<div id="show-more" class="ui basic fluid button" style="display:none">"#
    ));
}

#[tokio::test]
async fn transmits_sanitized_query() {
    let backend = PagedBackend::new(1);
    let mut runtime = Runtime::new(&backend, state());
    runtime
        .load("https://entity.example.com&{x}", PageLimit::Pages(1))
        .await
        .unwrap();

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests[0].query.as_str(), "entity.example.com  x ");
}

#[tokio::test]
async fn selectable_and_disabled_entries_render_differently() {
    let mut runtime = Runtime::new(PagedBackend::new(2), state());
    runtime.load("entity", PageLimit::Pages(1)).await.unwrap();

    let html = render(runtime.state(), OutputFormat::Html).unwrap();
    // Entity 0 is not selectable, entity 1 is.
    assert!(html.contains(r#"<div class="disabled item">"#));
    assert!(html.contains(r#"<div class="ui horizontal black label">NOT COMPLIANT</div>"#));
    assert!(html.contains(
        r#"<a class="item" href="http://localhost/api/file-download/summary?ueiSAM=UEI000000001" target="_blank" rel="noopener noreferrer">"#
    ));
    assert!(html.contains(r#"<div class="ui horizontal blue label">COMPLIANT</div>"#));
    assert!(html.contains("entity1.example.com"));
    assert!(html.contains("Reston, VA USA&nbsp;&nbsp;&nbsp;&nbsp;SAM: UEI000000001&nbsp;&nbsp;&nbsp;&nbsp;CAGE: C1"));
}

#[tokio::test]
async fn zero_results_show_indicator() {
    let mut runtime = Runtime::new(PagedBackend::new(0), state());
    runtime.load("nothing", PageLimit::All).await.unwrap();

    let vm = runtime.state().compute_viewmodel();
    assert!(vm.no_results_visible);
    assert!(!vm.results_visible);

    let text = render(runtime.state(), OutputFormat::Text).unwrap();
    assert_eq!(text, "No results found.\n");
}

#[tokio::test]
async fn application_error_is_shown_verbatim() {
    let backend = FixedBackend(ok(r#"{"success": false, "errors": ["Invalid search"]}"#));
    let mut runtime = Runtime::new(backend, state());
    runtime.load("???", PageLimit::All).await.unwrap();

    let vm = runtime.state().compute_viewmodel();
    assert_eq!(vm.error.as_deref(), Some("Invalid search"));
    assert!(!vm.results_visible && !vm.no_results_visible && !vm.loading_visible);
}

#[tokio::test]
async fn http_errors_are_shown() {
    let cases = [
        (404, "Not Found", "Not Found"),
        (500, "Internal Server Error", "500 Internal Server Error"),
    ];
    for (status, status_text, expected) in cases {
        let backend = FixedBackend(RawResponse {
            status,
            status_text: status_text.to_string(),
            body: String::new(),
        });
        let mut runtime = Runtime::new(backend, state());
        runtime.load("acme", PageLimit::Pages(1)).await.unwrap();

        let html = render(runtime.state(), OutputFormat::Html).unwrap();
        assert!(html.contains(&format!(
            r#"<div id="error-message" class="ui negative message">{expected}</div>"#
        )));
        assert!(html.contains(r#"<div id="results-box" class="ui segment" style="display:none">"#));
    }
}

#[tokio::test]
async fn malformed_body_is_an_error_not_a_crash() {
    let mut runtime = Runtime::new(FixedBackend(ok("<html>oops</html>")), state());
    runtime.load("acme", PageLimit::Pages(1)).await.unwrap();

    assert!(runtime.state().error_message.is_some());
    assert!(runtime.state().items.is_empty());
}

#[tokio::test]
async fn stops_when_a_page_adds_nothing() {
    // Claims 30 records but every page is empty after the first.
    struct Stingy;
    impl SearchBackend for Stingy {
        async fn fetch(&self, request: &SearchRequest) -> SearchOutcome {
            let body = if request.page.is_none() {
                format!(
                    r#"{{"success": true, "totalRecords": 30, "entityData": [{}]}}"#,
                    (0..10).map(|i| entity(i, true)).collect::<Vec<_>>().join(",")
                )
            } else {
                r#"{"success": true, "totalRecords": 30, "entityData": []}"#.to_string()
            };
            SearchOutcome::classify(&ok(&body))
        }
    }

    let mut runtime = Runtime::new(Stingy, state());
    runtime.load("acme", PageLimit::All).await.unwrap();
    assert_eq!(runtime.state().rendered_count(), 10);
}
