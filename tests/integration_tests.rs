//! Integration tests using mock HTTP server
//!
//! Drives the public `AshbyClient` end to end: facade → resources →
//! paginator → executor → reqwest → wiremock.

use ashby_client::models::{Candidate, FromRaw};
use ashby_client::{AshbyClient, ClientConfig, Error, ListParams, NoteType};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helpers
// ============================================================================

fn client_for(server: &MockServer) -> AshbyClient {
    let config = ClientConfig::builder()
        .api_key("test-key")
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build();
    AshbyClient::from_config(config).unwrap()
}

fn ok(results: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"success": true, "results": results}))
}

fn last_page(results: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "results": results,
        "moreDataAvailable": false
    }))
}

async fn mount(server: &MockServer, endpoint: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(format!("/{endpoint}")))
        .respond_with(response)
        .mount(server)
        .await;
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_missing_credential_fails_fast() {
    std::env::remove_var("ASHBY_API_KEY");
    let config = ClientConfig::builder().base_url("http://127.0.0.1:9").build();
    let err = AshbyClient::from_config(config).unwrap_err();
    assert!(matches!(err, Error::Unauthenticated { .. }));
}

#[test]
fn test_invalid_base_url_fails_fast() {
    let config = ClientConfig::builder()
        .api_key("k")
        .base_url("::not a url::")
        .build();
    assert!(matches!(
        AshbyClient::from_config(config),
        Err(Error::InvalidUrl(_))
    ));
}

#[test]
fn test_client_exposes_endpoint_table() {
    let config = ClientConfig::builder().api_key("k").build();
    let client = AshbyClient::from_config(config).unwrap();
    assert_eq!(client.base_url(), "https://api.ashbyhq.com");
    assert!(client
        .endpoints()
        .iter()
        .any(|d| d.name == "interviewSchedule" && d.supports_get));
}

// ============================================================================
// Request Pipeline
// ============================================================================

#[tokio::test]
async fn test_requests_carry_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/job.info"))
        .and(header("Authorization", "Basic dGVzdC1rZXk6"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ok(json!({"id": "job-1", "title": "Engineer"})))
        .expect(1)
        .mount(&server)
        .await;

    let job = client_for(&server).jobs.get("job-1").await.unwrap();
    assert_eq!(job.title, "Engineer");
}

#[tokio::test]
async fn test_error_classification() {
    let server = MockServer::start().await;
    mount(&server, "job.info", ResponseTemplate::new(401)).await;
    mount(&server, "offer.list", ResponseTemplate::new(403)).await;
    mount(&server, "candidate.info", ResponseTemplate::new(429)).await;
    mount(
        &server,
        "application.info",
        ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "errors": ["application_not_found"],
            "errorInfo": {"message": "Application not found"}
        })),
    )
    .await;

    let client = client_for(&server);

    assert!(matches!(
        client.jobs.get("x").await,
        Err(Error::Unauthenticated { .. })
    ));
    assert!(matches!(
        client.generic.offers.list(&ListParams::new()).await,
        Err(Error::Forbidden { .. })
    ));

    let throttled = client.candidates.get("x").await.unwrap_err();
    assert!(throttled.is_rate_limited());

    match client.applications.get("x", false).await.unwrap_err() {
        Error::Api { message, errors } => {
            assert_eq!(message, "Application not found");
            assert_eq!(errors, vec![json!("application_not_found")]);
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_listing_walks_every_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/candidate.list"))
        .and(body_partial_json(json!({"cursor": "page-2"})))
        .respond_with(last_page(json!([{"id": "c3"}])))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/candidate.list"))
        .and(body_partial_json(json!({"cursor": "page-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": [{"id": "c2"}],
            "moreDataAvailable": true,
            "nextCursor": "page-2"
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/candidate.list"))
        .and(body_json(json!({"limit": 100})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": [{"id": "c1"}],
            "moreDataAvailable": true,
            "nextCursor": "page-1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let ids: Vec<String> = client
        .candidates
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_stream_stops_early_without_fetching_more() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/job.list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": [{"id": "j1"}, {"id": "j2"}],
            "moreDataAvailable": true,
            "nextCursor": "next"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut jobs = client.jobs.stream(&[]);
    let first = jobs.try_next().await.unwrap().unwrap();
    assert_eq!(first.id, "j1");
}

#[tokio::test]
async fn test_failure_mid_listing_is_not_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/source.list"))
        .and(body_partial_json(json!({"cursor": "c1"})))
        .respond_with(ResponseTemplate::new(502))
        .with_priority(1)
        .mount(&server)
        .await;
    mount(
        &server,
        "source.list",
        ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "results": [{"id": "s1", "name": "Referral"}],
            "moreDataAvailable": true,
            "nextCursor": "c1"
        })),
    )
    .await;

    let result = client_for(&server)
        .generic
        .sources
        .list(&ListParams::new())
        .await;
    assert!(matches!(result, Err(Error::Transport { status: 502, .. })));
}

#[tokio::test]
async fn test_empty_listing_is_success() {
    let server = MockServer::start().await;
    mount(&server, "closeReason.list", last_page(json!([]))).await;

    let reasons = client_for(&server)
        .generic
        .close_reasons
        .list(&ListParams::new())
        .await
        .unwrap();
    assert!(reasons.is_empty());
}

#[tokio::test]
async fn test_configured_page_size() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user.list"))
        .and(body_json(json!({"limit": 25})))
        .respond_with(last_page(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .api_key("k")
        .base_url(server.uri())
        .page_size(25)
        .build();
    let client = AshbyClient::from_config(config).unwrap();
    client.generic.users.list(&ListParams::new()).await.unwrap();
}

// ============================================================================
// Compositions
// ============================================================================

#[tokio::test]
async fn test_application_with_candidate() {
    let server = MockServer::start().await;
    mount(
        &server,
        "application.info",
        ok(json!({
            "id": "app-1",
            "candidate": {"id": "c1", "name": "Ada"},
            "currentInterviewStage": {"id": "s1", "title": "Screen"}
        })),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/candidate.info"))
        .and(body_json(json!({"id": "c1"})))
        .respond_with(ok(json!({
            "id": "c1",
            "name": "Ada",
            "primaryEmailAddress": {"value": "ada@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let app = client.get_application_with_candidate("app-1").await.unwrap();
    assert_eq!(app.candidate.unwrap().email(), Some("ada@example.com"));

    let stage = client.get_application_stage("app-1").await.unwrap().unwrap();
    assert_eq!(stage.name, "Screen");
}

#[tokio::test]
async fn test_job_funnel_ordering() {
    let server = MockServer::start().await;
    mount(&server, "job.info", ok(json!({"id": "job-1", "defaultInterviewPlanId": "p1"}))).await;
    mount(
        &server,
        "interviewStage.list",
        last_page(json!([
            {"id": "offer", "title": "Offer", "orderInStageGroup": 2},
            {"id": "lead", "title": "Lead"},
            {"id": "screen", "title": "Screen", "orderInStageGroup": 1}
        ])),
    )
    .await;

    let funnel = client_for(&server).get_job_funnel("job-1").await.unwrap();
    let order: Vec<Option<i64>> = funnel.iter().map(|s| s.order_in_stage_group).collect();
    assert_eq!(order, vec![None, Some(1), Some(2)]);
}

#[tokio::test]
async fn test_download_resume() {
    let server = MockServer::start().await;
    mount(&server, "file.info", ok(json!({"url": format!("{}/files/cv", server.uri())}))).await;
    Mock::given(method("GET"))
        .and(path("/files/cv"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"ada.pdf\"")
                .set_body_bytes(b"resume".to_vec()),
        )
        .mount(&server)
        .await;
    mount(
        &server,
        "candidate.info",
        ok(json!({"id": "c1", "resumeFileHandle": "handle-1"})),
    )
    .await;

    let client = client_for(&server);
    let candidate = client.candidates.get("c1").await.unwrap();
    let file = client.download_resume(&candidate).await.unwrap().unwrap();
    assert_eq!(file.filename, "ada.pdf");
    assert_eq!(file.content.as_ref(), b"resume");

    let without = client
        .download_resume(&Candidate::from_raw(&json!({"id": "c2"})))
        .await
        .unwrap();
    assert!(without.is_none());
}

#[tokio::test]
async fn test_job_description_from_matching_posting() {
    let server = MockServer::start().await;
    mount(&server, "job.info", ok(json!({"id": "job-1", "title": "Data Engineer"}))).await;
    mount(
        &server,
        "jobPosting.list",
        last_page(json!([
            {"id": "p-old", "jobId": "job-1", "title": "Data Engineer", "updatedAt": "2022-01-01T00:00:00Z"},
            {"id": "p-new", "jobId": "job-1", "title": "Data Engineer - Remote", "updatedAt": "2025-01-01T00:00:00Z"},
            {"id": "p-other", "jobId": "job-2", "title": "Data Engineer"}
        ])),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/jobPosting.info"))
        .and(body_json(json!({"jobPostingId": "p-old"})))
        .respond_with(ok(json!({"id": "p-old", "descriptionPlain": "Pipelines all day"})))
        .expect(1)
        .mount(&server)
        .await;

    let description = client_for(&server)
        .get_job_description("job-1")
        .await
        .unwrap();
    assert_eq!(description.as_deref(), Some("Pipelines all day"));
}

#[tokio::test]
async fn test_move_stage_and_note() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/application.changeStage"))
        .and(body_json(json!({"applicationId": "app-1", "interviewStageId": "s9"})))
        .respond_with(ok(json!({"id": "app-1", "currentInterviewStage": {"id": "s9", "title": "Offer"}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/candidate.createNote"))
        .and(body_json(json!({"candidateId": "c1", "note": "Moved to offer", "type": "text/plain"})))
        .respond_with(ok(json!({"id": "n1", "content": "Moved to offer"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let app = client.move_application_to_stage("app-1", "s9").await.unwrap();
    assert_eq!(app.stage_name(), Some("Offer"));

    let note = client
        .create_candidate_note("c1", "Moved to offer", NoteType::PlainText)
        .await
        .unwrap();
    assert_eq!(note.id, "n1");
}

#[tokio::test]
async fn test_application_answers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/application.info"))
        .and(body_partial_json(json!({"expand": ["applicationFormSubmissions"]})))
        .respond_with(ok(json!({
            "id": "app-1",
            "applicationFormSubmissions": [{
                "id": "form-1",
                "formDefinition": {"sections": [{"fields": [
                    {"field": {"id": "f1", "title": "Remote OK?"}}
                ]}]},
                "submittedValues": {"f1": true, "_systemfield_name": "Ada"}
            }]
        })))
        .mount(&server)
        .await;

    let answers = client_for(&server)
        .get_application_answers("app-1")
        .await
        .unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].answers.len(), 1);
    assert_eq!(answers[0].answers["Remote OK?"], json!("Yes"));
}
