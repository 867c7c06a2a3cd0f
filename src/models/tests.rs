//! Tests for entity mapping

use super::*;
use serde_json::{json, Value};
use test_case::test_case;

// ============================================================================
// Defensive Reads
// ============================================================================

#[test]
fn test_missing_fields_take_defaults() {
    let job = Job::from_raw(&json!({}));
    assert_eq!(job.id, "");
    assert_eq!(job.title, "");
    assert!(!job.confidential);
    assert!(job.hiring_team.is_empty());
    assert!(job.employment_type.is_none());
    assert_eq!(job.raw, json!({}));
}

#[test]
fn test_non_object_maps_to_defaults() {
    let user = User::from_raw(&json!("not an object"));
    assert_eq!(user.id, "");
    assert_eq!(user.full_name(), "");
}

#[test]
fn test_wrong_types_are_ignored() {
    let posting = JobPosting::from_raw(&json!({
        "id": 7,
        "isListed": "yes",
        "locationIds": ["loc-1", 3, null]
    }));
    assert_eq!(posting.id, "");
    assert!(posting.is_listed);
    assert_eq!(posting.location_ids, vec!["loc-1".to_string()]);
}

#[test]
fn test_raw_payload_is_retained() {
    let raw = json!({"id": "c1", "name": "Ada", "unmodeled": {"x": 1}});
    let candidate = Candidate::from_raw(&raw);
    assert_eq!(candidate.raw["unmodeled"]["x"], 1);
}

#[test]
fn test_raw_is_not_serialized() {
    let tag = Tag::from_raw(&json!({"id": "t1", "title": "Senior", "extra": true}));
    let out = serde_json::to_value(&tag).unwrap();
    assert_eq!(out, json!({"id": "t1", "title": "Senior"}));
}

// ============================================================================
// Shape Polymorphism
// ============================================================================

#[test_case(json!("Recruiter"), "Recruiter", "" ; "bare string")]
#[test_case(json!({"name": "Recruiter", "id": "r1"}), "Recruiter", "r1" ; "object")]
#[test_case(json!({"title": "Recruiter", "id": "r2"}), "Recruiter", "r2" ; "object with title")]
fn test_hiring_team_role_shapes(raw: Value, name: &str, id: &str) {
    let role = HiringTeamRole::from_raw(&raw);
    assert_eq!(role.name, name);
    assert_eq!(role.id, id);
}

#[test]
fn test_resume_handle_as_string() {
    let candidate = Candidate::from_raw(&json!({"id": "c1", "resumeFileHandle": "h-123"}));
    assert_eq!(candidate.resume_handle(), Some("h-123"));
    let file = candidate.resume_file.unwrap();
    assert_eq!(file.id, "");
    assert_eq!(file.name, "");
}

#[test]
fn test_resume_handle_as_object() {
    let candidate = Candidate::from_raw(&json!({
        "id": "c1",
        "resumeFileHandle": {"id": "f1", "name": "cv.pdf", "handle": "h-456"}
    }));
    assert_eq!(candidate.resume_handle(), Some("h-456"));
    assert_eq!(candidate.resume_file.unwrap().name, "cv.pdf");
}

#[test_case(json!({"id": "c1"}) ; "missing")]
#[test_case(json!({"id": "c1", "resumeFileHandle": null}) ; "null")]
#[test_case(json!({"id": "c1", "resumeFileHandle": ""}) ; "empty string")]
#[test_case(json!({"id": "c1", "resumeFileHandle": {}}) ; "empty object")]
fn test_resume_handle_absent(raw: Value) {
    let candidate = Candidate::from_raw(&raw);
    assert!(candidate.resume_file.is_none());
    assert!(candidate.resume_handle().is_none());
}

#[test]
fn test_archive_reason_shapes() {
    let app = Application::from_raw(&json!({"archiveReason": "Not a fit"}));
    assert_eq!(app.archive_reason.as_deref(), Some("Not a fit"));

    let app = Application::from_raw(&json!({"archiveReason": {"id": "a1", "name": "Withdrew"}}));
    assert_eq!(app.archive_reason.as_deref(), Some("Withdrew"));

    let app = Application::from_raw(&json!({"archiveReason": null}));
    assert!(app.archive_reason.is_none());
}

#[test]
fn test_shape_of() {
    assert_eq!(Shape::of(None), Shape::Absent);
    assert_eq!(Shape::of(Some(&json!(null))), Shape::Absent);
    assert_eq!(Shape::of(Some(&json!(42))), Shape::Absent);
    assert_eq!(Shape::of(Some(&json!("x"))), Shape::Scalar("x"));
    assert!(matches!(Shape::of(Some(&json!({"a": 1}))), Shape::Object(_)));
}

// ============================================================================
// Nested Entities
// ============================================================================

#[test]
fn test_application_nested_entities() {
    let app = Application::from_raw(&json!({
        "id": "app-1",
        "status": "Active",
        "candidate": {"id": "c1", "name": "Ada Lovelace"},
        "jobId": "job-1",
        "currentInterviewStage": {"id": "s1", "title": "Phone Screen", "orderInStageGroup": 2},
        "source": {"id": "src-1", "name": "Referral"},
        "creditedTo": {"id": "u1", "firstName": "Grace", "lastName": "Hopper"},
        "applicationFormSubmissions": [{"id": "form-1"}]
    }));

    assert_eq!(app.candidate_id, "c1");
    assert_eq!(app.candidate_name, "Ada Lovelace");
    assert_eq!(app.job_id, "job-1");
    assert_eq!(app.stage_name(), Some("Phone Screen"));
    assert_eq!(app.source.as_ref().unwrap().name, "Referral");
    assert_eq!(app.credited_to.as_ref().unwrap().full_name(), "Grace Hopper");
    assert!(app.has_form_data());
    assert!(app.candidate.is_none());
}

#[test]
fn test_application_malformed_nested_is_none() {
    let app = Application::from_raw(&json!({
        "id": "app-1",
        "currentInterviewStage": "s1",
        "source": [],
        "creditedTo": {}
    }));
    assert_eq!(app.id, "app-1");
    assert!(app.current_stage.is_none());
    assert!(app.source.is_none());
    assert!(app.credited_to.is_none());
    assert!(!app.has_form_data());
}

#[test]
fn test_application_job_id_from_nested_job() {
    let app = Application::from_raw(&json!({"job": {"id": "job-9"}}));
    assert_eq!(app.job_id, "job-9");
}

#[test]
fn test_candidate_contact_details() {
    let candidate = Candidate::from_raw(&json!({
        "id": "c1",
        "name": "Ada",
        "primaryEmailAddress": {"value": "ada@example.com", "type": "Personal", "isPrimary": true},
        "primaryPhoneNumber": {"value": "+1 555 0100", "type": "Mobile"},
        "links": [{"url": "https://linkedin.com/in/ada", "type": "LinkedIn"}],
        "tags": [{"id": "t1", "title": "Senior"}]
    }));

    assert_eq!(candidate.email(), Some("ada@example.com"));
    assert_eq!(candidate.phone(), Some("+1 555 0100"));
    assert!(candidate.primary_email.as_ref().unwrap().is_primary);
    assert!(!candidate.primary_phone.as_ref().unwrap().is_primary);
    assert_eq!(candidate.links[0].kind, "LinkedIn");
    assert_eq!(candidate.tags[0].title, "Senior");
}

// ============================================================================
// Entity Helpers
// ============================================================================

#[test]
fn test_interview_stage_fallbacks() {
    let stage = InterviewStage::from_raw(&json!({
        "id": "s1",
        "name": "Onsite",
        "orderInInterviewPlan": 4,
        "interviewStageGroup": {"id": "g1", "name": "Interviews"}
    }));
    assert_eq!(stage.name, "Onsite");
    assert_eq!(stage.order_in_stage_group, Some(4));
    assert_eq!(stage.stage_group_id.as_deref(), Some("g1"));
    assert_eq!(stage.stage_group_name.as_deref(), Some("Interviews"));
    assert_eq!(stage.to_string(), "Onsite (ID: s1)");
}

#[test_case(json!({"orderInStageGroup": 0, "orderInInterviewPlan": 5}) => Some(5) ; "zero defers to plan order")]
#[test_case(json!({"orderInStageGroup": 0}) => None ; "zero without plan order")]
#[test_case(json!({"orderInStageGroup": 3.0}) => Some(3) ; "whole float")]
#[test_case(json!({"orderInStageGroup": 2.5, "orderInInterviewPlan": 7}) => Some(7) ; "fractional float ignored")]
#[test_case(json!({"orderInStageGroup": 2, "orderInInterviewPlan": 9}) => Some(2) ; "group order wins")]
fn test_interview_stage_order(raw: Value) -> Option<i64> {
    InterviewStage::from_raw(&raw).order_in_stage_group
}

#[test]
fn test_interview_stage_title_wins() {
    let stage = InterviewStage::from_raw(&json!({"title": "Screen", "name": "Other"}));
    assert_eq!(stage.name, "Screen");
    assert_eq!(stage.sort_order(), 0);
}

#[test]
fn test_job_interview_plan() {
    let job = Job::from_raw(&json!({"defaultInterviewPlanId": "p1", "interviewPlanIds": ["p2"]}));
    assert_eq!(job.interview_plan_id(), Some("p1"));

    let job = Job::from_raw(&json!({"interviewPlanIds": ["p2", "p3"]}));
    assert_eq!(job.interview_plan_id(), Some("p2"));

    let job = Job::from_raw(&json!({}));
    assert_eq!(job.interview_plan_id(), None);
}

#[test]
fn test_posting_description_prefers_plain() {
    let posting = JobPosting::from_raw(&json!({
        "descriptionPlain": "Build things",
        "descriptionHtml": "<p>Other</p>"
    }));
    assert_eq!(posting.description().as_deref(), Some("Build things"));
}

#[test]
fn test_posting_description_strips_html() {
    let posting = JobPosting::from_raw(&json!({"descriptionHtml": "<p>Build <b>things</b></p>"}));
    assert_eq!(posting.description().as_deref(), Some(" Build  things  "));
}

#[test]
fn test_posting_description_absent() {
    assert!(JobPosting::from_raw(&json!({})).description().is_none());
}

#[test]
fn test_posting_defaults_to_listed_and_live() {
    let posting = JobPosting::from_raw(&json!({"id": "p1"}));
    assert!(posting.is_listed);
    assert!(posting.is_live);
}

#[test]
fn test_posting_updated_time() {
    let posting = JobPosting::from_raw(&json!({"updatedAt": "2024-03-01T10:00:00.000Z"}));
    assert!(posting.updated_time().is_some());
    let posting = JobPosting::from_raw(&json!({"updatedAt": "yesterday"}));
    assert!(posting.updated_time().is_none());
}

#[test]
fn test_form_submission_field_value_case_insensitive() {
    let app = Application::from_raw(&json!({
        "applicationFormSubmission": {
            "id": "fs1",
            "formSubmissionValue": [
                {"field": {"id": "f1", "title": "Years of Experience", "type": "Number"}, "value": 5}
            ]
        }
    }));
    let form = app.form_submission.unwrap();
    assert_eq!(form.field_value("years of experience"), Some(&json!(5)));
    assert_eq!(form.field_value("missing"), None);
}

#[test]
fn test_feedback_recommendation_and_score() {
    let feedback = Feedback::from_raw(&json!({
        "id": "fb1",
        "applicationId": "app-1",
        "submitter": {"id": "u1", "firstName": "Grace", "lastName": "Hopper"},
        "submittedValues": [
            {"field": {"title": "Technical Skills"}, "value": 4},
            {"field": {"title": "Overall Recommendation"}, "value": "Strong Yes"}
        ]
    }));
    assert_eq!(feedback.overall_recommendation, Some(json!("Strong Yes")));
    assert_eq!(feedback.score("technical skills"), Some(&json!(4)));
    assert_eq!(feedback.score("culture"), None);
    assert_eq!(feedback.submitter.unwrap().full_name(), "Grace Hopper");
}

#[test]
fn test_note_defaults_to_plain_text() {
    let note = Note::from_raw(&json!({"id": "n1", "content": "Great call"}));
    assert_eq!(note.content_type, "text/plain");
    assert!(note.author.is_none());
}

#[test]
fn test_reason_text_fallback() {
    assert_eq!(ArchiveReason::from_raw(&json!({"text": "Too junior"})).name, "Too junior");
    assert_eq!(CloseReason::from_raw(&json!({"name": "Filled"})).name, "Filled");
    assert_eq!(Project::from_raw(&json!({"title": "Pool"})).name, "Pool");
}
