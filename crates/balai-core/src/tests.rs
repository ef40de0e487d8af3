//! Tests for the coordinator, editor, and report registry against
//! [`MemoryStore`].

use chrono::Utc;
use uuid::Uuid;

use crate::{
  content::SiteContent,
  edit::ServiceItemField,
  report::{NewReport, ReportStatus, DEFAULT_CATEGORY},
  state::{AppState, ViewMode},
  store::{BlobStore, MemoryStore, CONTENT_KEY, REPORTS_KEY},
  Error,
};

fn state() -> AppState<MemoryStore> {
  AppState::load(MemoryStore::new())
}

fn submission(subject: &str) -> NewReport {
  NewReport {
    name:     "Ana".into(),
    email:    "ana@x.com".into(),
    category: None,
    subject:  subject.into(),
    message:  "question".into(),
  }
}

// ─── Submission ──────────────────────────────────────────────────────────────

#[test]
fn submit_assigns_id_date_and_new_status() {
  let mut s = state();

  let before = Utc::now();
  let report = s.submit(submission("Leave policy")).unwrap();

  assert!(!report.id.is_nil());
  assert_eq!(report.status, ReportStatus::New);
  assert!(report.date >= before);
  assert!(report.date <= Utc::now());
}

#[test]
fn submit_defaults_category_to_general() {
  let mut s = state();

  let report = s.submit(submission("Leave policy")).unwrap();
  assert_eq!(report.category, DEFAULT_CATEGORY);
  assert_eq!(report.status, ReportStatus::New);

  // An explicitly empty category also falls back.
  let mut input = submission("Other subject");
  input.category = Some("  ".into());
  let report = s.submit(input).unwrap();
  assert_eq!(report.category, DEFAULT_CATEGORY);
}

#[test]
fn submit_keeps_explicit_category() {
  let mut s = state();

  let mut input = submission("Broken elevator");
  input.category = Some("Complaint".into());
  let report = s.submit(input).unwrap();
  assert_eq!(report.category, "Complaint");
}

#[test]
fn submit_empty_required_field_fails_without_side_effects() {
  let mut s = state();
  s.submit(submission("First")).unwrap();

  let mut input = submission("Second");
  input.message = "".into();
  let err = s.submit(input).unwrap_err();
  assert!(matches!(err, Error::MissingField("message")));

  // The list is untouched: still just the first submission.
  assert_eq!(s.reports().len(), 1);
  assert_eq!(s.reports()[0].subject, "First");
}

#[test]
fn submit_accepts_whitespace_only_fields() {
  // Validation is a presence check, nothing stricter: whitespace counts
  // as present and is stored as-is.
  let mut s = state();

  let mut input = submission("Padding");
  input.message = "   ".into();
  let report = s.submit(input).unwrap();
  assert_eq!(report.message, "   ");
}

#[test]
fn list_orders_most_recent_first() {
  let mut s = state();

  let a = s.submit(submission("A")).unwrap();
  let b = s.submit(submission("B")).unwrap();

  let ids: Vec<Uuid> = s.reports().iter().map(|r| r.id).collect();
  assert_eq!(ids, vec![b.id, a.id]);
}

#[test]
fn submitted_reports_survive_reload() {
  let mut s = state();
  let report = s.submit(submission("Persisted")).unwrap();

  let reloaded = AppState::load(s.into_store());
  assert_eq!(reloaded.reports().len(), 1);
  assert_eq!(reloaded.reports()[0], report);
}

// ─── Status transitions ──────────────────────────────────────────────────────

#[test]
fn set_status_changes_only_the_target() {
  let mut s = state();
  let a = s.submit(submission("A")).unwrap();
  let b = s.submit(submission("B")).unwrap();

  s.set_status(a.id, ReportStatus::Reviewed).unwrap();

  let got_a = s.reports().iter().find(|r| r.id == a.id).unwrap();
  let got_b = s.reports().iter().find(|r| r.id == b.id).unwrap();

  // Target: only the status differs.
  assert_eq!(got_a.status, ReportStatus::Reviewed);
  assert_eq!(
    (&got_a.name, &got_a.email, &got_a.subject, &got_a.message, got_a.date),
    (&a.name, &a.email, &a.subject, &a.message, a.date),
  );

  // Everything else: byte-for-byte the submitted report.
  assert_eq!(got_b, &b);
}

#[test]
fn set_status_is_idempotent() {
  let mut s = state();
  let report = s.submit(submission("A")).unwrap();

  s.set_status(report.id, ReportStatus::Resolved).unwrap();
  s.set_status(report.id, ReportStatus::Resolved).unwrap();

  assert_eq!(s.reports()[0].status, ReportStatus::Resolved);
}

#[test]
fn status_transitions_are_unordered() {
  let mut s = state();
  let report = s.submit(submission("A")).unwrap();

  // resolved straight from new, then back again
  s.set_status(report.id, ReportStatus::Resolved).unwrap();
  s.set_status(report.id, ReportStatus::New).unwrap();
  assert_eq!(s.reports()[0].status, ReportStatus::New);
}

#[test]
fn set_status_unknown_id_errors_and_leaves_list_identical() {
  let mut s = state();
  s.submit(submission("A")).unwrap();
  let before = serde_json::to_string(s.reports()).unwrap();

  let err = s.set_status(Uuid::new_v4(), ReportStatus::Reviewed).unwrap_err();
  assert!(matches!(err, Error::ReportNotFound(_)));

  let after = serde_json::to_string(s.reports()).unwrap();
  assert_eq!(before, after);
}

// ─── Removal ─────────────────────────────────────────────────────────────────

#[test]
fn remove_deletes_exactly_one() {
  let mut s = state();
  let a = s.submit(submission("A")).unwrap();
  let b = s.submit(submission("B")).unwrap();

  s.remove(a.id).unwrap();

  assert_eq!(s.reports().len(), 1);
  assert!(s.reports().iter().all(|r| r.id != a.id));
  assert_eq!(s.reports()[0].id, b.id);
}

#[test]
fn remove_unknown_id_errors_and_leaves_list_identical() {
  let mut s = state();
  s.submit(submission("A")).unwrap();
  let before = serde_json::to_string(s.reports()).unwrap();

  let err = s.remove(Uuid::new_v4()).unwrap_err();
  assert!(matches!(err, Error::ReportNotFound(_)));
  assert_eq!(before, serde_json::to_string(s.reports()).unwrap());
}

#[test]
fn removal_is_permanent_across_reload() {
  let mut s = state();
  let a = s.submit(submission("A")).unwrap();
  s.submit(submission("B")).unwrap();
  s.remove(a.id).unwrap();

  let reloaded = AppState::load(s.into_store());
  assert_eq!(reloaded.reports().len(), 1);
  assert!(reloaded.reports().iter().all(|r| r.id != a.id));
}

// ─── Stats ───────────────────────────────────────────────────────────────────

#[test]
fn report_stats_count_by_status() {
  let mut s = state();
  let a = s.submit(submission("A")).unwrap();
  s.submit(submission("B")).unwrap();
  s.submit(submission("C")).unwrap();
  s.set_status(a.id, ReportStatus::Resolved).unwrap();

  let stats = s.report_stats();
  assert_eq!(stats.new, 2);
  assert_eq!(stats.reviewed, 0);
  assert_eq!(stats.resolved, 1);
  assert_eq!(stats.total, 3);
}

// ─── Content editing ─────────────────────────────────────────────────────────

#[test]
fn edits_do_not_touch_committed_content_until_commit() {
  let mut s = state();

  let mut buffer = s.begin_edit();
  buffer.set_field("hero.title", "X").unwrap();
  assert_eq!(buffer.content().hero.title, "X");

  // committed value unchanged; the buffer was never committed
  assert_eq!(s.content().hero.title, SiteContent::default().hero.title);

  s.commit(buffer).unwrap();
  assert_eq!(s.content().hero.title, "X");
}

#[test]
fn commit_round_trips_through_the_store() {
  let mut s = state();

  let mut buffer = s.begin_edit();
  buffer.set_field("hero.title", "X").unwrap();
  s.commit(buffer).unwrap();

  let reloaded = AppState::load(s.into_store());
  assert_eq!(reloaded.content().hero.title, "X");

  // Every other field is identical to the pre-edit value.
  let mut expected = SiteContent::default();
  expected.hero.title = "X".into();
  assert_eq!(reloaded.content(), &expected);
}

#[test]
fn set_field_unknown_path_errors() {
  let s = state();
  let mut buffer = s.begin_edit();

  let err = buffer.set_field("hero.motto", "X").unwrap_err();
  assert!(matches!(err, Error::UnknownField(_)));
}

#[test]
fn set_service_item_field_replaces_one_field() {
  let s = state();
  let mut buffer = s.begin_edit();

  buffer.set_service_item_field("2", ServiceItemField::Title, "Workshops");

  let item = buffer.content().service_item("2").unwrap();
  assert_eq!(item.title, "Workshops");
  // Siblings of the edited field are untouched.
  assert_eq!(item.icon, SiteContent::default().service_item("2").unwrap().icon);
  // Other items are untouched.
  assert_eq!(
    buffer.content().service_item("1"),
    SiteContent::default().service_item("1"),
  );
}

#[test]
fn set_service_item_field_unknown_id_is_a_noop() {
  let s = state();
  let mut buffer = s.begin_edit();

  buffer.set_service_item_field("999", ServiceItemField::Title, "X");
  assert_eq!(buffer.content(), &SiteContent::default());
}

#[test]
fn service_item_field_parses_from_name() {
  assert_eq!(ServiceItemField::parse("icon").unwrap(), ServiceItemField::Icon);
  assert!(matches!(
    ServiceItemField::parse("id"),
    Err(Error::UnknownField(_))
  ));
}

// ─── Loading and fallback ────────────────────────────────────────────────────

#[test]
fn load_falls_back_to_defaults_on_empty_store() {
  let s = state();
  assert_eq!(s.content(), &SiteContent::default());
  assert!(s.reports().is_empty());
}

#[test]
fn load_treats_malformed_blobs_as_absent() {
  let mut store = MemoryStore::new();
  store.set(CONTENT_KEY, "{not json").unwrap();
  store.set(REPORTS_KEY, "[{\"id\": 7}]").unwrap();

  let s = AppState::load(store);
  assert_eq!(s.content(), &SiteContent::default());
  assert!(s.reports().is_empty());
}

// ─── View mode ───────────────────────────────────────────────────────────────

#[test]
fn view_mode_starts_public_and_toggles() {
  let mut s = state();
  assert_eq!(s.view_mode(), ViewMode::Public);

  s.enter_admin();
  assert_eq!(s.view_mode(), ViewMode::Admin);

  s.exit_admin();
  assert_eq!(s.view_mode(), ViewMode::Public);
}
