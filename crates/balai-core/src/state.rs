//! [`AppState`] — the single process-wide owner of the committed site
//! content, the report list, and the public/admin view mode.
//!
//! All mutations pass through here, and this type is the sole writer to the
//! store adapter. Every accepted mutation builds the replacement value
//! first, persists it, and only then swaps it in — a failed write leaves
//! the in-memory state at the previously committed value.

use tracing::warn;
use uuid::Uuid;

use crate::{
  content::SiteContent,
  edit::EditBuffer,
  error::{Error, Result},
  report::{NewReport, Report, ReportStatus},
  store::{BlobStore, CONTENT_KEY, REPORTS_KEY},
};

// ─── View mode ───────────────────────────────────────────────────────────────

/// Which surface the session is presenting.
///
/// This is a UI gate only, not a security boundary: no credential is
/// required or verified to enter admin mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
  #[default]
  Public,
  Admin,
}

// ─── Per-status counts ───────────────────────────────────────────────────────

/// Report counts for the admin overview.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportStats {
  pub new:      usize,
  pub reviewed: usize,
  pub resolved: usize,
  pub total:    usize,
}

// ─── AppState ────────────────────────────────────────────────────────────────

/// The application-state coordinator.
pub struct AppState<S: BlobStore> {
  store:     S,
  content:   SiteContent,
  reports:   Vec<Report>,
  view_mode: ViewMode,
}

impl<S: BlobStore> AppState<S> {
  /// Load committed state from `store`.
  ///
  /// An absent blob falls back to the compiled-in default content (or the
  /// empty report list). A malformed or unreadable blob does the same,
  /// logged at WARN — it is a diagnostic event, never surfaced to the user.
  pub fn load(store: S) -> Self {
    let content = match read_blob(&store, CONTENT_KEY) {
      Some(raw) => match serde_json::from_str(&raw) {
        Ok(content) => content,
        Err(err) => {
          warn!(key = CONTENT_KEY, %err, "stored blob is malformed; using defaults");
          SiteContent::default()
        }
      },
      None => SiteContent::default(),
    };

    let reports = match read_blob(&store, REPORTS_KEY) {
      Some(raw) => match serde_json::from_str(&raw) {
        Ok(reports) => reports,
        Err(err) => {
          warn!(key = REPORTS_KEY, %err, "stored blob is malformed; using defaults");
          Vec::new()
        }
      },
      None => Vec::new(),
    };

    Self { store, content, reports, view_mode: ViewMode::Public }
  }

  // ── Read-only views ───────────────────────────────────────────────────────

  pub fn content(&self) -> &SiteContent {
    &self.content
  }

  /// The report list, most-recently-submitted first.
  pub fn reports(&self) -> &[Report] {
    &self.reports
  }

  pub fn view_mode(&self) -> ViewMode {
    self.view_mode
  }

  /// Per-status report counts.
  pub fn report_stats(&self) -> ReportStats {
    let mut stats = ReportStats { total: self.reports.len(), ..Default::default() };
    for report in &self.reports {
      match report.status {
        ReportStatus::New => stats.new += 1,
        ReportStatus::Reviewed => stats.reviewed += 1,
        ReportStatus::Resolved => stats.resolved += 1,
      }
    }
    stats
  }

  /// Consume the coordinator, returning the store adapter. Used by tests to
  /// reload state and assert on what was actually persisted.
  pub fn into_store(self) -> S {
    self.store
  }

  // ── View mode ─────────────────────────────────────────────────────────────

  pub fn enter_admin(&mut self) {
    self.view_mode = ViewMode::Admin;
  }

  pub fn exit_admin(&mut self) {
    self.view_mode = ViewMode::Public;
  }

  // ── Content editing ───────────────────────────────────────────────────────

  /// Start an edit session decoupled from the committed content.
  pub fn begin_edit(&self) -> EditBuffer {
    EditBuffer::new(&self.content)
  }

  /// Promote `buffer` to the committed content and persist it. The only
  /// content operation with a storage side effect — plain edits never
  /// auto-save.
  pub fn commit(&mut self, buffer: EditBuffer) -> Result<()> {
    let content = buffer.into_content();
    let raw = serde_json::to_string(&content)?;
    self
      .store
      .set(CONTENT_KEY, &raw)
      .map_err(|err| Error::Store(err.to_string()))?;
    self.content = content;
    Ok(())
  }

  // ── Report registry ───────────────────────────────────────────────────────

  /// Validate and record a new submission. On success the report is
  /// prepended — most-recent-first ordering is part of the contract — and
  /// the updated list is persisted. On validation failure nothing changes.
  pub fn submit(&mut self, input: NewReport) -> Result<Report> {
    let report = input.into_report()?;

    let mut updated = Vec::with_capacity(self.reports.len() + 1);
    updated.push(report.clone());
    updated.extend(self.reports.iter().cloned());

    self.persist_reports(&updated)?;
    self.reports = updated;
    Ok(report)
  }

  /// Replace the status of the report with `id`; every other field and
  /// every other report is untouched. Setting the current status again is
  /// an idempotent success.
  pub fn set_status(&mut self, id: Uuid, status: ReportStatus) -> Result<()> {
    if !self.reports.iter().any(|r| r.id == id) {
      return Err(Error::ReportNotFound(id));
    }

    let updated: Vec<Report> = self
      .reports
      .iter()
      .cloned()
      .map(|mut report| {
        if report.id == id {
          report.status = status;
        }
        report
      })
      .collect();

    self.persist_reports(&updated)?;
    self.reports = updated;
    Ok(())
  }

  /// Permanently delete the report with `id`. There is no soft-delete and
  /// no undo.
  pub fn remove(&mut self, id: Uuid) -> Result<()> {
    if !self.reports.iter().any(|r| r.id == id) {
      return Err(Error::ReportNotFound(id));
    }

    let updated: Vec<Report> =
      self.reports.iter().filter(|r| r.id != id).cloned().collect();

    self.persist_reports(&updated)?;
    self.reports = updated;
    Ok(())
  }

  fn persist_reports(&mut self, reports: &[Report]) -> Result<()> {
    let raw = serde_json::to_string(reports)?;
    self
      .store
      .set(REPORTS_KEY, &raw)
      .map_err(|err| Error::Store(err.to_string()))
  }
}

/// Read a blob, collapsing store read failures into absence (logged).
fn read_blob<S: BlobStore>(store: &S, key: &str) -> Option<String> {
  match store.get(key) {
    Ok(found) => found,
    Err(err) => {
      warn!(key, %err, "store read failed; treating blob as absent");
      None
    }
  }
}
