//! Report types — citizen submissions and their three-state status field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Category applied when a submission leaves the field empty.
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered by the submission form. Advisory only — free-form
/// values are accepted.
pub const SUGGESTED_CATEGORIES: &[&str] =
  &["General", "Complaint", "Suggestion", "Question", "Other"];

// ─── Status ──────────────────────────────────────────────────────────────────

/// Review state of a report. Transitions are unordered — any state is
/// reachable from any other — and always an explicit administrator action.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportStatus {
  New,
  Reviewed,
  Resolved,
}

impl ReportStatus {
  /// Human-readable label for rendering.
  pub fn label(self) -> &'static str {
    match self {
      Self::New => "New",
      Self::Reviewed => "Under review",
      Self::Resolved => "Resolved",
    }
  }
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// One citizen submission. `id` and `date` are assigned at creation and
/// never change; only `status` is ever mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
  pub id:       Uuid,
  pub name:     String,
  pub email:    String,
  pub category: String,
  pub subject:  String,
  pub message:  String,
  /// Creation timestamp; serialized as ISO-8601.
  pub date:     DateTime<Utc>,
  pub status:   ReportStatus,
}

// ─── NewReport ───────────────────────────────────────────────────────────────

/// Input to [`AppState::submit`](crate::state::AppState::submit).
/// `id`, `date`, and `status` are always assigned by the system; they are
/// not accepted from callers.
#[derive(Debug, Clone, Default)]
pub struct NewReport {
  pub name:     String,
  pub email:    String,
  /// Defaults to [`DEFAULT_CATEGORY`] when `None` or empty.
  pub category: Option<String>,
  pub subject:  String,
  pub message:  String,
}

impl NewReport {
  /// Validate and promote to a full [`Report`]. Fails without side effects
  /// when a required field is empty. Presence is the only check — no
  /// trimming, no format validation.
  pub(crate) fn into_report(self) -> Result<Report> {
    require("name", &self.name)?;
    require("email", &self.email)?;
    require("subject", &self.subject)?;
    require("message", &self.message)?;

    let category = self
      .category
      .filter(|c| !c.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());

    Ok(Report {
      id: Uuid::new_v4(),
      name: self.name,
      email: self.email,
      category,
      subject: self.subject,
      message: self.message,
      date: Utc::now(),
      status: ReportStatus::New,
    })
  }
}

fn require(field: &'static str, value: &str) -> Result<()> {
  if value.is_empty() {
    return Err(Error::MissingField(field));
  }
  Ok(())
}
