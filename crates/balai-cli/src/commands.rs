//! Command dispatch over the coordinator's boundary operations.

use std::str::FromStr as _;

use anyhow::{Context, Result, bail};
use balai_core::{
  edit::ServiceItemField,
  report::{NewReport, ReportStatus},
  state::AppState,
  store::BlobStore,
};

use crate::{AdminCommand, Command, render};

pub fn run<S: BlobStore>(state: &mut AppState<S>, command: Command) -> Result<()> {
  match command {
    Command::Show => {
      render::site(state.content());
      Ok(())
    }

    Command::Submit { name, email, category, subject, message } => {
      let report =
        state.submit(NewReport { name, email, category, subject, message })?;
      println!("Report received. Reference: {}", report.id);
      Ok(())
    }

    Command::Admin(command) => {
      state.enter_admin();
      let result = run_admin(state, command);
      state.exit_admin();
      result
    }
  }
}

fn run_admin<S: BlobStore>(
  state: &mut AppState<S>,
  command: AdminCommand,
) -> Result<()> {
  match command {
    AdminCommand::Reports { status } => {
      let filter = status.as_deref().map(parse_status).transpose()?;
      let shown = state
        .reports()
        .iter()
        .filter(|r| filter.map_or(true, |s| r.status == s));
      let mut any = false;
      for report in shown {
        render::report(report);
        any = true;
      }
      if !any {
        println!("No reports.");
      }
      Ok(())
    }

    AdminCommand::Status { id, status } => {
      let status = parse_status(&status)?;
      state.set_status(id, status)?;
      println!("Report {id} marked: {}", status.label());
      Ok(())
    }

    AdminCommand::Remove { id } => {
      state.remove(id)?;
      println!("Report {id} deleted.");
      Ok(())
    }

    AdminCommand::Edit { set, service } => {
      if set.is_empty() && service.is_empty() {
        bail!("nothing to edit; pass --set and/or --service");
      }

      let mut buffer = state.begin_edit();
      for assignment in &set {
        let (path, value) = split_assignment(assignment)?;
        buffer.set_field(path, value)?;
      }
      for assignment in &service {
        let (target, value) = split_assignment(assignment)?;
        let (id, field) = target
          .split_once(':')
          .with_context(|| format!("expected ID:FIELD=VALUE, got {assignment:?}"))?;
        buffer.set_service_item_field(id, ServiceItemField::parse(field)?, value);
      }

      state.commit(buffer)?;
      println!("Content saved.");
      Ok(())
    }

    AdminCommand::Stats => {
      render::stats(&state.report_stats());
      Ok(())
    }
  }
}

fn parse_status(raw: &str) -> Result<ReportStatus> {
  ReportStatus::from_str(raw).with_context(|| {
    format!("unknown status {raw:?} (expected new, reviewed, or resolved)")
  })
}

fn split_assignment(raw: &str) -> Result<(&str, &str)> {
  raw
    .split_once('=')
    .with_context(|| format!("expected an assignment of the form KEY=VALUE, got {raw:?}"))
}
