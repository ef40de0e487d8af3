//! The edit buffer — a transient, uncommitted copy of
//! [`SiteContent`] under active editing.
//!
//! Edits accumulate in the buffer one field at a time and reach the
//! committed value only through
//! [`AppState::commit`](crate::state::AppState::commit). Dropping a buffer
//! discards its edits.

use std::str::FromStr as _;

use strum::{Display, EnumString};

use crate::{
  content::SiteContent,
  error::{Error, Result},
};

// ─── Field addressing ────────────────────────────────────────────────────────

/// The editable fields of a [`ServiceItem`](crate::content::ServiceItem).
/// `id` is deliberately absent — it is the match key, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceItemField {
  Title,
  Description,
  Icon,
}

impl ServiceItemField {
  /// Parse a field name, mapping failure onto the crate error type.
  pub fn parse(name: &str) -> Result<Self> {
    Self::from_str(name).map_err(|_| Error::UnknownField(name.to_owned()))
  }
}

// ─── EditBuffer ──────────────────────────────────────────────────────────────

/// An editable copy of the committed content.
#[derive(Debug, Clone)]
pub struct EditBuffer {
  content: SiteContent,
}

impl EditBuffer {
  /// Start an edit session from the committed value. The buffer is fully
  /// decoupled; the committed value is untouched until commit.
  pub fn new(current: &SiteContent) -> Self {
    Self { content: current.clone() }
  }

  /// Apply one scalar-field change, addressed by a dotted path such as
  /// `"hero.title"`. A path that names no scalar field is an error — path
  /// strings come from the admin surface, and a typo there is a bug, not
  /// user input.
  pub fn set_field(&mut self, path: &str, value: &str) -> Result<()> {
    let slot = match path {
      "hero.title" => &mut self.content.hero.title,
      "hero.subtitle" => &mut self.content.hero.subtitle,
      "hero.description" => &mut self.content.hero.description,
      "about.title" => &mut self.content.about.title,
      "about.description" => &mut self.content.about.description,
      "about.mission" => &mut self.content.about.mission,
      "about.vision" => &mut self.content.about.vision,
      "services.title" => &mut self.content.services.title,
      "contact.title" => &mut self.content.contact.title,
      "contact.address" => &mut self.content.contact.address,
      "contact.phone" => &mut self.content.contact.phone,
      "contact.email" => &mut self.content.contact.email,
      "helpdesk.title" => &mut self.content.helpdesk.title,
      "helpdesk.description" => &mut self.content.helpdesk.description,
      _ => return Err(Error::UnknownField(path.to_owned())),
    };
    *slot = value.to_owned();
    Ok(())
  }

  /// Replace one field of the service item whose id matches `item_id`.
  ///
  /// An unknown id is a silent no-op: the admin surface only offers ids
  /// that exist, and a stale id (item deleted in another session) should
  /// not abort the rest of the edit.
  pub fn set_service_item_field(
    &mut self,
    item_id: &str,
    field: ServiceItemField,
    value: &str,
  ) {
    let Some(item) = self
      .content
      .services
      .items
      .iter_mut()
      .find(|item| item.id == item_id)
    else {
      return;
    };

    match field {
      ServiceItemField::Title => item.title = value.to_owned(),
      ServiceItemField::Description => item.description = value.to_owned(),
      ServiceItemField::Icon => item.icon = value.to_owned(),
    }
  }

  /// The buffered content, with all edits so far applied.
  pub fn content(&self) -> &SiteContent {
    &self.content
  }

  pub(crate) fn into_content(self) -> SiteContent {
    self.content
  }
}
