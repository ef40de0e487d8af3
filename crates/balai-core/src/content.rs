//! The site-content model — the singleton configuration record that the
//! public site renders and the admin editor mutates.
//!
//! Every field is always present; there are no optionals. A fresh
//! installation starts from the compiled-in [`Default`] value, and the whole
//! document is replaced on every accepted commit. Edits never touch the
//! committed value directly; they go through
//! [`EditBuffer`](crate::edit::EditBuffer).

use serde::{Deserialize, Serialize};

// ─── Sections ────────────────────────────────────────────────────────────────

/// The landing banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSection {
  pub title:       String,
  pub subtitle:    String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
  pub title:       String,
  pub description: String,
  pub mission:     String,
  pub vision:      String,
}

/// One entry in the services listing.
///
/// `id` is the match key for targeted edits; it is unique within
/// [`ServicesSection::items`] and stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
  pub id:          String,
  pub title:       String,
  pub description: String,
  /// Symbolic icon name consumed by the presentation layer; free-form.
  pub icon:        String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesSection {
  pub title: String,
  pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
  pub title:   String,
  pub address: String,
  pub phone:   String,
  pub email:   String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpdeskSection {
  pub title:       String,
  pub description: String,
}

// ─── SiteContent ─────────────────────────────────────────────────────────────

/// The full editable site configuration. Exactly one instance exists per
/// session, owned by [`AppState`](crate::state::AppState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
  pub hero:     HeroSection,
  pub about:    AboutSection,
  pub services: ServicesSection,
  pub contact:  ContactSection,
  pub helpdesk: HelpdeskSection,
}

impl SiteContent {
  /// Look up a service item by its stable id.
  pub fn service_item(&self, id: &str) -> Option<&ServiceItem> {
    self.services.items.iter().find(|item| item.id == id)
  }
}

impl Default for SiteContent {
  fn default() -> Self {
    Self {
      hero: HeroSection {
        title:       "Balai Workers Association".into(),
        subtitle:    "A union for plantation pension-fund employees".into(),
        description: "Building shared prosperity and protecting workers' \
                      rights for a better future."
          .into(),
      },
      about: AboutSection {
        title:       "About Us".into(),
        description: "The association is a workers' union committed to \
                      advancing the rights and welfare of its members."
          .into(),
        mission:     "To be the vehicle through which workers secure their \
                      welfare and the protection of their rights."
          .into(),
        vision:      "Workers who are prosperous, dignified, and protected."
          .into(),
      },
      services: ServicesSection {
        title: "Our Programs".into(),
        items: vec![
          ServiceItem {
            id:          "1".into(),
            title:       "Legal Advocacy".into(),
            description: "Legal assistance and representation for members in \
                          employment disputes."
              .into(),
            icon:        "shield".into(),
          },
          ServiceItem {
            id:          "2".into(),
            title:       "Training & Development".into(),
            description: "Training programs that grow member competence and \
                          skills."
              .into(),
            icon:        "users".into(),
          },
          ServiceItem {
            id:          "3".into(),
            title:       "Pension Fund".into(),
            description: "Oversight of the pension-fund program securing \
                          members' futures."
              .into(),
            icon:        "target".into(),
          },
        ],
      },
      contact: ContactSection {
        title:   "Contact Us".into(),
        address: "123 Union Street, Capital City 10110".into(),
        phone:   "+1 555 0123".into(),
        email:   "info@balai.example.org".into(),
      },
      helpdesk: HelpdeskSection {
        title:       "Reports & Feedback".into(),
        description: "Send us your concerns, complaints, or suggestions. \
                      Every submission feeds into how we evaluate and \
                      improve our services."
          .into(),
      },
    }
  }
}
