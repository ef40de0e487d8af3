//! Plain-text rendering of the public site and the admin report views.

use balai_core::{
  content::SiteContent,
  report::{Report, SUGGESTED_CATEGORIES},
  state::ReportStats,
};

pub fn site(content: &SiteContent) {
  println!("{}", content.hero.title);
  println!("{}", content.hero.subtitle);
  println!();
  println!("{}", content.hero.description);

  println!();
  println!("## {}", content.about.title);
  println!("{}", content.about.description);
  println!("Mission: {}", content.about.mission);
  println!("Vision:  {}", content.about.vision);

  println!();
  println!("## {}", content.services.title);
  for item in &content.services.items {
    println!("- [{}] {} ({})", item.id, item.title, item.icon);
    println!("  {}", item.description);
  }

  println!();
  println!("## {}", content.contact.title);
  println!("{}", content.contact.address);
  println!("{} | {}", content.contact.phone, content.contact.email);

  println!();
  println!("## {}", content.helpdesk.title);
  println!("{}", content.helpdesk.description);
  println!("Categories: {}", SUGGESTED_CATEGORIES.join(", "));
}

pub fn report(report: &Report) {
  println!(
    "{}  {}  [{}]  {}",
    report.id,
    report.date.format("%Y-%m-%d %H:%M"),
    report.status.label(),
    report.subject,
  );
  println!(
    "    {} <{}>  ({})",
    report.name, report.email, report.category,
  );
  println!("    {}", report.message);
}

pub fn stats(stats: &ReportStats) {
  println!("new:      {}", stats.new);
  println!("reviewed: {}", stats.reviewed);
  println!("resolved: {}", stats.resolved);
  println!("total:    {}", stats.total);
}
