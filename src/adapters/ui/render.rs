//! Terminal rendering of the page view model.
//!
//! `render_page` is a pure function of an immutable `PageModel` snapshot, so
//! every visual property (status line, card set, panel visibility) is testable
//! without a terminal. `TermRenderer` is the thin adapter that prints it.

use crate::domain::page::{FEATURES, NAV_ACTIONS, NAV_LINKS, NO_MATCHES_TEXT, SLIDES};
use crate::domain::{DomainError, ExtractedProfile, JobMatch, PageModel, StatusLine};
use crate::ports::RenderPort;
use std::io::Write;

/// Render one page snapshot to a string.
pub fn render_page(page: &PageModel) -> String {
    let mut out = String::new();

    out.push_str("☰ CareerCraft\n");
    if page.nav.expanded {
        out.push_str(&format!("  {}\n", NAV_LINKS.join(" | ")));
        out.push_str(&format!("  {}\n", NAV_ACTIONS.join(" | ")));
    }

    if page.slider.count() > 0 {
        let dots: String = (0..page.slider.count())
            .map(|i| if i == page.slider.index() { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "\n▸ {}  {}  [offset {}px]\n",
            SLIDES[page.slider.index()],
            dots,
            page.slider.offset_px()
        ));
    }

    out.push_str("\nWhy CareerCraft\n");
    for (i, feature) in FEATURES.iter().enumerate() {
        if page.reveal.is_visible(i) {
            out.push_str(&format!("  • {}\n", feature));
        } else {
            out.push_str("  ·\n");
        }
    }

    out.push_str("\nUpload your resume\n");
    out.push_str(&format!("  Resume: {}\n", page.file_label));

    match &page.status {
        StatusLine::Idle => {}
        StatusLine::InFlight => out.push_str("  ⏳ Uploading and analyzing resume...\n"),
        StatusLine::Failure(line) => out.push_str(&format!("  {}\n", line)),
        StatusLine::Success(profile) => push_summary(&mut out, profile),
    }

    if let Some(report) = &page.report {
        out.push_str("\nMatched Companies\n");
        if report.matches.is_empty() {
            out.push_str(&format!("  {}\n", NO_MATCHES_TEXT));
        } else {
            for job in &report.matches {
                out.push_str(&render_card(job));
            }
        }
    }

    out
}

fn push_summary(out: &mut String, profile: &ExtractedProfile) {
    out.push_str(&format!("  ✅ {}'s resume processed.\n", profile.name));
    out.push_str(&format!("  📧 Email: {}\n", profile.email));
    out.push_str(&format!(
        "  📞 Phone: {}\n",
        profile.phone.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "  💼 Experience: {}\n",
        profile.experience.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!("  🛠️ Skills: {}\n", profile.skills.join(", ")));
}

fn render_card(job: &JobMatch) -> String {
    let mut card = String::new();
    card.push_str(&format!("  ┌ {}\n", job.title));
    card.push_str(&format!(
        "  │ Company: {}\n",
        job.company_name.as_deref().unwrap_or("Unknown")
    ));
    card.push_str(&format!(
        "  │ Location: {}\n",
        job.location.as_deref().unwrap_or("N/A")
    ));
    card.push_str(&format!(
        "  │ Salary: {}\n",
        job.salary.as_deref().unwrap_or("N/A")
    ));
    card.push_str(&format!("  └ Apply Now -> {}\n", job.url));
    card
}

/// Prints page snapshots to stdout.
pub struct TermRenderer;

impl TermRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPort for TermRenderer {
    fn render(&self, page: &PageModel) -> Result<(), DomainError> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "\n{}", render_page(page)).map_err(|e| DomainError::Ui(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::FILE_PLACEHOLDER;
    use crate::domain::{Command, MatchReport, ResumeFile, failure_line};

    fn alice_report(matches: Vec<JobMatch>) -> MatchReport {
        MatchReport {
            extracted: ExtractedProfile {
                name: "Alice".into(),
                email: "a@x.com".into(),
                phone: None,
                experience: None,
                skills: vec!["Go".into()],
            },
            matches,
            received_at: 1_700_000_000,
        }
    }

    fn engineer() -> JobMatch {
        JobMatch {
            title: "Engineer".into(),
            company_name: None,
            location: None,
            salary: None,
            url: "http://x/1".into(),
        }
    }

    fn card_count(rendered: &str) -> usize {
        rendered.matches("Apply Now ->").count()
    }

    #[test]
    fn idle_page_shows_the_placeholder_and_no_panel() {
        let page = PageModel::new(320, 0.1);
        let rendered = render_page(&page);
        assert!(rendered.contains(&format!("Resume: {}", FILE_PLACEHOLDER)));
        assert!(!rendered.contains("Matched Companies"));
        assert_eq!(card_count(&rendered), 0);
    }

    #[test]
    fn success_scenario_renders_summary_and_one_card_with_fallbacks() {
        let mut page = PageModel::new(320, 0.1);
        page.update(Command::SubmitSucceeded(alice_report(vec![engineer()])));

        let rendered = render_page(&page);
        assert!(rendered.contains("✅ Alice's resume processed."));
        assert!(rendered.contains("📧 Email: a@x.com"));
        assert!(rendered.contains("📞 Phone: N/A"));
        assert!(rendered.contains("💼 Experience: N/A"));
        assert!(rendered.contains("🛠️ Skills: Go"));

        assert!(rendered.contains("Matched Companies"));
        assert_eq!(card_count(&rendered), 1);
        assert!(rendered.contains("┌ Engineer"));
        assert!(rendered.contains("Company: Unknown"));
        assert!(rendered.contains("Location: N/A"));
        assert!(rendered.contains("Salary: N/A"));
        assert!(rendered.contains("Apply Now -> http://x/1"));
    }

    #[test]
    fn cards_render_in_response_order() {
        let mut page = PageModel::new(320, 0.1);
        let mut second = engineer();
        second.title = "Analyst".into();
        page.update(Command::SubmitSucceeded(alice_report(vec![
            engineer(),
            second,
        ])));

        let rendered = render_page(&page);
        assert_eq!(card_count(&rendered), 2);
        let first_pos = rendered.find("┌ Engineer").unwrap();
        let second_pos = rendered.find("┌ Analyst").unwrap();
        assert!(first_pos < second_pos);
    }

    #[test]
    fn empty_matches_render_one_placeholder_and_a_visible_panel() {
        let mut page = PageModel::new(320, 0.1);
        page.update(Command::SubmitSucceeded(alice_report(vec![])));

        let rendered = render_page(&page);
        assert!(rendered.contains("Matched Companies"));
        assert_eq!(rendered.matches(NO_MATCHES_TEXT).count(), 1);
        assert_eq!(card_count(&rendered), 0);
    }

    #[test]
    fn service_failure_keeps_the_panel_hidden_and_shows_the_payload_message() {
        let mut page = PageModel::new(320, 0.1);
        page.update(Command::SubmitStarted);
        page.update(Command::SubmitFailed(failure_line(
            &DomainError::Service {
                status: 500,
                message: "bad file".into(),
            },
        )));

        let rendered = render_page(&page);
        let status = rendered
            .lines()
            .find(|l| l.contains("Upload error"))
            .unwrap();
        assert!(status.ends_with("bad file"));
        assert!(!rendered.contains("Matched Companies"));
        assert_eq!(card_count(&rendered), 0);
    }

    #[test]
    fn in_flight_page_shows_progress_and_clears_prior_cards() {
        let mut page = PageModel::new(320, 0.1);
        page.update(Command::SubmitSucceeded(alice_report(vec![engineer()])));
        page.update(Command::SubmitStarted);

        let rendered = render_page(&page);
        assert!(rendered.contains("⏳ Uploading and analyzing resume..."));
        assert_eq!(card_count(&rendered), 0);
        assert!(!rendered.contains("Matched Companies"));
    }

    #[test]
    fn local_rejection_after_success_keeps_the_cards_on_screen() {
        let mut page = PageModel::new(320, 0.1);
        page.update(Command::SubmitSucceeded(alice_report(vec![engineer()])));
        page.update(Command::SubmitFailed(failure_line(
            &DomainError::NoFileSelected,
        )));

        let rendered = render_page(&page);
        assert!(rendered.contains("❗ Please select a file to upload."));
        assert!(rendered.contains("Matched Companies"));
        assert_eq!(card_count(&rendered), 1);
    }

    #[test]
    fn identical_submissions_render_identically() {
        let run = || {
            let mut page = PageModel::new(320, 0.1);
            page.update(Command::SelectFile(Some(ResumeFile::new(
                "alice.pdf",
                b"%PDF".to_vec(),
            ))));
            page.update(Command::SubmitStarted);
            page.update(Command::SubmitSucceeded(alice_report(vec![engineer()])));
            render_page(&page)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn slider_tick_moves_the_rendered_offset() {
        let mut page = PageModel::new(320, 0.1);
        assert!(render_page(&page).contains("[offset 0px]"));
        page.update(Command::SliderTick);
        assert!(render_page(&page).contains("[offset 320px]"));
    }

    #[test]
    fn menu_toggle_shows_and_hides_both_nav_regions() {
        let mut page = PageModel::new(320, 0.1);
        let collapsed = render_page(&page);
        assert!(!collapsed.contains("Login"));

        page.update(Command::ToggleMenu);
        let expanded = render_page(&page);
        assert!(expanded.contains(&NAV_LINKS.join(" | ")));
        assert!(expanded.contains(&NAV_ACTIONS.join(" | ")));

        page.update(Command::ToggleMenu);
        assert!(!render_page(&page).contains("Login"));
    }
}
