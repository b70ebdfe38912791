//! Page view model and update cycle.
//!
//! Every user action and timer event maps to one typed [`Command`]; [`PageModel`]
//! is mutated only through [`PageModel::update`]. Rendering is a pure function of
//! the model (see `adapters::ui::render`), so the whole cycle is testable without
//! a terminal.
//!
//! The status region and the matches panel are independent pieces of state:
//! a local rejection (e.g. no file chosen) replaces the status line without
//! touching previously rendered cards, exactly like the page it models.

use crate::domain::entities::{ExtractedProfile, MatchReport, ResumeFile};
use crate::domain::errors::DomainError;
use crate::domain::widgets::{NavMenu, RevealGrid, Slider};

/// Label shown when no resume file is selected.
pub const FILE_PLACEHOLDER: &str = "Choose a file";

/// Placeholder card shown when a successful response carries zero matches.
pub const NO_MATCHES_TEXT: &str = "No matching jobs found.";

/// Navigation regions toggled together by the menu button.
pub const NAV_LINKS: &[&str] = &["Home", "Jobs", "Companies", "About"];
pub const NAV_ACTIONS: &[&str] = &["Login", "Sign Up"];

/// Fixed slide sequence for the banner slider.
pub const SLIDES: &[&str] = &[
    "Land your next internship",
    "Matched to your skills",
    "Apply in one click",
];

/// Content items revealed as the page scrolls into view.
pub const FEATURES: &[&str] = &[
    "Smart resume parsing",
    "Skill-based job matching",
    "Curated internship listings",
    "Direct apply links",
];

/// Rows of content visible at once; scrolling moves this window down.
const VIEWPORT_ROWS: usize = 2;

/// The single status region: one line (or summary block) per upload phase.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusLine {
    Idle,
    InFlight,
    /// Summary block for the extracted profile.
    Success(ExtractedProfile),
    /// Preformatted failure line (see [`failure_line`]).
    Failure(String),
}

/// Typed commands consumed by the update cycle. UI events, timer ticks and
/// submission outcomes all arrive through here.
#[derive(Debug, Clone)]
pub enum Command {
    /// A file was picked (or the selection was cleared).
    SelectFile(Option<ResumeFile>),
    ToggleMenu,
    SliderTick,
    /// Scroll the content viewport down one row.
    Scroll,
    SubmitStarted,
    SubmitSucceeded(MatchReport),
    /// Preformatted status line for the failure.
    SubmitFailed(String),
}

/// The whole page as an immutable-at-render view model.
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub nav: NavMenu,
    pub slider: Slider,
    pub reveal: RevealGrid,
    pub selected: Option<ResumeFile>,
    pub file_label: String,
    pub status: StatusLine,
    /// Last successful exchange; drives the matches panel and report export.
    /// `None` = panel hidden, cards cleared.
    pub report: Option<MatchReport>,
    scroll_pos: usize,
}

impl PageModel {
    pub fn new(slider_item_width: u32, reveal_threshold: f64) -> Self {
        let mut model = Self {
            nav: NavMenu::default(),
            slider: Slider::new(SLIDES.len(), slider_item_width),
            reveal: RevealGrid::new(FEATURES.len(), reveal_threshold),
            selected: None,
            file_label: FILE_PLACEHOLDER.to_string(),
            status: StatusLine::Idle,
            report: None,
            scroll_pos: 0,
        };
        model.sight_viewport();
        model
    }

    /// Apply one command. The only mutation path for the model.
    pub fn update(&mut self, cmd: Command) {
        match cmd {
            Command::SelectFile(file) => {
                self.file_label = match &file {
                    Some(f) => f.file_name.clone(),
                    None => FILE_PLACEHOLDER.to_string(),
                };
                self.selected = file;
            }
            Command::ToggleMenu => self.nav.toggle(),
            Command::SliderTick => self.slider.advance(),
            Command::Scroll => {
                if self.scroll_pos + 1 < FEATURES.len() {
                    self.scroll_pos += 1;
                }
                self.sight_viewport();
            }
            Command::SubmitStarted => {
                // Clears previously rendered cards and hides the panel for
                // the duration of the request.
                self.status = StatusLine::InFlight;
                self.report = None;
            }
            Command::SubmitSucceeded(report) => {
                self.status = StatusLine::Success(report.extracted.clone());
                self.report = Some(report);
                // Form reset happens on the success path only; after a failure
                // the selection is kept so the upload can be retried.
                self.selected = None;
                self.file_label = FILE_PLACEHOLDER.to_string();
            }
            Command::SubmitFailed(line) => {
                // Only the status region changes; the card panel keeps
                // whatever the last started submission left there.
                self.status = StatusLine::Failure(line);
            }
        }
    }

    /// Whether the matches panel is revealed. Shown after any successful
    /// exchange, even one with zero matches.
    pub fn matches_panel_shown(&self) -> bool {
        self.report.is_some()
    }

    pub fn scroll_pos(&self) -> usize {
        self.scroll_pos
    }

    /// Mark every content row inside the current viewport as fully sighted.
    fn sight_viewport(&mut self) {
        for idx in self.scroll_pos..(self.scroll_pos + VIEWPORT_ROWS).min(FEATURES.len()) {
            self.reveal.sighted(idx, 1.0);
        }
    }
}

/// Map a submit failure onto the single status region, with the prefix the
/// page uses to distinguish the local precondition from real errors.
pub fn failure_line(err: &DomainError) -> String {
    match err {
        DomainError::NoFileSelected => "❗ Please select a file to upload.".to_string(),
        other => format!("❌ Upload error: {}", other),
    }
}
