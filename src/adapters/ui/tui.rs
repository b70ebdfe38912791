//! Implements InputPort. Inquire-based interactive page loop.
//!
//! Every menu action maps to one typed `Command`; the model only changes
//! inside `PageModel::update`, so the loop stays free of rendering and
//! network logic.

use crate::domain::{Command, DomainError, PageModel, failure_line};
use crate::ports::{InputPort, RenderPort, ResumeSourcePort};
use crate::usecases::{ReportService, UploadService};
use async_trait::async_trait;
use indicatif::ProgressBar;
use inquire::ui::RenderConfig;
use inquire::{InquireError, Select, Text};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tracing::warn;

const MENU_CHOOSE: &str = "Choose resume file";
const MENU_UPLOAD: &str = "Upload resume";
const MENU_TOGGLE: &str = "Toggle navigation";
const MENU_SCROLL: &str = "Scroll page";
const MENU_EXPORT: &str = "Export match report";
const MENU_QUIT: &str = "Quit";

const MENU_ITEMS: &[&str] = &[
    MENU_CHOOSE,
    MENU_UPLOAD,
    MENU_TOGGLE,
    MENU_SCROLL,
    MENU_EXPORT,
    MENU_QUIT,
];

/// Applies the global inquire prompt theme. Called once from `init_ui`.
pub fn apply_theme() {
    inquire::set_global_render_config(RenderConfig::default_colored());
}

/// TUI adapter. Inquire menu loop over the page model.
pub struct TuiInputPort {
    upload: Arc<UploadService>,
    resumes: Arc<dyn ResumeSourcePort>,
    reports: Arc<ReportService>,
    renderer: Arc<dyn RenderPort>,
    ticks: Mutex<mpsc::Receiver<Command>>,
    state: Mutex<PageModel>,
}

impl TuiInputPort {
    pub fn new(
        upload: Arc<UploadService>,
        resumes: Arc<dyn ResumeSourcePort>,
        reports: Arc<ReportService>,
        renderer: Arc<dyn RenderPort>,
        ticks: mpsc::Receiver<Command>,
        page: PageModel,
    ) -> Self {
        Self {
            upload,
            resumes,
            reports,
            renderer,
            ticks: Mutex::new(ticks),
            state: Mutex::new(page),
        }
    }

    async fn choose_file(&self, page: &mut PageModel) {
        let path = match Text::new("Resume file path:").prompt() {
            Ok(p) => p,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => return,
            Err(e) => {
                warn!(error = %e, "file prompt failed");
                return;
            }
        };

        let trimmed = path.trim();
        if trimmed.is_empty() {
            page.update(Command::SelectFile(None));
            return;
        }

        match self.resumes.load(Path::new(trimmed)).await {
            Ok(file) => page.update(Command::SelectFile(Some(file))),
            Err(e) => {
                warn!(error = %e, "failed to load resume");
                page.update(Command::SubmitFailed(format!("❌ Could not read file: {}", e)));
            }
        }
    }

    async fn submit(&self, page: &mut PageModel) -> Result<(), DomainError> {
        let spinner = if page.selected.is_some() {
            page.update(Command::SubmitStarted);
            self.renderer.render(page)?;
            Some(in_flight_spinner())
        } else {
            None
        };

        let result = self.upload.submit(page.selected.as_ref()).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match result {
            Ok(report) => page.update(Command::SubmitSucceeded(report)),
            Err(e) => page.update(Command::SubmitFailed(failure_line(&e))),
        }
        Ok(())
    }

    async fn export_report(&self, page: &PageModel) {
        let Some(report) = &page.report else {
            println!("Nothing to export yet. Upload a resume first.");
            return;
        };

        match self.reports.write_report(report).await {
            Ok(path) => println!("Report saved to {}", path.display()),
            Err(e) => {
                warn!(error = %e, "report export failed");
                println!("Could not save the report: {}", e);
            }
        }
    }
}

fn in_flight_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Uploading and analyzing resume...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut ticks = self.ticks.lock().await;
        let mut page = self.state.lock().await;

        loop {
            // Apply slider ticks that arrived while the menu was open.
            while let Ok(cmd) = ticks.try_recv() {
                page.update(cmd);
            }

            self.renderer.render(&page)?;

            let choice = match Select::new("CareerCraft", MENU_ITEMS.to_vec()).prompt() {
                Ok(c) => c,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match choice {
                MENU_CHOOSE => self.choose_file(&mut page).await,
                MENU_UPLOAD => self.submit(&mut page).await?,
                MENU_TOGGLE => page.update(Command::ToggleMenu),
                MENU_SCROLL => page.update(Command::Scroll),
                MENU_EXPORT => self.export_report(&page).await,
                MENU_QUIT => break,
                _ => unreachable!("unknown menu item"),
            }
        }

        Ok(())
    }
}
