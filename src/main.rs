//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the upload flow is delegated to UploadService.

use careercraft::adapters::matcher::{HttpMatcherAdapter, MockMatcherAdapter};
use careercraft::adapters::storage::FsResumeSource;
use careercraft::adapters::ui::render::TermRenderer;
use careercraft::adapters::ui::tui::TuiInputPort;
use careercraft::domain::PageModel;
use careercraft::domain::page::SLIDES;
use careercraft::ports::{InputPort, MatcherPort, RenderPort, ResumeSourcePort};
use careercraft::shared::config::AppConfig;
use careercraft::usecases::{ReportService, SlideshowWorker, UploadService};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    careercraft::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_default();

    // --- Matcher: HTTP against the configured endpoint, or mock when offline ---
    let matcher: Arc<dyn MatcherPort> = if cfg.is_offline() {
        warn!("CAREERCRAFT_OFFLINE is set, using mock matcher adapter");
        Arc::new(MockMatcherAdapter::new())
    } else {
        let url = cfg.matcher_url_or_default();
        info!(url = %url, "matcher service configured");
        Arc::new(
            HttpMatcherAdapter::new(url, cfg.request_timeout_secs_or_default())
                .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    };

    // --- Services ---
    let upload = Arc::new(UploadService::new(Arc::clone(&matcher)));
    let resumes: Arc<dyn ResumeSourcePort> = Arc::new(FsResumeSource::new());
    let reports = Arc::new(ReportService::new(PathBuf::from(
        cfg.reports_dir_or_default(),
    )));
    let renderer: Arc<dyn RenderPort> = Arc::new(TermRenderer::new());

    // --- Slideshow: bounded channel for ticks (producer waits when UI is busy) ---
    let tick_queue_size = cfg.tick_queue_size_or_default();
    let (tick_tx, tick_rx) = mpsc::channel(tick_queue_size);
    if SLIDES.is_empty() {
        info!("no slides configured; slider stays idle");
    } else {
        let interval = Duration::from_millis(cfg.slider_interval_ms_or_default());
        info!(
            interval_ms = interval.as_millis() as u64,
            "slideshow started"
        );
        let worker = SlideshowWorker::new(tick_tx, interval);
        tokio::spawn(async move {
            worker.run().await;
        });
    }

    let page = PageModel::new(
        cfg.slider_item_width_or_default(),
        cfg.reveal_threshold_or_default(),
    );

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        upload, resumes, reports, renderer, tick_rx, page,
    ));

    // --- Run (menu -> choose file / upload / browse the page) ---
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
