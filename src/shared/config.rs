//! Application configuration. Matcher endpoint, UI timings, paths.

use serde::Deserialize;

/// Default upload endpoint of the matcher service.
pub const DEFAULT_MATCHER_URL: &str = "http://127.0.0.1:8000/api/upload_resume/";

/// Default capacity for the slider tick channel. Bounded channel provides
/// backpressure: when full, the slideshow producer waits on send().await until
/// the page loop drains.
pub const DEFAULT_TICK_QUEUE_SIZE: usize = 32;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Absolute upload URL. Read from CAREERCRAFT_MATCHER_URL.
    #[serde(default)]
    pub matcher_url: Option<String>,

    /// Request timeout for the whole upload/match exchange, in seconds.
    /// Read from CAREERCRAFT_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Slider auto-advance interval in ms (default 3000). Read from CAREERCRAFT_SLIDER_INTERVAL_MS.
    #[serde(default)]
    pub slider_interval_ms: Option<u64>,

    /// Slide item width in px; the translation offset is index * width (default 320).
    /// Read from CAREERCRAFT_SLIDER_ITEM_WIDTH.
    #[serde(default)]
    pub slider_item_width: Option<u32>,

    /// Minimum visible fraction before a content item reveals (default 0.1).
    /// Read from CAREERCRAFT_REVEAL_THRESHOLD.
    #[serde(default)]
    pub reveal_threshold: Option<f64>,

    /// Directory for exported match reports (default ./reports).
    /// Read from CAREERCRAFT_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Max buffered slider ticks (backpressure). Read from CAREERCRAFT_TICK_QUEUE_SIZE.
    #[serde(default)]
    pub tick_queue_size: Option<usize>,

    /// Use the mock matcher instead of HTTP. Read from CAREERCRAFT_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("CAREERCRAFT"));
        if let Ok(path) = std::env::var("CAREERCRAFT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the matcher upload URL. Defaults to the local dev service.
    pub fn matcher_url_or_default(&self) -> String {
        self.matcher_url
            .clone()
            .unwrap_or_else(|| DEFAULT_MATCHER_URL.to_string())
    }

    /// Returns the request timeout in seconds. Defaults to 60.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(60)
    }

    /// Returns the slider interval in milliseconds. Defaults to 3000.
    pub fn slider_interval_ms_or_default(&self) -> u64 {
        self.slider_interval_ms.unwrap_or(3000)
    }

    /// Returns the slide item width in pixels. Defaults to 320.
    pub fn slider_item_width_or_default(&self) -> u32 {
        self.slider_item_width.unwrap_or(320)
    }

    /// Returns the reveal threshold. Defaults to 0.1.
    pub fn reveal_threshold_or_default(&self) -> f64 {
        self.reveal_threshold.unwrap_or(0.1)
    }

    /// Returns the reports directory. Defaults to "./reports".
    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| "./reports".to_string())
    }

    /// Returns the tick queue buffer size. Defaults to DEFAULT_TICK_QUEUE_SIZE.
    pub fn tick_queue_size_or_default(&self) -> usize {
        self.tick_queue_size.unwrap_or(DEFAULT_TICK_QUEUE_SIZE)
    }

    /// Returns true when the mock matcher should be used.
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }
}
