// src/config/consts.rs
use std::time::Duration;

// Site
pub const BASE_URL: &str = "https://www.doctolib.fr";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// WebDriver
pub const CHROMEDRIVER_URL: &str = "http://localhost:9515";
pub const GECKODRIVER_URL: &str = "http://localhost:4444";

// Waits
pub const PAGE_WAIT: Duration = Duration::from_secs(15); // per strategy attempt
pub const CARD_WAIT: Duration = Duration::ZERO;          // card already rendered
pub const FILTER_WAIT: Duration = Duration::from_secs(3); // filter-panel toggles
pub const WAIT_POLL: Duration = Duration::from_millis(250);
pub const SETTLE_AFTER_LOAD: Duration = Duration::from_secs(2);
pub const SETTLE_AFTER_TYPING: Duration = Duration::from_secs(1);
pub const SETTLE_AFTER_SUBMIT: Duration = Duration::from_secs(5);

// Extraction
pub const MAX_CARDS: usize = 20;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LAST_RUN_FILE: &str = "doctors.csv";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_STEM: &str = "doctors";
