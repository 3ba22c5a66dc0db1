// src/config/consts.rs

// Layout under the base directory
pub const INPUT_SUBDIR: &str = "csv";
pub const RESULT_SUBDIR: &str = "result";
pub const LOG_FILE: &str = "debug.log";

// Required input columns
pub const COL_NAME: &str = "frontFaceName";
pub const COL_URL: &str = "mtgmintcardUrl";

// Console
pub const PROMPT: &str = "Please enter the CSV file name: ";
pub const READ_OK: &str = "File successfully read.";
pub const INPUT_FAILED: &str = "File cannot be accessed! :(";

// Validation
pub const FOIL_MARKER: &str = "Foil";
pub const REASON_WRONG_URL: &str = "Wrong URL";
pub const REASON_NOT_FOIL: &str = "Card is not foil";
pub const REASON_NOT_PREFIX: &str = "Card is not ";
pub const REASON_NAV_PREFIX: &str = "Navigation failed: ";

// Report separators, per channel
pub const CONSOLE_SEP: &str = " | ";
pub const FILE_SEP: &str = ",";

// Browser
pub const NAV_TIMEOUT_SECS: u64 = 30;
pub const READY_POLL_MS: u64 = 50;
pub const BLANK_PAGE: &str = "about:blank";

// Environment overrides
pub const ENV_HOME: &str = "MINT_CHECK_HOME";
pub const ENV_ON_NAV_ERROR: &str = "MINT_CHECK_ON_NAV_ERROR";
pub const ENV_HEADFUL: &str = "MINT_CHECK_HEADFUL";
pub const ENV_CHROME: &str = "MINT_CHECK_CHROME";
pub const ENV_NO_SANDBOX: &str = "MINT_CHECK_NO_SANDBOX";
pub const ENV_NAV_TIMEOUT: &str = "MINT_CHECK_NAV_TIMEOUT_SECS";
