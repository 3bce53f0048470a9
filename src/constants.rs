/// Auth header sent on every gateway request. The backend accepts two
/// spellings for historical reasons; this client sends only this one.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const CONFIG_FILE: &str = ".gatewayctl.yaml";
pub const ENV_PREFIX: &str = "GATEWAYCTL_";

/// Per-request timeout. Not user-configurable.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fixed page size for key listings; the tool does not paginate further.
pub const KEY_LIST_PAGE_SIZE: u32 = 100;

/// Display format for wire timestamps that parse as RFC 3339.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Key names longer than this are masked in table output.
pub const KEY_MASK_THRESHOLD: usize = 8;
