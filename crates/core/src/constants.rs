/// Constants used throughout the asyncstore codebase
// Persisted state layout
pub const STORE_FILE_NAME: &str = "react-state-store";
pub const STORE_LOCK_SUFFIX: &str = ".lock";

// Bridge registration
pub const MODULE_NAME: &str = "RCTAsyncLocalStorage";

// Reply messages
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Could not open storage file";

// Environment variable names
pub const XDG_RUNTIME_DIR_VAR: &str = "XDG_RUNTIME_DIR";
pub const ASYNCSTORE_APP_ID_VAR: &str = "ASYNCSTORE_APP_ID";
pub const ASYNCSTORE_RUNTIME_DIR_VAR: &str = "ASYNCSTORE_RUNTIME_DIR";
pub const ASYNCSTORE_LOG_VAR: &str = "ASYNCSTORE_LOG";

// Default log filter when ASYNCSTORE_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
