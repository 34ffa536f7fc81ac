// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "FilterQL";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "filterql";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".filterql";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "filterql.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "FILTERQL_CONFIG";

// =============================================================================
// Environment Variables - Logging
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "FILTERQL_LOG";

/// Environment variable for debug logging
pub const ENV_DEBUG: &str = "FILTERQL_DEBUG";

// =============================================================================
// Environment Variables - Compiler
// =============================================================================

/// Environment variable for the section registration mode (default, global)
pub const ENV_MODE: &str = "FILTERQL_MODE";

/// Environment variable for the table alias prefixed to columns
pub const ENV_TABLE_ALIAS: &str = "FILTERQL_TABLE_ALIAS";

/// Environment variable for the last selected field name (global mode)
pub const ENV_LAST_SELECTED: &str = "FILTERQL_LAST_SELECTED";

/// Environment variable for the date literal format
pub const ENV_DATE_FORMAT: &str = "FILTERQL_DATE_FORMAT";

/// Environment variable toggling the last selected OR duplication
pub const ENV_DUPLICATE_LAST_SELECTED: &str = "FILTERQL_DUPLICATE_LAST_SELECTED";

// =============================================================================
// Compiler Defaults
// =============================================================================

/// Default for OR-ing the last selected filter with the whole clause
pub const DEFAULT_DUPLICATE_LAST_SELECTED: bool = true;
