//! Application-wide constants
//!
//! Defaults for every configuration key plus the limits enforced on them.

// =============================================================================
// Application metadata
// =============================================================================

/// Default application name, shown as the site name
pub const DEFAULT_APP_NAME: &str = "HST Professional Services";

/// Default application description
pub const DEFAULT_APP_DESCRIPTION: &str =
    "Professional technology consulting and business services";

/// Default application version (the crate version)
pub const DEFAULT_APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default prefix for the JSON API
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Default CORS origins (comma-separated)
pub const DEFAULT_CORS_ORIGINS: &str = "*";

/// Origin value that allows every caller
pub const CORS_WILDCARD: &str = "*";

// =============================================================================
// Authentication & Security
// =============================================================================

/// Minimum SECRET_KEY length in characters
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Secret used when DEBUG is on and SECRET_KEY is missing
pub const DEV_SECRET_KEY: &str = "dev-secret-key-minimum-32-chars!!";

/// Default JWT signing algorithm
pub const DEFAULT_ALGORITHM: &str = "HS256";

/// Default access token lifetime in minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;

/// Longest accepted access token lifetime in minutes (one year)
pub const MAX_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 525_600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Logging
// =============================================================================

/// Default log level name
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log file path
pub const DEFAULT_LOG_FILE: &str = "logs/app.log";

/// Default log output format
pub const DEFAULT_LOG_FORMAT: &str = "full";

// =============================================================================
// Paths
// =============================================================================

/// Default static asset directory
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default template directory
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Image URL cache location, relative to the static directory
pub const ASSET_CACHE_SUBDIR: &str = "images/cache";

// =============================================================================
// Contact details
// =============================================================================

/// Default public contact email
pub const DEFAULT_CONTACT_EMAIL: &str = "info@hst.ie";

/// Default public contact phone number
pub const DEFAULT_CONTACT_PHONE: &str = "+353 1 234 5678";

/// Default company address
pub const DEFAULT_COMPANY_ADDRESS: &str = "Dublin, Ireland";

/// Office hours shown on the contact page
pub const OFFICE_HOURS: &str = "Monday - Friday: 9:00 AM - 6:00 PM";

// =============================================================================
// Email (SMTP)
// =============================================================================

/// Default SMTP relay
pub const DEFAULT_SMTP_SERVER: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS)
pub const DEFAULT_SMTP_PORT: u16 = 587;

// =============================================================================
// Image assets
// =============================================================================

/// How long a resolved image URL stays cached
pub const ASSET_CACHE_TTL_HOURS: i64 = 24;

/// Unsplash API base URL
pub const UNSPLASH_API_URL: &str = "https://api.unsplash.com";

/// Unsplash API request timeout in seconds
pub const UNSPLASH_TIMEOUT_SECONDS: u64 = 10;

/// Keyword image probe timeout in seconds
pub const FALLBACK_PROBE_TIMEOUT_SECONDS: u64 = 5;

/// Largest placeholder edge the server will generate
pub const MAX_PLACEHOLDER_DIMENSION: u32 = 4000;

// =============================================================================
// HTTP
// =============================================================================

/// Responses smaller than this are sent uncompressed
pub const GZIP_MIN_SIZE_BYTES: u16 = 1000;

// =============================================================================
// Validation
// =============================================================================

/// Minimum digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 7;
