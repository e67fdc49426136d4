/// Error code registry for common-utils
///
/// Error codes are organized by category:
/// - 1000-1999: Collection transform errors
/// - 2000-2999: Configuration errors
pub struct ErrorCode;

impl ErrorCode {
    // Collection transform errors (1000-1999)
    pub const COLLECTION_GENERIC: u16 = 1000;
    pub const DUPLICATE_KEY: u16 = 1001;

    // Configuration errors (2000-2999)
    pub const CONFIG_GENERIC: u16 = 2000;
    pub const CONFIG_PARSE_ERROR: u16 = 2001;
    pub const CONFIG_INVALID_VALUE: u16 = 2002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Collection transform errors
        1000 => "Generic collection transform error",
        1001 => "Two elements resolved to the same key and no merge function was supplied",

        // Configuration errors
        2000 => "Generic configuration error",
        2001 => "Failed to parse configuration",
        2002 => "Invalid value in configuration",

        _ => "Unknown error code",
    }
}
