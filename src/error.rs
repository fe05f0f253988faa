// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in coords return `error::Result<T>`.  `Coord`
// itself never fails; errors come from URI parsing, the config file, and
// Win32 calls.  `main` surfaces them as a fatal-error dialog.

/// Every error that coords can produce.
#[derive(Debug)]
pub enum CoordsError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// A standard I/O error while reading the config file.
    Io(std::io::Error),

    /// The config file is not valid JSON or has an unsupported shape.
    Config(serde_json::Error),

    /// The configured URI is not an absolute URI.
    Uri(url::ParseError),
}

impl std::fmt::Display for CoordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "invalid config: {e}"),
            Self::Uri(e) => write!(f, "invalid URI: {e}"),
        }
    }
}

impl std::error::Error for CoordsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Uri(e) => Some(e),
            Self::Win32 { .. } => None,
        }
    }
}

impl From<std::io::Error> for CoordsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CoordsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e)
    }
}

impl From<url::ParseError> for CoordsError {
    fn from(e: url::ParseError) -> Self {
        Self::Uri(e)
    }
}

// Lets `?` work on `windows::core::Result<T>` inside `platform::win32`.
#[cfg(windows)]
impl From<windows::core::Error> for CoordsError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoordsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn win32_display_is_hex() {
        let e = CoordsError::Win32 {
            function: "MessageBoxW",
            code: 5,
        };
        assert_eq!(e.to_string(), "MessageBoxW failed (error 0x00000005)");
        assert!(e.source().is_none());
    }

    #[test]
    fn uri_error_converts_and_chains() {
        let parse = url::Url::parse("not a uri").unwrap_err();
        let e: CoordsError = parse.into();
        assert!(matches!(e, CoordsError::Uri(_)));
        assert!(e.to_string().starts_with("invalid URI: "));
        assert!(e.source().is_some());
    }

    #[test]
    fn json_error_is_config() {
        let parse = serde_json::from_str::<u32>("{").unwrap_err();
        let e: CoordsError = parse.into();
        assert!(matches!(e, CoordsError::Config(_)));
    }
}
