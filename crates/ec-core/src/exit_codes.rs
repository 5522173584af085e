//! Exit codes for the easycass CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/environment errors (bad bundle, bad arguments)
//! - 20-29: Internal errors (bugs, should be reported)

/// Exit codes for easycass commands.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Bundle archive missing, unreadable, or not a ZIP
    BundleError = 11,

    /// Bundle config malformed or incomplete
    ConfigError = 12,

    /// Supplied connection properties rejected
    ValidationError = 13,

    /// Certificate property is not valid base64
    EncodingError = 14,

    /// Certificate material unusable for TLS
    TlsError = 15,

    /// Session collaborator refused the connection
    SessionError = 16,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error writing output
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        self == ExitCode::Clean
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Check if this exit code is an internal error (codes 20-29).
    pub fn is_internal_error(self) -> bool {
        let code = self as i32;
        code >= 20
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::BundleError => "ERR_BUNDLE",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::ValidationError => "ERR_VALIDATION",
            ExitCode::EncodingError => "ERR_ENCODING",
            ExitCode::TlsError => "ERR_TLS",
            ExitCode::SessionError => "ERR_SESSION",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
