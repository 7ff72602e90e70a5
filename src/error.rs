//! Error types for the Lumen rendering pipeline.
//!
//! All errors represent unrecoverable setup-time misconfiguration: none of
//! them are retried. Per-frame command submission is assumed infallible in
//! the base design; command recording still returns `Result` so backends
//! (and the mock device) can surface invariant violations.

use std::fmt;
use std::path::PathBuf;

/// Result type for Lumen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lumen pipeline errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Render target attachment configuration is invalid (mismatched sizes,
    /// non-renderable format, empty attachment list). Fatal at startup.
    IncompleteTarget(String),

    /// A drawable references a texture kind outside the four recognized kinds.
    /// Fatal: silently skipping the texture would desynchronize unit assignment.
    UnknownTextureKind(String),

    /// Backing data for a resource failed to load, reported with the failing path
    ResourceLoad { path: PathBuf, reason: String },

    /// Invalid resource usage (wrong buffer kind, out-of-range attachment, etc.)
    InvalidResource(String),

    /// Backend-specific error (GL, Vulkan, mock, etc.)
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IncompleteTarget(msg) => write!(f, "Incomplete render target: {}", msg),
            Error::UnknownTextureKind(msg) => write!(f, "Unknown texture kind: {}", msg),
            Error::ResourceLoad { path, reason } => {
                write!(f, "Resource load failed for '{}': {}", path.display(), reason)
            }
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] of the given tuple variant, logging it at ERROR severity
/// with the given source.
///
/// # Example
///
/// ```ignore
/// return Err(render_err!("lumen::Target", IncompleteTarget,
///     "attachment {} is {}x{}, expected {}x{}", i, aw, ah, w, h));
/// ```
#[macro_export]
macro_rules! render_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::render_error!($source, "{}", msg);
        $crate::Error::$variant(msg)
    }};
}

/// Log and return early with an [`Error`] of the given tuple variant.
#[macro_export]
macro_rules! render_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::render_err!($source, $variant, $($arg)*))
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
