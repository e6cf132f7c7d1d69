//! Error handling for TexKit.
//!
//! Every editor error is recoverable: it is surfaced to the user, no state
//! is mutated, and the editor is immediately ready for the next click.
//! Error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Editor error type.
///
/// Covers the precondition failures of click dispatch and view swapping.
/// The `Display` strings carry the user-visible wording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// An action that requires a computed camera was attempted before
    /// calibration (plane-texture display, view swap).
    #[error("camera calibration needed")]
    CalibrationRequired,

    /// A click arrived while a new plane's boundary is still incomplete
    /// and a different tool is active.
    #[error("finish the boundary of the plane in progress before using another tool")]
    PlaneInProgress,

    /// A plane-texture click landed outside every known plane boundary.
    #[error("click a point inside a plane")]
    OutsideAllPlanes,
}

/// Result type alias using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
