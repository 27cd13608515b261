use alloc::vec::Vec;

use crate::tree::DeError;

/// A side channel that receives a mapping failure before it is returned.
///
/// [`from_tree_with`] calls [`report`](ErrorReporter::report) exactly once per
/// failed call, with the fully-pathed error. Successful calls never report.
///
/// Implementations:
/// - [`TracingReporter`], the default, emits a `tracing` error event.
/// - `()` discards the error.
/// - `Vec<DeError>` collects every reported error.
///
/// # Examples
///
/// ```
/// use vc_mapping::{derive::Reflect, tree::{self, DeError}};
///
/// #[derive(Reflect, Default)]
/// struct Car {
///     make: String,
/// }
///
/// let mut seen: Vec<DeError> = Vec::new();
/// let node = serde_json::json!({ "make": 1 });
///
/// let err = tree::from_tree_with(&node, &mut Car::default(), &mut seen).unwrap_err();
/// assert_eq!(seen, [err]);
/// ```
///
/// [`from_tree_with`]: crate::tree::from_tree_with
pub trait ErrorReporter {
    /// Receives the error of a failed mapping.
    fn report(&mut self, error: &DeError);
}

impl ErrorReporter for () {
    #[inline(always)]
    fn report(&mut self, _error: &DeError) {}
}

impl ErrorReporter for Vec<DeError> {
    #[inline]
    fn report(&mut self, error: &DeError) {
        self.push(error.clone());
    }
}

/// Reports mapping failures as `tracing` error events.
///
/// The event carries the dotted field path in the `path` field and the
/// rendered error in the `error` field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&mut self, error: &DeError) {
        tracing::error!(
            path = %error.path(),
            error = %error,
            "failed to map tree onto value"
        );
    }
}
