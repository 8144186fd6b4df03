//! Seam to an external JSON-LD processor.
//!
//! Compaction itself is not implemented here. Callers plug in whatever
//! processor they use through [`Compactor`] and then coerce the literals of
//! the compacted output.

use serde_json::Value;

use crate::error::CompactionError;

/// An external JSON-LD compaction routine.
pub trait Compactor {
    /// Compact `document` against `context`.
    fn compact(&self, document: &Value, context: &Value) -> Result<Value, CompactionError>;
}

impl<F> Compactor for F
where
    F: Fn(&Value, &Value) -> Result<Value, CompactionError>,
{
    fn compact(&self, document: &Value, context: &Value) -> Result<Value, CompactionError> {
        self(document, context)
    }
}

/// Parse a context supplied as JSON text and forward the document and context
/// to `compactor`.
///
/// The context must be a JSON object, either a bare term map or a
/// `{"@context": ...}` wrapper; it is passed on exactly as parsed.
pub fn compact_with_context_text<C>(
    compactor: &C,
    document: &Value,
    context_text: &str,
) -> Result<Value, CompactionError>
where
    C: Compactor + ?Sized,
{
    let context: Value = serde_json::from_str(context_text).map_err(CompactionError::context)?;
    if !context.is_object() {
        return Err(CompactionError::context("context must be a JSON object"));
    }
    tracing::debug!(context = %context, "forwarding document to JSON-LD processor");
    compactor.compact(document, &context)
}
