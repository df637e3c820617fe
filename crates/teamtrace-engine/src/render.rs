use std::fmt;

use teamtrace_types::SessionDocument;

/// Marker in the viewer template replaced by the session JSON
pub const SESSION_DATA_PLACEHOLDER: &str = "/*__SESSION_DATA__*/null";

#[derive(Debug)]
pub enum RenderError {
    /// Template does not contain SESSION_DATA_PLACEHOLDER
    MissingPlaceholder,

    /// Document serialization failed
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingPlaceholder => write!(
                f,
                "Template is missing the {} placeholder",
                SESSION_DATA_PLACEHOLDER
            ),
            RenderError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Json(err) => Some(err),
            RenderError::MissingPlaceholder => None,
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}

/// Embed the document into a self-contained HTML template
///
/// `</` is written as `<\/` so log text like `</script>` stays inside the
/// script element. Both spellings decode to the same JSON string.
pub fn render_html(template: &str, document: &SessionDocument) -> Result<String, RenderError> {
    if !template.contains(SESSION_DATA_PLACEHOLDER) {
        return Err(RenderError::MissingPlaceholder);
    }

    let data = serde_json::to_string(document)?.replace("</", "<\\/");
    Ok(template.replacen(SESSION_DATA_PLACEHOLDER, &data, 1))
}
