//! Landing Page
//!
//! Renders `index.html` from the views directory, substituting `{{ key }}`
//! placeholders. The template is read on every request so edits show up
//! without a restart.

use axum::{extract::State, response::Html};
use tracing::error;

use super::AppState;
use crate::error::{ApiError, Result};

/// File name of the landing page template inside the views directory.
pub const INDEX_TEMPLATE: &str = "index.html";

/// Handler for GET /
pub async fn landing_handler(State(state): State<AppState>) -> Result<Html<String>> {
    let path = state.views_dir.join(INDEX_TEMPLATE);
    let messages = state.locale.messages();

    let template = tokio::fs::read_to_string(&path).await.map_err(|e| {
        error!(path = %path.display(), error = %e, "failed to read landing template");
        ApiError::Render(messages.render_failed)
    })?;

    let context = [
        ("title", messages.landing_title),
        ("lang", state.locale.tag()),
        ("version", env!("CARGO_PKG_VERSION")),
    ];
    Ok(Html(render(&template, &context)))
}

/// Replaces each `{{ key }}` (inner whitespace optional) with its value.
/// Unknown placeholders are left as they are.
pub fn render(template: &str, context: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let key = after[..end].trim();
        match context.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
