// src/templates/not_found.rs
use super::html_escape;

pub fn render(path: &str) -> String {
    format!(
        r#"
    <div class="section not-found">
        <h2>We couldn't find that page</h2>
        <p>Nothing lives at <code>{}</code>.</p>
        <div class="action-buttons">
            <a href="/" class="btn btn-primary">Home</a>
            <a href="/programs-services" class="btn btn-secondary">Our programs</a>
        </div>
    </div>
    "#,
        html_escape(path)
    )
}
