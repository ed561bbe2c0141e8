// src/templates/admin.rs
use super::html_escape;

/// One line of the dashboard: a resource and how its load went.
#[derive(Debug, Clone)]
pub struct ResourceRow {
    pub label: &'static str,
    pub path: &'static str,
    /// Byte size on success, error text otherwise.
    pub outcome: Result<usize, String>,
}

pub fn render_login(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!(r#"<div class="error-message">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    format!(
        r#"
    <div class="auth-container">
        <h2>Admin login</h2>
        {}
        <form class="auth-form" method="POST" action="/admin">
            <div class="form-group">
                <label for="username">Username</label>
                <input type="text" id="username" name="username" required autocomplete="username">
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input type="password" id="password" name="password" required autocomplete="current-password">
            </div>
            <button type="submit" class="btn btn-primary btn-full">Login</button>
        </form>
        <p class="auth-footer">This area is for site volunteers only.</p>
    </div>
    "#,
        error_html
    )
}

pub fn render_dashboard(username: &str, rows: &[ResourceRow], source: &str, cached: u64) -> String {
    let healthy = rows.iter().filter(|row| row.outcome.is_ok()).count();

    let table = rows
        .iter()
        .map(|row| {
            let (class, status) = match &row.outcome {
                Ok(bytes) => ("ok", format!("OK · {} bytes", bytes)),
                Err(err) => ("failed", format!("Failed · {}", err)),
            };
            format!(
                r#"<tr class="{}">
                <td>{}</td>
                <td><code>{}</code></td>
                <td>{}</td>
            </tr>"#,
                class,
                html_escape(row.label),
                html_escape(row.path),
                html_escape(&status)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
    <p class="subtitle">Signed in as {}</p>

    <div class="admin-stats">
        <div class="admin-stat-card">
            <div class="admin-stat-value">{} / {}</div>
            <div class="admin-stat-label">Resources loading</div>
        </div>
        <div class="admin-stat-card">
            <div class="admin-stat-value">{}</div>
            <div class="admin-stat-label">Cached documents</div>
        </div>
    </div>

    <p>Content source: <code>{}</code></p>

    <table class="admin-table">
        <thead>
            <tr><th>Resource</th><th>Path</th><th>Status</th></tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>

    <a href="/admin" class="btn btn-secondary">Log out</a>
    "#,
        html_escape(username),
        healthy,
        rows.len(),
        cached,
        html_escape(source),
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_is_escaped() {
        let html = render_login(Some("Invalid <credentials>"));
        assert!(html.contains("Invalid &lt;credentials&gt;"));
        assert!(!render_login(None).contains("error-message"));
    }

    #[test]
    fn test_dashboard_counts_healthy_rows() {
        let rows = vec![
            ResourceRow {
                label: "Programs",
                path: "/assets/data/programs.json",
                outcome: Ok(1200),
            },
            ResourceRow {
                label: "Team",
                path: "/assets/data/teammembers.json",
                outcome: Err("HTTP 500".to_string()),
            },
        ];
        let html = render_dashboard("admin", &rows, "dir:public", 1);
        assert!(html.contains("1 / 2"));
        assert!(html.contains("OK · 1200 bytes"));
        assert!(html.contains("Failed · HTTP 500"));
    }
}
