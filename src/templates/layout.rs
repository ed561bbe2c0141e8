// src/templates/layout.rs
use chrono::Datelike;

use super::html_escape;
use crate::models::ContactInfo;
use crate::utils::validation::digits_only;

const WHATSAPP_GREETING: &str = "Hello, I would like to know more about your work.";

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/programs-services", "Programs"),
    ("/gallery", "Gallery"),
    ("/testimonials", "Testimonials"),
    ("/team", "Team"),
    ("/contact", "Contact"),
];

const PROGRAM_LINKS: &[(&str, &str)] = &[
    ("/ambulance", "Ambulance Services"),
    ("/cancer-awareness-camp", "Cancer Awareness Camps"),
    ("/compassion-home", "Compassion Home"),
    ("/community-kitchen", "Community Kitchen"),
    ("/cancer-day", "World Cancer Day"),
    ("/mfi", "Microfinance"),
];

/// Everything the shell needs besides the page body.
pub struct Shell<'a> {
    pub site_name: &'a str,
    pub contact: Option<&'a ContactInfo>,
    /// Path of the current page, for the active nav link.
    pub active: &'a str,
}

pub fn render_page(title: &str, content: &str, shell: &Shell) -> String {
    render_document(title, content, shell, None)
}

/// Full HTML document. `refresh_secs` makes the browser poll again, which is
/// how the loading placeholder resolves itself.
pub fn render_document(
    title: &str,
    content: &str,
    shell: &Shell,
    refresh_secs: Option<u32>,
) -> String {
    let refresh = refresh_secs
        .map(|secs| format!(r#"<meta http-equiv="refresh" content="{}">"#, secs))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    {refresh}
    <title>{title} - {site}</title>
    <link rel="stylesheet" href="/assets/css/site.css">
</head>
<body>
    {topbar}
    <header class="header">
        <div class="container header-content">
            <div class="logo"><a href="/">{site}</a></div>
            <nav class="nav">
                {nav}
                <a href="/donate" class="btn btn-donate">Donate</a>
            </nav>
        </div>
    </header>

    <section class="page-banner">
        <div class="container">
            <h1>{title}</h1>
        </div>
    </section>

    <main class="main">
        <div class="container">
            {content}
        </div>
    </main>

    {footer}
    {help}
</body>
</html>"#,
        refresh = refresh,
        title = html_escape(title),
        site = html_escape(shell.site_name),
        topbar = render_topbar(shell.contact),
        nav = render_nav(shell.active),
        content = content,
        footer = render_footer(shell),
        help = render_help_modal(shell.contact),
    )
}

fn render_nav(active: &str) -> String {
    let mut links: Vec<String> = NAV_LINKS
        .iter()
        .map(|(href, text)| nav_link(href, text, is_active(active, href)))
        .collect();

    let programs_active = PROGRAM_LINKS.iter().any(|(href, _)| is_active(active, href));
    let dropdown = PROGRAM_LINKS
        .iter()
        .map(|(href, text)| nav_link(href, text, is_active(active, href)))
        .collect::<Vec<_>>()
        .join("\n");
    links.push(format!(
        r#"<div class="nav-dropdown{}">
            <span class="nav-link">Our Work</span>
            <div class="nav-dropdown-menu">{}</div>
        </div>"#,
        if programs_active { " active" } else { "" },
        dropdown
    ));

    links.join("\n")
}

fn is_active(active: &str, href: &str) -> bool {
    if href == "/" {
        active == "/"
    } else {
        active == href || active.starts_with(&format!("{}/", href))
    }
}

fn nav_link(href: &str, text: &str, active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    format!(r#"<a href="{}" class="{}">{}</a>"#, href, class, text)
}

/// `wa.me` deep link; `None` when the number has no digits at all.
pub fn whatsapp_link(phone: &str) -> Option<String> {
    let digits = digits_only(phone);
    if digits.is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(WHATSAPP_GREETING)
    ))
}

pub fn tel_link(phone: &str) -> String {
    let digits = digits_only(phone);
    if phone.trim_start().starts_with('+') {
        format!("tel:+{}", digits)
    } else {
        format!("tel:{}", digits)
    }
}

fn contact_links(contact: &ContactInfo) -> String {
    let mut links = vec![
        format!(
            r#"<a href="{}" class="contact-link">📞 {}</a>"#,
            tel_link(&contact.phone),
            html_escape(&contact.phone)
        ),
        format!(
            r#"<a href="mailto:{0}" class="contact-link">✉️ {0}</a>"#,
            html_escape(&contact.email)
        ),
    ];
    if let Some(href) = whatsapp_link(contact.whatsapp_number()) {
        links.push(format!(
            r#"<a href="{}" class="contact-link" target="_blank" rel="noopener">💬 WhatsApp</a>"#,
            html_escape(&href)
        ));
    }
    links.join("\n")
}

fn render_topbar(contact: Option<&ContactInfo>) -> String {
    match contact {
        Some(contact) => format!(
            r##"<div class="topbar">
        <div class="container topbar-content">
            {}
            <a href="#help" class="contact-link">Need help?</a>
        </div>
    </div>"##,
            contact_links(contact)
        ),
        None => String::new(),
    }
}

fn render_footer(shell: &Shell) -> String {
    let year = chrono::Utc::now().year();

    let details = match shell.contact {
        Some(contact) => {
            let addresses = contact
                .addresses
                .iter()
                .map(|address| {
                    format!(
                        r#"<div class="footer-address"><strong>{}</strong><br>{}</div>"#,
                        html_escape(&address.label),
                        address
                            .lines
                            .iter()
                            .map(|line| html_escape(line))
                            .collect::<Vec<_>>()
                            .join("<br>")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            let social = contact
                .social
                .iter()
                .map(|link| {
                    format!(
                        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                        html_escape(&link.url),
                        html_escape(&link.name)
                    )
                })
                .collect::<Vec<_>>()
                .join(" · ");

            let hours = contact
                .office_hours
                .as_deref()
                .map(|hours| format!("<p>Office hours: {}</p>", html_escape(hours)))
                .unwrap_or_default();

            format!(
                r#"<div class="footer-col">
                <h3>{}</h3>
                <p>{}</p>
                {}
            </div>
            <div class="footer-col">
                <h3>Reach us</h3>
                {}
                {}
            </div>
            <div class="footer-col">
                <h3>Follow</h3>
                <p>{}</p>
            </div>"#,
                html_escape(&contact.organization),
                html_escape(contact.tagline.as_deref().unwrap_or("")),
                addresses,
                contact_links(contact),
                hours,
                social
            )
        }
        None => format!(
            r#"<div class="footer-col"><h3>{}</h3></div>"#,
            html_escape(shell.site_name)
        ),
    };

    format!(
        r#"<footer class="footer">
        <div class="container footer-grid">
            {}
            <div class="footer-col">
                <h3>Explore</h3>
                <a href="/about">About</a><br>
                <a href="/documents">Documents</a><br>
                <a href="/media-coverage">Media coverage</a><br>
                <a href="/donate">Donate</a>
            </div>
        </div>
        <div class="container footer-bottom">
            <p>© {} {}. All rights reserved.</p>
        </div>
    </footer>"#,
        details,
        year,
        html_escape(shell.site_name)
    )
}

fn render_help_modal(contact: Option<&ContactInfo>) -> String {
    let Some(contact) = contact else {
        return String::new();
    };
    format!(
        r##"<div id="help" class="modal modal-target">
        <div class="modal-content">
            <a href="#" class="modal-close" aria-label="Close">×</a>
            <h2>How can we help?</h2>
            <p>Call, write or message us and a volunteer will get back to you.</p>
            <div class="help-links">{}</div>
        </div>
    </div>"##,
        contact_links(contact)
    )
}
