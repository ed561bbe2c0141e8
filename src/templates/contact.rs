// src/templates/contact.rs
use super::{html_escape, tel_link, whatsapp_link, ContentPage, RenderContext};
use crate::models::ContactInfo;
use crate::services::resources;
use crate::ui::ViewQuery;

pub struct ContactPage;

impl ContentPage for ContactPage {
    type Data = ContactInfo;

    const PATH: &'static str = "/contact";
    const RESOURCE: &'static str = resources::FOOTER;
    const TITLE: &'static str = "Contact Us";
    const LABEL: &'static str = "contact details";

    fn render(contact: &ContactInfo, _view: &ViewQuery, _ctx: &RenderContext) -> String {
        let addresses = contact
            .addresses
            .iter()
            .map(|address| {
                format!(
                    r#"<div class="address-card">
                <h3>{}</h3>
                <address>{}</address>
            </div>"#,
                    html_escape(&address.label),
                    address
                        .lines
                        .iter()
                        .map(|l| html_escape(l))
                        .collect::<Vec<_>>()
                        .join("<br>")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let whatsapp = whatsapp_link(contact.whatsapp_number())
            .map(|href| {
                format!(
                    r#"<a href="{}" class="btn btn-primary" target="_blank" rel="noopener">Message us on WhatsApp</a>"#,
                    html_escape(&href)
                )
            })
            .unwrap_or_default();

        let hours = contact
            .office_hours
            .as_deref()
            .map(|h| format!("<p><strong>Office hours:</strong> {}</p>", html_escape(h)))
            .unwrap_or_default();

        format!(
            r#"
    <div class="contact-grid">
        <section class="section">
            <h2>{}</h2>
            <p><strong>Phone:</strong> <a href="{}">{}</a></p>
            <p><strong>Email:</strong> <a href="mailto:{}">{}</a></p>
            {}
            {}
        </section>
        <section class="section">
            <h2>Visit us</h2>
            <div class="address-grid">{}</div>
        </section>
    </div>
    "#,
            html_escape(&contact.organization),
            tel_link(&contact.phone),
            html_escape(&contact.phone),
            html_escape(&contact.email),
            html_escape(&contact.email),
            hours,
            whatsapp,
            addresses
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn contact() -> ContactInfo {
        ContactInfo {
            organization: "Karuna Foundation".to_string(),
            tagline: None,
            phone: "+91 98765 43210".to_string(),
            whatsapp: None,
            email: "hello@karuna.org".to_string(),
            addresses: vec![Address {
                label: "Head office".to_string(),
                lines: vec!["12 Temple Road".to_string(), "Kumily".to_string()],
            }],
            social: vec![],
            office_hours: None,
        }
    }

    #[test]
    fn test_phone_and_whatsapp_links() {
        let html = ContactPage::render(&contact(), &ViewQuery::default(), &CTX);
        assert!(html.contains(r#"href="tel:+919876543210""#));
        assert!(html.contains("https://wa.me/919876543210?text="));
        assert!(html.contains("mailto:hello@karuna.org"));
        assert!(html.contains("12 Temple Road<br>Kumily"));
    }

    #[test]
    fn test_whatsapp_number_overrides_phone() {
        let info = ContactInfo {
            whatsapp: Some("+91 90000 11111".to_string()),
            ..contact()
        };
        let html = ContactPage::render(&info, &ViewQuery::default(), &CTX);
        assert!(html.contains("https://wa.me/919000011111"));
    }
}
