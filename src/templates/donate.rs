// src/templates/donate.rs
use super::{html_escape, img, ContentPage, RenderContext};
use crate::models::BankInfo;
use crate::services::resources;
use crate::ui::ViewQuery;

/// Bank details only; no payments are taken on the site.
pub struct DonatePage;

impl ContentPage for DonatePage {
    type Data = BankInfo;

    const PATH: &'static str = "/donate";
    const RESOURCE: &'static str = resources::BANK_INFO;
    const TITLE: &'static str = "Donate";
    const LABEL: &'static str = "bank details";

    fn render(bank: &BankInfo, _view: &ViewQuery, ctx: &RenderContext) -> String {
        let upi = bank
            .upi_id
            .as_deref()
            .map(|id| format!("<tr><th>UPI ID</th><td>{}</td></tr>", html_escape(id)))
            .unwrap_or_default();
        let note = bank
            .note
            .as_deref()
            .map(|n| format!(r#"<p class="donate-note">{}</p>"#, html_escape(n)))
            .unwrap_or_default();

        format!(
            r#"
    <p class="subtitle">Your gift keeps ambulances on the road and meals on the table.</p>

    <div class="donate-grid">
        <section class="section bank-details">
            <h2>Bank transfer</h2>
            <table class="bank-table">
                <tr><th>Account name</th><td>{}</td></tr>
                <tr><th>Account number</th><td>{}</td></tr>
                <tr><th>Bank</th><td>{}</td></tr>
                <tr><th>Branch</th><td>{}</td></tr>
                <tr><th>IFSC</th><td>{}</td></tr>
                {}
            </table>
            {}
        </section>

        <section class="section donate-qr">
            <h2>Scan to give</h2>
            {}
        </section>
    </div>
    "#,
            html_escape(&bank.account_name),
            html_escape(&bank.account_number),
            html_escape(&bank.bank_name),
            html_escape(&bank.branch),
            html_escape(&bank.ifsc),
            upi,
            note,
            img(&bank.qr_image, "Donation QR code", "qr-code", ctx.fallback_image)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn bank() -> BankInfo {
        BankInfo {
            account_name: "Karuna Foundation".to_string(),
            account_number: "12345678901".to_string(),
            bank_name: "State Bank of India".to_string(),
            branch: "Kumily".to_string(),
            ifsc: "SBIN0070123".to_string(),
            upi_id: None,
            qr_image: "/assets/images/qr.png".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_optional_rows_only_when_present() {
        let html = DonatePage::render(&bank(), &ViewQuery::default(), &CTX);
        assert!(html.contains("SBIN0070123"));
        assert!(!html.contains("UPI ID"));

        let with_upi = BankInfo {
            upi_id: Some("karuna@sbi".to_string()),
            ..bank()
        };
        let html = DonatePage::render(&with_upi, &ViewQuery::default(), &CTX);
        assert!(html.contains("<th>UPI ID</th><td>karuna@sbi</td>"));
    }
}
