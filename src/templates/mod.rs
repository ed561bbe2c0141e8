// src/templates/mod.rs
pub mod about;
pub mod admin;
pub mod ambulance;
pub mod camp;
pub mod cancer_day;
pub mod community_kitchen;
pub mod compassion_home;
pub mod components;
pub mod contact;
pub mod documents;
pub mod donate;
pub mod gallery;
pub mod home;
pub mod media;
pub mod mfi;
pub mod not_found;
pub mod page;
pub mod program_detail;
pub mod programs;
pub mod team;
pub mod testimonials;

mod layout;

pub use layout::{render_document, render_page, tel_link, whatsapp_link, Shell};
pub use page::{ContentPage, RenderContext};

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Contents of a single-quoted script string literal.
fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Data-driven image with the broken-image fallback wired in.
pub fn img(src: &str, alt: &str, class: &str, fallback: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}" loading="lazy" onerror="this.onerror=null;this.src='{}'">"#,
        html_escape(src),
        html_escape(alt),
        class,
        html_escape(&js_string(fallback))
    )
}

/// Body text from JSON keeps its paragraph breaks.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_img_carries_fallback() {
        let tag = img("/assets/images/a.jpg", "A", "thumb", "/assets/images/placeholder.svg");
        assert!(tag.contains(r#"src="/assets/images/a.jpg""#));
        assert!(tag.contains("this.src='/assets/images/placeholder.svg'"));
    }

    #[test]
    fn test_img_fallback_stays_inside_script_string() {
        let tag = img("a.jpg", "A", "thumb", r"x.png');alert(1);//\");
        assert!(tag.contains(r"this.src='x.png\&#x27;);alert(1);//\\'"));
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        assert_eq!(paragraphs("one\n\n two \n\n"), "<p>one</p>\n<p>two</p>");
    }
}
