// Text enhancement endpoint. The rewrite is template-based; swapping in a real
// model only has to replace `enhance_content`.

pub mod handlers;
pub mod templates;

use editor::api_client::{EXPERIENCE_SECTION, SUMMARY_SECTION};

use templates::{EXPERIENCE_TEMPLATE, GENERIC_TEMPLATE, SUMMARY_TEMPLATE};

/// Rewrites `content` with the template for `section`.
pub fn enhance_content(section: &str, content: &str) -> String {
    let template = match section {
        SUMMARY_SECTION => SUMMARY_TEMPLATE,
        EXPERIENCE_SECTION => EXPERIENCE_TEMPLATE,
        _ => GENERIC_TEMPLATE,
    };
    template.replace("{content}", content)
}
