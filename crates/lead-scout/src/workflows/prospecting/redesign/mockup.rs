use chrono::{Datelike, Utc};
use serde::Serialize;

use super::super::domain::BusinessRecord;
use super::copy::{generate_copy, CopyBlock};
use super::theme::{select_theme, Theme};

const IMPROVEMENTS: [&str; 8] = [
    "Modern, mobile-responsive design",
    "Clear call-to-action buttons",
    "Professional color scheme and typography",
    "Optimized for search engines",
    "Fast loading performance",
    "Accessible design following WCAG guidelines",
    "Contact information prominently displayed",
    "Social proof with testimonials",
];

/// Generated landing page offered to a prospect alongside the outreach pitch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedesignMockup {
    pub id: String,
    pub business_name: String,
    pub url: String,
    pub html: String,
    pub css: String,
    pub copy: CopyBlock,
    pub improvements: Vec<String>,
    pub design_notes: Vec<String>,
}

pub fn generate_redesign(business: &BusinessRecord, score: u8, niche: &str) -> RedesignMockup {
    let theme = select_theme(niche);
    let copy = generate_copy(business, niche);
    tracing::debug!(business = %business.name, score, theme = theme.name, "generating redesign mockup");

    let design_notes = vec![
        format!("Applied {} design theme appropriate for {niche}", theme.name),
        format!("Used {} as primary brand color", theme.primary_color),
        "Implemented mobile-first responsive design".to_string(),
        "Added structured data for better SEO".to_string(),
        "Optimized images and loading performance".to_string(),
    ];

    RedesignMockup {
        id: format!("redesign-{}", Utc::now().timestamp_millis()),
        business_name: business.name.clone(),
        url: redesign_url(&business.name),
        html: render_html(business, &copy, theme),
        css: render_css(theme),
        copy,
        improvements: IMPROVEMENTS.iter().map(|item| (*item).to_string()).collect(),
        design_notes,
    }
}

/// Public path under which the mockup for `business_name` is served.
pub fn redesign_url(business_name: &str) -> String {
    let slug: String = business_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("/redesigns/{slug}-redesign.html")
}

fn render_html(business: &BusinessRecord, copy: &CopyBlock, theme: &Theme) -> String {
    let name = escape_html(&business.name);
    let headline = escape_html(&copy.headline);
    let subheadline = escape_html(&copy.subheadline);
    let cta = escape_html(&copy.cta_text);
    let phone = business.phone.as_deref().map(escape_html);
    let email = business.email.as_deref().map(escape_html);
    let fonts = format!(
        "https://fonts.googleapis.com/css2?family={}:wght@400;600;700&family={}:wght@400;500;600&display=swap",
        theme.heading_font.replace(' ', "+"),
        theme.body_font.replace(' ', "+")
    );

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{headline} | {name}</title>\n"));
    html.push_str(&format!(
        "<meta name=\"description\" content=\"{subheadline}\">\n"
    ));
    html.push_str(&format!(
        "<link href=\"{}\" rel=\"stylesheet\">\n",
        escape_html(&fonts)
    ));
    html.push_str("<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n<body>\n");

    html.push_str("<header class=\"header\">\n<nav class=\"nav\">\n");
    html.push_str(&format!("<div class=\"nav-brand\"><h1>{name}</h1></div>\n"));
    html.push_str("<div class=\"nav-links\">\n<a href=\"#about\">About</a>\n<a href=\"#services\">Services</a>\n<a href=\"#contact\">Contact</a>\n");
    if let Some(phone) = &phone {
        html.push_str(&format!(
            "<a href=\"tel:{phone}\" class=\"cta-button\">{phone}</a>\n"
        ));
    }
    html.push_str("</div>\n</nav>\n</header>\n");

    html.push_str("<section class=\"hero\">\n<div class=\"hero-content\">\n");
    html.push_str(&format!("<h1 class=\"hero-title\">{headline}</h1>\n"));
    html.push_str(&format!("<p class=\"hero-subtitle\">{subheadline}</p>\n"));
    html.push_str("<div class=\"hero-actions\">\n");
    html.push_str(&format!(
        "<a href=\"#contact\" class=\"btn btn-primary\">{cta}</a>\n"
    ));
    if let Some(phone) = &phone {
        html.push_str(&format!(
            "<a href=\"tel:{phone}\" class=\"btn btn-secondary\">Call Now</a>\n"
        ));
    }
    html.push_str("</div>\n</div>\n");
    html.push_str(&format!(
        "<div class=\"hero-image\"><img src=\"/business-professional-service.png\" alt=\"{name}\" /></div>\n"
    ));
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<section id=\"about\" class=\"about\">\n<div class=\"container\">\n<h2>About {name}</h2>\n<p>{}</p>\n</div>\n</section>\n",
        escape_html(&copy.about_section)
    ));

    html.push_str(&format!(
        "<section id=\"services\" class=\"services\">\n<div class=\"container\">\n<h2>Our Services</h2>\n<p>{}</p>\n<div class=\"services-grid\">\n",
        escape_html(&copy.services_section)
    ));
    for (title, blurb) in [
        (
            "Professional Service",
            "High-quality service delivered by experienced professionals.",
        ),
        (
            "Customer Focused",
            "We prioritize your needs and satisfaction above all else.",
        ),
        (
            "Reliable &amp; Trusted",
            "Count on us for consistent, dependable service every time.",
        ),
    ] {
        html.push_str(&format!(
            "<div class=\"service-card\"><h3>{title}</h3><p>{blurb}</p></div>\n"
        ));
    }
    html.push_str("</div>\n</div>\n</section>\n");

    html.push_str(&format!(
        "<section class=\"testimonial\">\n<div class=\"container\">\n<blockquote><p>{}</p></blockquote>\n</div>\n</section>\n",
        escape_html(&copy.testimonial)
    ));

    html.push_str("<section id=\"contact\" class=\"contact\">\n<div class=\"container\">\n<h2>Get In Touch</h2>\n<div class=\"contact-info\">\n");
    if let Some(phone) = &phone {
        html.push_str(&format!(
            "<div class=\"contact-item\"><h3>Phone</h3><p><a href=\"tel:{phone}\">{phone}</a></p></div>\n"
        ));
    }
    if let Some(email) = &email {
        html.push_str(&format!(
            "<div class=\"contact-item\"><h3>Email</h3><p><a href=\"mailto:{email}\">{email}</a></p></div>\n"
        ));
    }
    html.push_str(&format!(
        "<div class=\"contact-item\"><h3>Address</h3><p>{}</p></div>\n",
        escape_html(&business.address)
    ));
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"cta-section\"><a href=\"#\" class=\"btn btn-primary btn-large\">{cta}</a></div>\n"
    ));
    html.push_str("</div>\n</section>\n");

    html.push_str(&format!(
        "<footer class=\"footer\">\n<div class=\"container\"><p>&copy; {} {name}. All rights reserved.</p></div>\n</footer>\n",
        Utc::now().year()
    ));
    html.push_str("</body>\n</html>\n");

    html
}

fn render_css(theme: &Theme) -> String {
    let body_font = format!("'{}', sans-serif", theme.body_font);
    let heading_font = format!("'{}', serif", theme.heading_font);
    let primary = theme.primary_color;

    let mut css = String::new();
    rule(&mut css, "*", &[("margin", "0"), ("padding", "0"), ("box-sizing", "border-box")]);
    rule(
        &mut css,
        "body",
        &[
            ("font-family", body_font.as_str()),
            ("line-height", "1.6"),
            ("color", theme.text_color),
            ("background-color", theme.background_color),
        ],
    );
    rule(
        &mut css,
        ".container",
        &[("max-width", "1200px"), ("margin", "0 auto"), ("padding", "0 20px")],
    );
    rule(
        &mut css,
        "h1, h2, h3, h4, h5, h6",
        &[
            ("font-family", heading_font.as_str()),
            ("font-weight", "600"),
            ("line-height", "1.2"),
            ("margin-bottom", "1rem"),
        ],
    );
    rule(
        &mut css,
        ".header",
        &[
            ("background", "white"),
            ("box-shadow", "0 2px 10px rgba(0,0,0,0.1)"),
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("right", "0"),
            ("z-index", "1000"),
        ],
    );
    rule(
        &mut css,
        ".nav",
        &[
            ("display", "flex"),
            ("justify-content", "space-between"),
            ("align-items", "center"),
            ("padding", "1rem 2rem"),
            ("max-width", "1200px"),
            ("margin", "0 auto"),
        ],
    );
    rule(&mut css, ".nav-brand h1", &[("color", primary), ("margin", "0"), ("font-size", "1.5rem")]);
    rule(&mut css, ".nav-links", &[("display", "flex"), ("align-items", "center"), ("gap", "2rem")]);
    rule(
        &mut css,
        ".nav-links a",
        &[("text-decoration", "none"), ("color", theme.text_color), ("font-weight", "500")],
    );
    rule(&mut css, ".nav-links a:hover", &[("color", primary)]);
    rule(
        &mut css,
        ".btn",
        &[
            ("display", "inline-block"),
            ("padding", "12px 24px"),
            ("border-radius", "6px"),
            ("text-decoration", "none"),
            ("font-weight", "600"),
            ("transition", "all 0.3s ease"),
        ],
    );
    rule(&mut css, ".btn-primary", &[("background-color", primary), ("color", "white")]);
    rule(
        &mut css,
        ".btn-primary:hover",
        &[("background-color", theme.secondary_color), ("transform", "translateY(-2px)")],
    );
    let outline = format!("2px solid {primary}");
    rule(
        &mut css,
        ".btn-secondary",
        &[("background-color", "transparent"), ("color", primary), ("border", outline.as_str())],
    );
    rule(&mut css, ".btn-large", &[("padding", "16px 32px"), ("font-size", "1.1rem")]);
    rule(
        &mut css,
        ".cta-button",
        &[
            ("background-color", primary),
            ("color", "white !important"),
            ("padding", "8px 16px"),
            ("border-radius", "4px"),
        ],
    );
    rule(
        &mut css,
        ".hero",
        &[
            ("display", "grid"),
            ("grid-template-columns", "1fr 1fr"),
            ("align-items", "center"),
            ("gap", "4rem"),
            ("padding", "8rem 2rem 4rem"),
            ("max-width", "1200px"),
            ("margin", "0 auto"),
            ("min-height", "80vh"),
        ],
    );
    rule(&mut css, ".hero-title", &[("font-size", "3rem"), ("color", theme.text_color)]);
    rule(&mut css, ".hero-subtitle", &[("font-size", "1.25rem"), ("color", "#6B7280")]);
    rule(&mut css, ".hero-actions", &[("display", "flex"), ("gap", "1rem"), ("flex-wrap", "wrap")]);
    rule(
        &mut css,
        ".hero-image img",
        &[("width", "100%"), ("height", "auto"), ("border-radius", "12px")],
    );
    rule(&mut css, "section", &[("padding", "4rem 0")]);
    rule(&mut css, ".about, .contact", &[("background-color", theme.accent_color)]);
    rule(
        &mut css,
        ".services-grid, .contact-info",
        &[
            ("display", "grid"),
            ("grid-template-columns", "repeat(auto-fit, minmax(250px, 1fr))"),
            ("gap", "2rem"),
            ("margin-top", "3rem"),
        ],
    );
    rule(
        &mut css,
        ".service-card, .contact-item",
        &[
            ("background", "white"),
            ("padding", "2rem"),
            ("border-radius", "12px"),
            ("box-shadow", "0 4px 20px rgba(0,0,0,0.1)"),
            ("text-align", "center"),
        ],
    );
    rule(&mut css, ".service-card h3, .contact-item h3", &[("color", primary)]);
    rule(
        &mut css,
        ".testimonial",
        &[("background-color", primary), ("color", "white"), ("text-align", "center")],
    );
    rule(
        &mut css,
        ".testimonial blockquote",
        &[("font-size", "1.25rem"), ("font-style", "italic"), ("max-width", "800px"), ("margin", "0 auto")],
    );
    rule(&mut css, ".cta-section", &[("text-align", "center")]);
    rule(
        &mut css,
        ".footer",
        &[("background-color", theme.text_color), ("color", "white"), ("text-align", "center"), ("padding", "2rem 0")],
    );

    css.push_str("@media (max-width: 768px) {\n");
    rule(&mut css, ".hero", &[("grid-template-columns", "1fr"), ("text-align", "center"), ("padding", "6rem 1rem 2rem")]);
    rule(&mut css, ".hero-title", &[("font-size", "2rem")]);
    rule(&mut css, ".nav-links", &[("display", "none")]);
    rule(&mut css, ".services-grid, .contact-info", &[("grid-template-columns", "1fr")]);
    css.push_str("}\n");

    css
}

fn rule(css: &mut String, selector: &str, declarations: &[(&str, &str)]) {
    css.push_str(selector);
    css.push_str(" {\n");
    for (property, value) in declarations {
        css.push_str(&format!("    {property}: {value};\n"));
    }
    css.push_str("}\n\n");
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
