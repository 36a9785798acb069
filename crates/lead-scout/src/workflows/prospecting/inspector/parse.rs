//! Regex-based homepage summariser.
//!
//! Pages are never parsed into a DOM; each signal the scoring rubric needs is pulled out with a
//! targeted pattern over the raw markup.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

use super::super::domain::WebsiteSummary;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("valid regex"));
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid regex"));
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h[1-6]\b[^>]*>(.*?)</h[1-6]\s*>").expect("valid heading regex")
});
static IMG_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("valid regex"));
static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)(<a\b[^>]*>)(.*?)</a\s*>").expect("valid anchor regex"));
static OPEN_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(\w+)\b[^>]*>").expect("valid regex"));
static NON_VISIBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<noscript\b.*?</noscript\s*>|<!--.*?-->")
        .expect("valid regex")
});
static BODY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static CONTACT_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)contact\s+(us|info|details)|phone|email|call\s+(us|now)|reach\s+out|get\s+in\s+touch")
        .expect("valid contact regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("valid phone regex"));
static CONTACT_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*\bhref\s*=\s*["']\s*(tel|mailto):"#).expect("valid regex")
});
static CTA_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)book\s+(now|appointment)|order\s+(now|online)|buy\s+now|contact\s+(us|now)|call\s+(now|today)|get\s+(quote|started)|learn\s+more|sign\s+up|schedule|reserve|purchase|shop\s+now",
    )
    .expect("valid cta regex")
});
static SUBMIT_INPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<input\b[^>]*\btype\s*=\s*["']?submit"#).expect("valid regex")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});
static PRIORITY_MAILBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(info|contact|hello|enquiries|sales|support)@").expect("valid regex")
});

fn attr_regex(attr: &str) -> Regex {
    let pattern = format!(r#"(?is)(?:^|\s){attr}\s*=\s*(?:"([^"]*)"|'([^']*)')"#);
    Regex::new(&pattern).expect("valid attribute regex")
}

static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("class"));
static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("id"));
static SRC_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("src"));
static HREF_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("href"));
static CONTENT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("content"));
static NAME_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("name"));
static PROPERTY_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| attr_regex("property"));

/// Tag attributes the summariser reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attr {
    Class,
    Id,
    Src,
    Href,
    Content,
    Name,
    Property,
}

impl Attr {
    fn pattern(self) -> &'static Regex {
        match self {
            Attr::Class => &CLASS_ATTR_RE,
            Attr::Id => &ID_ATTR_RE,
            Attr::Src => &SRC_ATTR_RE,
            Attr::Href => &HREF_ATTR_RE,
            Attr::Content => &CONTENT_ATTR_RE,
            Attr::Name => &NAME_ATTR_RE,
            Attr::Property => &PROPERTY_ATTR_RE,
        }
    }
}

const MAX_HEADINGS: u32 = 10;
const MAX_HEADING_CHARS: usize = 200;
const EXCERPT_CHARS: usize = 300;
const PLACEHOLDER_MARKERS: [&str; 6] = [
    "noreply",
    "no-reply",
    "example.com",
    "test.com",
    "placeholder",
    "yoursite.com",
];
const ASSET_SUFFIXES: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// Summarises fetched markup for the scoring rubric.
pub fn summarize_page(url: &str, html: &str, load_time_ms: u64) -> WebsiteSummary {
    let visible = NON_VISIBLE_RE.replace_all(html, " ");
    let body_markup = BODY_RE
        .captures(&visible)
        .and_then(|caps| caps.get(1))
        .map_or(&*visible, |m| m.as_str());
    let body_text = decode_entities(&TAG_RE.replace_all(body_markup, " "));

    let title = TITLE_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| collapse_whitespace(&decode_entities(m.as_str())))
        .unwrap_or_default();
    let meta_description = find_meta_content(html, Attr::Name, "description").unwrap_or_default();

    let is_mobile_responsive = find_meta_content(html, Attr::Name, "viewport")
        .is_some_and(|content| content.contains("width=device-width"));

    let body_excerpt = if !meta_description.is_empty() {
        meta_description.clone()
    } else if let Some(og) = find_meta_content(html, Attr::Property, "og:description") {
        og
    } else {
        let head: String = body_text.chars().take(EXCERPT_CHARS).collect();
        collapse_whitespace(&head)
    };

    WebsiteSummary {
        title,
        meta_description,
        body_excerpt,
        has_ssl: url.starts_with("https://"),
        load_time_ms,
        is_mobile_responsive,
        has_contact_info: has_contact_info(&visible, &body_text),
        has_call_to_action: has_call_to_action(&visible, &body_text),
        heading_count: count_headings(&visible),
        image_count: count_images(url, html),
        link_count: count_links(url, &visible),
        contact_email: extract_email_from_content(html),
        ..WebsiteSummary::default()
    }
}

/// Picks the most business-like address from free text.
///
/// Placeholder and no-reply addresses are ignored; shared mailboxes such as `info@` or
/// `sales@` win over personal ones.
pub fn extract_email_from_content(content: &str) -> Option<String> {
    let candidates: Vec<&str> = EMAIL_RE
        .find_iter(content)
        .map(|m| m.as_str())
        .filter(|email| email.len() > 5)
        .filter(|email| {
            let lowered = email.to_ascii_lowercase();
            !PLACEHOLDER_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker))
                && !ASSET_SUFFIXES
                    .iter()
                    .any(|suffix| lowered.ends_with(suffix))
        })
        .collect();

    candidates
        .iter()
        .find(|email| PRIORITY_MAILBOX_RE.is_match(email))
        .or_else(|| candidates.first())
        .map(|email| (*email).to_string())
}

fn has_contact_info(markup: &str, body_text: &str) -> bool {
    if CONTACT_TEXT_RE.is_match(body_text)
        || PHONE_RE.is_match(body_text)
        || CONTACT_LINK_RE.is_match(markup)
    {
        return true;
    }

    OPEN_TAG_RE.find_iter(markup).any(|m| {
        let tag = m.as_str();
        has_class_token(tag, |token| token == "contact")
            || extract_attr(tag, Attr::Id).is_some_and(|id| id == "contact")
    })
}

fn has_call_to_action(markup: &str, body_text: &str) -> bool {
    if CTA_TEXT_RE.is_match(body_text) || SUBMIT_INPUT_RE.is_match(markup) {
        return true;
    }

    let cta_element = OPEN_TAG_RE.captures_iter(markup).any(|caps| {
        let tag = caps.get(0).map_or("", |m| m.as_str());
        let name = caps.get(1).map_or("", |m| m.as_str());
        name.eq_ignore_ascii_case("button")
            || has_class_token(tag, |token| {
                matches!(token, "btn" | "cta" | "call-to-action")
            })
    });
    if cta_element {
        return true;
    }

    ANCHOR_RE.captures_iter(markup).any(|caps| {
        let tag = caps.get(1).map_or("", |m| m.as_str());
        let text = caps.get(2).map_or("", |m| m.as_str());
        let class = extract_attr(tag, Attr::Class)
            .unwrap_or_default()
            .to_ascii_lowercase();
        CTA_TEXT_RE.is_match(&TAG_RE.replace_all(text, " "))
            || class.contains("btn")
            || class.contains("cta")
    })
}

fn count_headings(markup: &str) -> u32 {
    let count = HEADING_RE
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .map(|m| collapse_whitespace(&TAG_RE.replace_all(m.as_str(), " ")))
        .filter(|text| !text.is_empty() && text.chars().count() < MAX_HEADING_CHARS)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX).min(MAX_HEADINGS)
}

fn count_images(page_url: &str, html: &str) -> u32 {
    let count = IMG_TAG_RE
        .find_iter(html)
        .filter_map(|m| extract_attr(m.as_str(), Attr::Src))
        .map(|src| absolutize_url(page_url, &src).unwrap_or(src))
        .filter(|src| !src.contains("data:image") && src.len() > 10)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn count_links(page_url: &str, markup: &str) -> u32 {
    let count = ANCHOR_RE
        .captures_iter(markup)
        .filter_map(|caps| caps.get(1))
        .filter_map(|tag| extract_attr(tag.as_str(), Attr::Href))
        .filter_map(|href| absolutize_url(page_url, &href))
        .filter(|href| href.starts_with("http") && !href.contains("javascript:"))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn has_class_token(tag: &str, predicate: impl Fn(&str) -> bool) -> bool {
    extract_attr(tag, Attr::Class).is_some_and(|class| {
        class
            .to_ascii_lowercase()
            .split_whitespace()
            .any(|token| predicate(token))
    })
}

fn find_meta_content(html: &str, key_attr: Attr, key_value: &str) -> Option<String> {
    META_TAG_RE.find_iter(html).find_map(|m| {
        let tag = m.as_str();
        let key = extract_attr(tag, key_attr)?;
        if key.eq_ignore_ascii_case(key_value) {
            extract_attr(tag, Attr::Content).map(|content| decode_entities(&content))
        } else {
            None
        }
    })
}

fn extract_attr(tag: &str, attr: Attr) -> Option<String> {
    attr.pattern()
        .captures(tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().trim().to_string())
}

fn absolutize_url(base_url: &str, candidate: &str) -> Option<String> {
    let candidate = candidate.replace("&amp;", "&");
    let base = Url::parse(base_url).ok()?;
    base.join(&candidate).ok().map(|url| url.to_string())
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_BUILT: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Acme Plumbing | Harrogate's emergency plumbers</title>
  <meta name="description" content="Acme Plumbing fixes leaks, boilers and blocked drains across Harrogate, 24 hours a day.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <script>var heading = "<h1>not a heading</h1>";</script>
</head>
<body>
  <h1>Acme Plumbing</h1>
  <h2>Services</h2>
  <h3>   </h3>
  <img src="/img/van.jpg" alt="Our van">
  <img src="data:image/png;base64,AAAA">
  <a href="/about">About</a>
  <a href="https://acme.test/services">Services</a>
  <a href="javascript:void(0)">Menu</a>
  <a href="mailto:info@acme.test">Email us</a>
  <a class="btn btn-primary" href="/quote">Get a quote</a>
</body>
</html>"#;

    #[test]
    fn summarises_core_signals() {
        let summary = summarize_page("https://acme.test/", WELL_BUILT, 420);

        assert_eq!(summary.title, "Acme Plumbing | Harrogate's emergency plumbers");
        assert!(summary.meta_description.starts_with("Acme Plumbing fixes leaks"));
        assert_eq!(summary.body_excerpt, summary.meta_description);
        assert!(summary.has_ssl);
        assert_eq!(summary.load_time_ms, 420);
        assert!(summary.is_mobile_responsive);
        assert_eq!(summary.heading_count, 2);
        assert_eq!(summary.image_count, 1);
        assert_eq!(summary.link_count, 3);
        assert!(summary.has_contact_info);
        assert!(summary.has_call_to_action);
        assert_eq!(summary.contact_email.as_deref(), Some("info@acme.test"));
        assert!(summary.is_reachable());
    }

    #[test]
    fn attribute_patterns_are_compiled_once() {
        for attr in [Attr::Class, Attr::Id, Attr::Src, Attr::Href, Attr::Content] {
            assert!(std::ptr::eq(attr.pattern(), attr.pattern()));
        }
        assert_eq!(
            extract_attr(r#"<meta property='og:title' content=" Acme ">"#, Attr::Content),
            Some("Acme".to_string())
        );
        assert_eq!(extract_attr(r#"<div data-id="x">"#, Attr::Id), None);
    }

    #[test]
    fn large_pages_walk_every_tag() {
        let mut html = String::from("<html><body>");
        for n in 0..3000 {
            html.push_str(&format!(
                r#"<div class="card"><img src="/img/photo-{n}.jpg" alt="Photo"><a href="/item/{n}">Item</a></div>"#
            ));
        }
        html.push_str(r#"<section id="contact"></section></body></html>"#);

        let summary = summarize_page("https://big.test/", &html, 0);

        assert_eq!(summary.image_count, 3000);
        assert_eq!(summary.link_count, 3000);
        assert!(summary.has_contact_info);
        assert!(!summary.has_call_to_action);
    }

    #[test]
    fn bare_page_scores_as_empty() {
        let summary = summarize_page("http://bare.test", "<html><body><p>Hi</p></body></html>", 10);

        assert!(summary.title.is_empty());
        assert!(!summary.has_ssl);
        assert!(!summary.is_mobile_responsive);
        assert!(!summary.has_contact_info);
        assert!(!summary.has_call_to_action);
        assert_eq!(summary.heading_count, 0);
        assert_eq!(summary.link_count, 0);
        assert_eq!(summary.body_excerpt, "Hi");
    }

    #[test]
    fn excerpt_falls_back_to_open_graph_description() {
        let html = r#"<head><meta property="og:description" content="Fresh bread daily"></head>"#;
        let summary = summarize_page("https://bakery.test", html, 0);
        assert_eq!(summary.body_excerpt, "Fresh bread daily");
        assert!(summary.meta_description.is_empty());
    }

    #[test]
    fn heading_count_is_capped() {
        let html = "<h2>Item</h2>".repeat(14);
        assert_eq!(summarize_page("https://x.test", &html, 0).heading_count, 10);
    }

    #[test]
    fn email_extraction_prefers_shared_mailboxes() {
        let content = "Write to jane.doe@shop.co.uk or sales@shop.co.uk, not noreply@shop.co.uk";
        assert_eq!(
            extract_email_from_content(content).as_deref(),
            Some("sales@shop.co.uk")
        );
    }

    #[test]
    fn email_extraction_skips_placeholders_and_assets() {
        assert_eq!(
            extract_email_from_content("you@example.com logo@2x.png"),
            None
        );
        assert_eq!(
            extract_email_from_content("owner@bistro.test").as_deref(),
            Some("owner@bistro.test")
        );
    }
}
