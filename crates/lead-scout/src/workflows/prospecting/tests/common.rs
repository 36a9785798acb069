use crate::workflows::prospecting::domain::{BusinessRecord, WebsiteSummary};

pub(super) fn good_summary() -> WebsiteSummary {
    WebsiteSummary {
        title: "Acme Plumbing | Emergency plumbers in Leeds".to_string(),
        meta_description:
            "Family-run emergency plumbers covering Leeds and the surrounding villages since 1998."
                .to_string(),
        body_excerpt: "Acme Plumbing fixes leaks, boilers, and blocked drains across Leeds. \
                       Call today for a same-day visit from a Gas Safe registered engineer."
            .to_string(),
        has_ssl: true,
        load_time_ms: 850,
        is_mobile_responsive: true,
        has_contact_info: true,
        has_call_to_action: true,
        heading_count: 4,
        image_count: 3,
        link_count: 14,
        contact_email: Some("info@acmeplumbing.co.uk".to_string()),
        ..WebsiteSummary::default()
    }
}

pub(super) fn business(name: &str, website: Option<&str>) -> BusinessRecord {
    BusinessRecord {
        name: name.to_string(),
        website: website.map(str::to_string),
        phone: Some("0113 496 0000".to_string()),
        email: None,
        address: "12 Kirkgate, Leeds, LS1 6BY".to_string(),
        rating: Some(4.6),
        review_count: Some(87),
        place_id: Some(format!("place-{}", name.to_lowercase().replace(' ', "-"))),
    }
}

pub(super) fn acme() -> BusinessRecord {
    business("Acme Plumbing", Some("https://acmeplumbing.co.uk"))
}
