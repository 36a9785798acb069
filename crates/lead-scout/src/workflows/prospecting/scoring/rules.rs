use super::super::domain::{CategoryScores, ScoreResult, WebsiteSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Performance,
    Seo,
    Accessibility,
    Design,
    Content,
}

impl Category {
    pub(crate) const fn ordered() -> [Self; 5] {
        [
            Self::Performance,
            Self::Seo,
            Self::Accessibility,
            Self::Design,
            Self::Content,
        ]
    }

    pub(crate) const fn max_points(self) -> i32 {
        match self {
            Self::Performance | Self::Seo => 25,
            Self::Accessibility => 20,
            Self::Design | Self::Content => 15,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Performance => 0,
            Self::Seo => 1,
            Self::Accessibility => 2,
            Self::Design => 3,
            Self::Content => 4,
        }
    }
}

/// Running totals while the rubric walks its checks.
struct Tally {
    total: i32,
    categories: [i32; 5],
    issues: Vec<String>,
    recommendations: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            total: 100,
            categories: Category::ordered().map(Category::max_points),
            issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// `category == None` deducts from the overall total only.
    fn deduct(
        &mut self,
        category: Option<Category>,
        points: i32,
        issue: &str,
        recommendation: Option<&str>,
    ) {
        self.issues.push(issue.to_string());
        if let Some(recommendation) = recommendation {
            self.recommendations.push(recommendation.to_string());
        }
        if let Some(category) = category {
            self.categories[category.index()] -= points;
        }
        self.total -= points;
    }

    fn finish(self) -> ScoreResult {
        let clamp = |value: i32| value.clamp(0, 100) as u8;
        let [performance, seo, accessibility, design, content] = self.categories.map(clamp);

        ScoreResult {
            score: clamp(self.total),
            issues: self.issues,
            recommendations: self.recommendations,
            category_scores: CategoryScores {
                performance,
                seo,
                accessibility,
                design,
                content,
            },
        }
    }
}

pub(crate) fn score_summary(summary: &WebsiteSummary, business_name: &str) -> ScoreResult {
    let mut tally = Tally::new();

    if summary.load_time_ms > 3000 {
        tally.deduct(
            Some(Category::Performance),
            10,
            "Slow loading speed (>3 seconds)",
            Some("Optimize images and reduce server response time"),
        );
    }
    if summary.load_time_ms > 5000 {
        tally.deduct(
            Some(Category::Performance),
            10,
            "Very slow loading speed (>5 seconds)",
            None,
        );
    }
    if !summary.has_ssl {
        tally.deduct(
            Some(Category::Performance),
            15,
            "No SSL certificate",
            Some("Install SSL certificate for security and SEO"),
        );
    }

    if summary.title.chars().count() < 10 {
        tally.deduct(
            Some(Category::Seo),
            8,
            "Missing or poor page title",
            Some("Add descriptive page titles with business name"),
        );
    }
    if summary.meta_description.chars().count() < 50 {
        tally.deduct(
            Some(Category::Seo),
            7,
            "Missing or poor meta description",
            Some("Add compelling meta descriptions for better search results"),
        );
    }
    if summary.heading_count == 0 {
        tally.deduct(
            Some(Category::Seo),
            10,
            "No heading structure",
            Some("Use proper heading tags (H1, H2, H3) for content structure"),
        );
    }

    if !summary.is_mobile_responsive {
        tally.deduct(
            Some(Category::Accessibility),
            15,
            "Not mobile responsive",
            Some("Implement responsive design for mobile users"),
        );
    }
    // Image-heavy pages with few headings stand in for missing alt text.
    if summary.image_count > 5 && u64::from(summary.image_count) > u64::from(summary.heading_count) * 2
    {
        tally.deduct(
            Some(Category::Accessibility),
            5,
            "Potentially missing alt text for images",
            Some("Add descriptive alt text to all images"),
        );
    }

    if !summary.has_call_to_action {
        tally.deduct(
            Some(Category::Design),
            10,
            "No clear call-to-action",
            Some("Add prominent call-to-action buttons"),
        );
    }
    if summary.link_count < 5 {
        tally.deduct(
            Some(Category::Design),
            5,
            "Limited navigation/internal linking",
            Some("Improve site navigation and internal linking"),
        );
    }

    if !summary.has_contact_info {
        tally.deduct(
            Some(Category::Content),
            10,
            "Missing contact information",
            Some("Add clear contact information and location details"),
        );
    }
    if summary.body_excerpt.chars().count() < 100 {
        tally.deduct(
            Some(Category::Content),
            5,
            "Insufficient content",
            Some("Add more descriptive content about your services"),
        );
    }

    if !title_mentions_business(&summary.title, business_name) {
        tally.deduct(
            None,
            5,
            "Business name not prominent in title",
            Some("Include business name in page title for better branding"),
        );
    }

    tally.finish()
}

fn title_mentions_business(title: &str, business_name: &str) -> bool {
    let lowered = business_name.to_lowercase();
    let first_word = lowered.split(' ').next().unwrap_or_default();
    title.to_lowercase().contains(first_word)
}
