use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Chat,
    Sms,
}

/// Message template with `{{name}}` placeholders and an optional `{{#issues}}` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutreachTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub channel: Channel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'static str>,
    pub body: &'static str,
    pub variables: &'static [&'static str],
}

pub const EMAIL_LOW_SCORE: &str = "email-low-score";
pub const EMAIL_NO_WEBSITE: &str = "email-no-website";
pub const CHAT_FOLLOW_UP: &str = "chat-follow-up";
pub const SMS_URGENT: &str = "sms-urgent";

static STANDARD_TEMPLATES: [OutreachTemplate; 4] = [
    OutreachTemplate {
        id: EMAIL_LOW_SCORE,
        name: "Website Improvement - Low Score",
        channel: Channel::Email,
        subject: Some("Quick website analysis for {{businessName}} - Found some opportunities"),
        body: EMAIL_LOW_SCORE_BODY,
        variables: &[
            "businessName",
            "issues",
            "trafficIncrease",
            "leadIncrease",
            "location",
        ],
    },
    OutreachTemplate {
        id: EMAIL_NO_WEBSITE,
        name: "No Website - Opportunity",
        channel: Channel::Email,
        subject: Some("{{businessName}} - Missing out on {{leadIncrease}} potential customers?"),
        body: EMAIL_NO_WEBSITE_BODY,
        variables: &["businessName", "niche", "location", "leadIncrease"],
    },
    OutreachTemplate {
        id: CHAT_FOLLOW_UP,
        name: "Chat Follow-up",
        channel: Channel::Chat,
        subject: None,
        body: CHAT_FOLLOW_UP_BODY,
        variables: &["businessName", "leadIncrease"],
    },
    OutreachTemplate {
        id: SMS_URGENT,
        name: "SMS - Urgent Opportunity",
        channel: Channel::Sms,
        subject: None,
        body: "Hi {{businessName}}! Your website needs urgent updates. Missing {{leadIncrease}} potential customers monthly. Free analysis ready. Reply YES to see it.",
        variables: &["businessName", "leadIncrease"],
    },
];

/// Process-wide template table; read-only for the life of the process.
pub fn standard_templates() -> &'static [OutreachTemplate] {
    &STANDARD_TEMPLATES
}

pub fn find_template(id: &str) -> Option<&'static OutreachTemplate> {
    standard_templates().iter().find(|template| template.id == id)
}

const EMAIL_LOW_SCORE_BODY: &str = r#"Hi {{businessName}} team!

I hope this email finds you well. I recently came across your business and took a quick look at your website.

I noticed a few areas where some improvements could significantly boost your online presence:

{{#issues}}
• {{.}}
{{/issues}}

The good news? These improvements could potentially:
• Increase your website traffic by {{trafficIncrease}}
• Boost lead generation by {{leadIncrease}}
• Improve your search engine rankings

I've actually prepared a free redesign mockup that addresses these issues. Would you be interested in seeing how your website could look with these improvements?

I'd be happy to share it with you - no strings attached. If you like what you see, we can discuss how to implement these changes.

Would you have 10 minutes for a quick call this week?

Best regards,
[Your Name]
[Your Contact Information]

P.S. I've helped similar businesses in {{location}} increase their online leads by an average of {{leadIncrease}}. Happy to share some case studies if you're interested."#;

const EMAIL_NO_WEBSITE_BODY: &str = r#"Hi {{businessName}} team!

I was looking for local {{niche}} services in {{location}} and came across your business. You have great reviews and seem to provide excellent service!

However, I noticed you don't have a website yet. In today's digital world, this could be costing you significant business:

• 97% of consumers search online before making local purchases
• Businesses with websites get 40% more customers on average
• You could be missing out on {{leadIncrease}} more leads per month

I specialize in creating professional websites for local businesses like yours. I've helped other {{niche}} businesses in {{location}} increase their customer base significantly.

Would you be interested in seeing what a professional website could do for {{businessName}}? I can show you some examples and discuss a solution that fits your budget.

No pressure - just thought you might be interested in exploring this opportunity.

Best regards,
[Your Name]
[Your Contact Information]"#;

const CHAT_FOLLOW_UP_BODY: &str = r#"Hi! I'm following up on the website analysis I sent for {{businessName}}.

I found some quick wins that could boost your online presence by {{leadIncrease}}.

Would you like me to send you the free redesign mockup I created? It only takes 2 minutes to review.

Thanks!"#;
