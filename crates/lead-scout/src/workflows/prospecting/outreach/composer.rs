use super::super::domain::{BusinessRecord, ComposedMessages, Priority, RoiEstimate};
use super::super::scoring::LOW_SCORE_THRESHOLD;

/// Which pitch a business receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutreachBranch {
    NoWebsite,
    NeedsImprovement,
    Healthy,
}

impl OutreachBranch {
    pub fn classify(business: &BusinessRecord, score: u8) -> Self {
        if business.website_url().is_none() {
            Self::NoWebsite
        } else if score < LOW_SCORE_THRESHOLD {
            Self::NeedsImprovement
        } else {
            Self::Healthy
        }
    }
}

/// Builds the email, chat, and SMS pitches for one business.
pub fn compose(
    business: &BusinessRecord,
    score: u8,
    roi: &RoiEstimate,
    priority: Priority,
) -> ComposedMessages {
    let name = business.name.as_str();
    let urgency = priority.urgency_phrase();
    let traffic = roi.traffic_increase();
    let leads = roi.lead_increase();

    match OutreachBranch::classify(business, score) {
        OutreachBranch::NoWebsite => ComposedMessages {
            email: format!(
                "Hi {name} team! I noticed you don't have a website yet. In today's digital world, this could be costing you {leads} more leads per month. I'd love to show you how a professional website could transform your business. Would you be interested in a quick 10-minute call this week?"
            ),
            chat: format!(
                "Hi! I noticed {name} doesn't have a website. This could be costing you customers daily. I can show you a quick solution - interested?"
            ),
            sms: format!(
                "Hi {name}! Missing website = missing customers. I can help. Reply YES for free consultation."
            ),
        },
        OutreachBranch::NeedsImprovement => ComposedMessages {
            email: format!(
                "Hi {name} team! I analyzed your website and found it needs {urgency}. The good news? These improvements could increase your traffic by {traffic} and leads by {leads}. I've prepared a detailed analysis and redesign mockup. Would you be interested in a quick 15-minute call to review the opportunities?"
            ),
            chat: format!(
                "Hi! I analyzed {name}'s website and found ways to increase your leads by {leads}. I've created a free improvement plan - can I share it?"
            ),
            sms: format!(
                "Hi {name}! Your website needs {urgency}. I can increase your leads by {leads}. Reply YES for free analysis."
            ),
        },
        OutreachBranch::Healthy => ComposedMessages {
            email: format!(
                "Hi {name}! Your website looks good, but I've identified {urgency} that could drive {leads} more leads your way. Would you be open to a brief conversation about maximizing your online potential?"
            ),
            chat: format!(
                "Hello! I found quick wins for {name}'s website that could boost leads by {leads}. Interested in seeing what I discovered?"
            ),
            sms: format!(
                "Hi! Quick website tips for {name} = {leads} more leads. Reply YES for details."
            ),
        },
    }
}

/// Generic pitch used when a business could not be analyzed.
pub fn fallback_messages(business_name: &str) -> ComposedMessages {
    let name = business_name;
    ComposedMessages {
        email: format!(
            "Hi {name}! I'd love to discuss improving your online presence and digital marketing. Based on my initial research, there are significant opportunities to increase your visibility and customer acquisition. Can we schedule a quick 15-minute call this week?"
        ),
        chat: format!(
            "Hi! I've been researching {name} and found some great opportunities to boost your online presence. Interested in hearing more?"
        ),
        sms: format!(
            "Hi {name}! I found ways to improve your online visibility. Reply YES for free consultation."
        ),
    }
}
