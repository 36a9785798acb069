//! Outreach copy: the template table, the placeholder engine, the per-branch composer, and
//! campaign assembly.

mod campaign;
mod composer;
mod render;
mod templates;

pub use campaign::{
    campaign_roi, create_campaign, generate_message, CampaignError, CampaignRoi, CampaignStats,
    CampaignStatus, GeneratedMessage, OutreachCampaign, TemplateSummary,
};
pub use composer::{compose, fallback_messages, OutreachBranch};
pub use render::{
    render, render_subject, render_text, template_variables, RenderContext, TemplateValue,
    TemplateVariables,
};
pub use templates::{
    find_template, standard_templates, Channel, OutreachTemplate, CHAT_FOLLOW_UP,
    EMAIL_LOW_SCORE, EMAIL_NO_WEBSITE, SMS_URGENT,
};
