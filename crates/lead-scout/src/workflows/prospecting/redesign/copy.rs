use serde::{Deserialize, Serialize};

use super::super::domain::BusinessRecord;
use super::theme::Niche;

/// Marketing copy for the redesigned landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyBlock {
    pub headline: String,
    pub subheadline: String,
    pub about_section: String,
    pub services_section: String,
    pub cta_text: String,
    pub testimonial: String,
}

pub fn generate_copy(business: &BusinessRecord, niche: &str) -> CopyBlock {
    let name = business.name.as_str();
    let location = business.location();

    match Niche::parse(niche) {
        Niche::Restaurants => CopyBlock {
            headline: format!("Exceptional Dining Experience at {name}"),
            subheadline: format!(
                "Discover authentic flavors and warm hospitality in the heart of {location}"
            ),
            about_section: format!(
                "Welcome to {name}, where culinary excellence meets exceptional service. Located in {location}, we pride ourselves on creating memorable dining experiences using the finest local ingredients and time-honored recipes."
            ),
            services_section: "Our menu features carefully crafted dishes that celebrate both traditional and contemporary cuisine. From intimate dinners to special celebrations, we provide an atmosphere that's perfect for any occasion.".to_string(),
            cta_text: "Reserve Your Table Today".to_string(),
            testimonial: format!(
                "\"The food at {name} is absolutely incredible. The atmosphere is perfect and the staff goes above and beyond to make every visit special.\" - Sarah M."
            ),
        },
        Niche::Dentists => CopyBlock {
            headline: format!("Your Smile is Our Priority at {name}"),
            subheadline: format!("Comprehensive dental care with a gentle touch in {location}"),
            about_section: format!(
                "At {name}, we believe everyone deserves a healthy, beautiful smile. Our experienced team provides comprehensive dental care in a comfortable, modern environment, using the latest technology and techniques."
            ),
            services_section: "We offer a full range of dental services including preventive care, cosmetic dentistry, and restorative treatments. Our gentle approach ensures your comfort while delivering exceptional results.".to_string(),
            cta_text: "Book Your Appointment".to_string(),
            testimonial: format!(
                "\"Dr. Smith and the team at {name} are fantastic. They made me feel comfortable and my smile has never looked better!\" - Michael R."
            ),
        },
        Niche::Plumbers => CopyBlock {
            headline: format!("Reliable Plumbing Solutions by {name}"),
            subheadline: format!("Professional plumbing services you can trust in {location}"),
            about_section: format!(
                "{name} has been serving {location} with reliable, professional plumbing services. Our experienced team is available 24/7 for emergencies and provides quality workmanship for all your plumbing needs."
            ),
            services_section: "From routine maintenance to emergency repairs, we handle everything including leak repairs, drain cleaning, water heater installation, and bathroom renovations. No job is too big or small.".to_string(),
            cta_text: "Call Now for Service".to_string(),
            testimonial: format!(
                "\"{name} saved the day when our pipes burst. They arrived quickly, fixed the problem professionally, and cleaned up perfectly.\" - Jennifer L."
            ),
        },
    }
}
