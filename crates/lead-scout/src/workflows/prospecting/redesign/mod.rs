mod copy;
mod mockup;
mod theme;

pub use copy::{generate_copy, CopyBlock};
pub use mockup::{generate_redesign, redesign_url, RedesignMockup};
pub use theme::{select_theme, Niche, Theme};
