mod analysis;
mod common;
mod outreach;
