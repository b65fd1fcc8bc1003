pub mod listings;
pub mod site_scoring;
