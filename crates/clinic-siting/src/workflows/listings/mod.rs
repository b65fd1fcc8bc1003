//! Synthetic marketplace data for demos and empty states.

pub mod domain;
mod export;
mod generator;
mod rng;
pub mod router;

pub use domain::{
    BoardCategory, BuildingListing, CommunityPost, CompetitionLevel, PharmacyTransfer,
    SeedDataset,
};
pub use export::write_csv;
pub use generator::{ListingGenerator, ListingRequestError, SeedConfig, SeedCounts};
pub use rng::SeedRng;
pub use router::{listings_router, SeedQuery};
