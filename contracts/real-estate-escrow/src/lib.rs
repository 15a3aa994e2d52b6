#![no_std]

mod entities;
mod errors;
mod escrow_contract;
mod registry;
mod storage;

pub use entities::{EscrowConfig, Listing, ListingStatus, SaleOutcome};
pub use errors::Error;
pub use escrow_contract::{RealEstateEscrow, RealEstateEscrowClient};
pub use registry::{TitleRegistryClient, TitleRegistryInterface};
