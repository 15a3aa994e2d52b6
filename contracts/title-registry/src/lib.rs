#![no_std]

mod entities;
mod errors;
mod registry_contract;

pub use errors::Error;
pub use registry_contract::{TitleRegistry, TitleRegistryClient};

#[cfg(test)]
mod test;
