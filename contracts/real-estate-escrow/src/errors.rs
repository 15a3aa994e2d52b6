use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadyListed = 4,
    NotListed = 5,
    ListingNotFound = 6,
    InvalidAmount = 7,
    InvalidBuyer = 8,
    InsufficientDeposit = 9,
    InsufficientFunds = 10,
    InspectionNotPassed = 11,
    ApprovalIncomplete = 12,
    Overfunded = 13,
}
