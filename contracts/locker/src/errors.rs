use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LockerError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    NotProposalManager = 2,
    NotDepositManager = 3,
    AlreadyDeposited = 4,
    NotDeposited = 5,
    LengthMismatch = 6,
    EmptyOwners = 7,
    InvalidShares = 8,
    DuplicateOwner = 9,
    InvalidFee = 10,
    FeeMismatch = 11,
    AltFeeTokenNotSet = 12,
    NoShare = 13,
    OwnerReputationMinted = 14,
    NonZeroAuthorityCount = 15,
    AuthorityAlreadyRegistered = 16,
    AuthorityNotRegistered = 17,
    ReputationNotBurned = 18,
    ArithmeticOverflow = 19,
}
