use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ProposalManagerError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    NotLockerOwner = 2,
    ProposalNotFound = 3,
    ProposalExpired = 4,
    ProposalAlreadyExecuted = 5,
    ZeroReputation = 6,
    FeeMismatch = 7,
    InvalidConfig = 8,
    ProposalNotDecided = 9,
    CommittingTimeoutActive = 10,
    UnknownSelfCall = 11,
    InvalidCallArgs = 12,
    InsufficientBalance = 13,
    ArithmeticOverflow = 14,
}
