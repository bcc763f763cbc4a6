use anchor_lang::prelude::*;

#[error_code]
pub enum PollError {
    #[msg("Caller is not allowed to perform this action")]
    Unauthorized,

    #[msg("Poll does not exist")]
    PollNotFound,

    #[msg("Poll is closed")]
    PollClosed,

    #[msg("Tree depth must be between 1 and 32")]
    InvalidDepth,

    #[msg("Identity group is full - maximum capacity reached")]
    TreeFull,

    #[msg("Nullifier has already been used in this poll")]
    NullifierAlreadyUsed,

    #[msg("Invalid ZK proof - verification failed")]
    InvalidProof,

    #[msg("Action data could not be decoded")]
    MalformedActionData,

    #[msg("Identity commitment is not a valid field element")]
    InvalidCommitment,

    #[msg("Publication already carries a poll")]
    PublicationAlreadyHasPoll,

    #[msg("Verifying key contains an empty or non-canonical point")]
    InvalidVerifyingKey,

    #[msg("Arithmetic overflow in poll counter")]
    ArithmeticOverflow,

    #[msg("Poseidon hash could not be computed")]
    PoseidonHashFailed,
}
