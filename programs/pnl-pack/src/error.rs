use anchor_lang::prelude::*;

#[error_code]
pub enum PackError {
    #[msg("Supplied account does not match the address derived from its seeds")]
    AddressMismatch,

    #[msg("Signer is not the pool authority")]
    Unauthorized,

    #[msg("Source holding has insufficient balance for this transfer")]
    InsufficientBalance,

    #[msg("A pack needs four distinct tickers and four distinct mints")]
    InvalidComposition,

    #[msg("Ticker must be between 1 and 32 bytes")]
    InvalidTickerLength,

    #[msg("Ticker is not part of this pack")]
    TickerNotInPack,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Vault allocation exceeds total supply")]
    AllocationExceedsSupply,

    #[msg("No valid bump exists for the supplied seeds")]
    AddressDerivationFailed,

    #[msg("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn error_code(err: &anchor_lang::error::Error) -> Option<u32> {
    use anchor_lang::error::Error;

    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        Error::ProgramError(_) => None,
    }
}
