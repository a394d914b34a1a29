use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Price must be greater than zero")]
    InvalidPrice,
    #[msg("Quantity must be greater than zero")]
    InvalidQuantity,
    #[msg("Asset must be unique")]
    AssetNotUnique,
    #[msg("Only the owner of this listing can modify it")]
    NotListingOwner,
    #[msg("Insufficient payment")]
    InsufficientPayment,
    #[msg("Payment does not match quantity times unitary price")]
    IncorrectPayment,
    #[msg("Pay receiver must be owner of the listing")]
    PaymentReceiverNotOwner,
    #[msg("Listing does not hold enough tickets")]
    InsufficientInventory,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Vault account does not belong to the platform")]
    InvalidVault,
    #[msg("Ticket name is too long")]
    NameTooLong,
    #[msg("Ticket link is too long")]
    TicketLinkTooLong,
}
