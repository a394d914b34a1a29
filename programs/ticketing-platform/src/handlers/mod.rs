pub mod assigned_listing;
pub mod free_access_listing;
pub mod mint_ticket;
pub mod platform;
pub mod shared;

pub use assigned_listing::*;
pub use free_access_listing::*;
pub use mint_ticket::*;
pub use platform::*;
