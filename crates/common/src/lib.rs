//! Types and helpers shared by the article server and the listing client.

pub mod types;
pub mod utils;
