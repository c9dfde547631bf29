use super::*;

mod basic_nft;
mod marketplace;
mod token;

pub use self::{basic_nft::*, marketplace::*, token::*};
