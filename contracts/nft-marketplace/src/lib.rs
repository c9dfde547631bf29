//! A marketplace for CIS2 NFTs paid in CCD.
//!
//! An owner lists a token at a price after approving this contract to
//! transfer it. Tokens stay with their owner while listed. A buyer pays at
//! least the price, the token is transferred to the buyer and the payment
//! is credited to the seller's proceeds, which the seller withdraws on
//! demand.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{events::*, nft::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod contract;
mod events;
mod impls;
mod nft;
mod structs;
