//! A basic NFT smart contract using the Concordium Token Standard CIS2.
//!
//! # Description
//! Anyone can mint a token through `mintNft`. Tokens are numbered by a
//! counter starting at zero and all of them share the same metadata.
//!
//! Besides the CIS2 operators, which may transfer every token of an owner,
//! an owner can approve a single address per token through `approve`. The
//! approved address may transfer that one token, which is how the
//! marketplace gets the right to deliver a sold token to its buyer. The
//! approval is cleared whenever the token changes hands.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.
#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod impls;
mod structs;
