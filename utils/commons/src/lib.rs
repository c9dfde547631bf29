//! It exposes all common structs, types and errors shared by the
//! marketplace and the NFT contract.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, structs::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

pub mod test;

mod constants;
mod errors;
mod structs;
mod types;
