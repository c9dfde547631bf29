/// Metadata shared by every token of this contract.
pub const TOKEN_URI: &str =
    "ipfs://bafybeig37ioir76s7mg5oobetncojcm3c3hxasyd4rvid4jqhy4gkaheg4/?filename=0-PUG.json";
