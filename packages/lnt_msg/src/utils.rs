use std::{collections::HashSet, hash::Hash};

pub const SECONDS_PER_DAY: u64 = 24 * 3_600;

/// Bank denom of a custodied NFT
pub fn nft_denom(nft_class: &str, token_id: &str) -> String {
    format!("{}/{}", nft_class, token_id)
}

pub fn has_unique_elements<T>(iter: T) -> bool
where
    T: IntoIterator,
    T::Item: Eq + Hash,
{
    let mut uniq = HashSet::new();
    iter.into_iter().all(move |x| uniq.insert(x))
}
