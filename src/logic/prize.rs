//! Prize pool and entry fee.

use crate::models::{EntryFee, Prize};

/// Sum of every prize amount (0 for no prizes).
pub fn prize_pool(prizes: &[Prize]) -> f64 {
    prizes.iter().map(|p| p.amount).sum()
}

/// The first prize amount is the entry fee; zero, or no prizes at all, is free.
pub fn entry_fee(prizes: &[Prize]) -> EntryFee {
    match prizes.first() {
        Some(p) if p.amount != 0.0 => EntryFee::Paid(p.amount),
        _ => EntryFee::Free,
    }
}
