//! Data model for agency snapshots.
//!
//! A snapshot is the flat list of top-tier agencies returned by one fetch.
//! Snapshots are never merged: each successful fetch replaces the previous
//! [`AgencyTable`] wholesale.

mod agency;

pub use agency::*;
