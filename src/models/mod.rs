//! Data models for the Freshdesk and Freshservice APIs.
//!
//! This module contains the resource types sent and received by the product
//! wrappers. Types used by both products live in `common`; the rest are
//! split per product and re-exported from [`crate::freshdesk`] and
//! [`crate::freshservice`].

mod common;
pub mod freshdesk;
pub mod freshservice;

pub use common::*;
