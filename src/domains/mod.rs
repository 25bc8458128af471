//! Domains module containing business logic organized by bounded contexts.
//!
//! - **calculator**: operation parsing, arithmetic and the calculation service
//! - **history**: storage for completed calculations

pub mod calculator;
pub mod history;
