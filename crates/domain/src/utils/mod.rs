//! Pure helpers used by accessors and callers

pub mod armory;
pub mod gold;
