//! Row structs for the tables read by the repositories.
//!
//! Each row converts into the matching `skilledit_core` type.

pub mod character;
pub mod skill;
