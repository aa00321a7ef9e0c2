//! Wire codecs for the protocol record types.

pub mod json;
