#![deny(unsafe_code, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A value-or-error container with chained, short-circuiting binds over static and dynamic callables.

pub mod bind;
pub mod dynamic;
pub mod error;
pub mod outcome;

#[cfg(test)]
mod test;
