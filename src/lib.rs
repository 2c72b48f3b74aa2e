pub mod combinatorial;
pub mod error;
pub mod filter;
pub mod numeric;

pub use combinatorial::{k_permute, next_permutation, sub_permute};
pub use error::{Error, Result};
