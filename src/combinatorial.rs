pub mod permutation;

pub use permutation::{k_permute, next_permutation, sub_permute, try_k_permute, try_sub_permute};
