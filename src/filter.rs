pub mod update;

pub use update::{percentage_step, sample_interval, UpdateFilter};
