pub mod cast;
pub mod percentage;

pub use cast::narrow;
pub use percentage::int_percentage;
