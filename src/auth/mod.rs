mod gate;
mod token;

pub use gate::{require, AccessLevel};
pub use token::{Claims, TokenService};
