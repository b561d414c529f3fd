mod comments;
mod errors;

pub use comments::*;
pub use errors::*;
