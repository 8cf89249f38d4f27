pub mod forecast;
pub mod request;
pub mod result;

pub use forecast::*;
pub use request::*;
pub use result::*;
