pub mod broker;
pub mod domain;
pub mod notify;
pub mod view;

pub use broker::*;
pub use domain::*;
pub use notify::*;
pub use view::*;
