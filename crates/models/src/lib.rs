pub mod category;
pub mod error;
pub mod notification;

pub use category::*;
pub use error::ModelError;
pub use notification::*;
