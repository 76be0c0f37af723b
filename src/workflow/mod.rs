pub mod catalog;
pub mod conversion;
pub mod definition;
pub mod document;
pub mod fields;

pub use catalog::*;
pub use conversion::*;
pub use definition::*;
pub use document::*;
pub use fields::*;
