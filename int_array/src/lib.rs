#![deny(rustdoc::broken_intra_doc_links)] // error if there are broken intra-doc links
#![deny(rustdoc::invalid_html_tags)] // no broken html in docs
#![deny(rustdoc::invalid_rust_codeblocks)] // code blocks should not be broken

pub mod dyn_array;
pub mod error;
pub mod traits;

pub use dyn_array::DynamicIntArray;
pub use error::{IntArrayError, Result};
pub use traits::IntAccess;
