pub mod error;
pub mod flatten;
pub mod loader;
pub mod node;
pub mod reader;
pub mod resolver;

pub use error::*;
pub use flatten::*;
pub use loader::*;
pub use node::*;
pub use reader::*;
pub use resolver::*;
