pub mod node;
pub mod project;
pub mod settings;

pub use node::*;
pub use project::*;
pub use settings::*;
