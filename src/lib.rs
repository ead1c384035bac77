pub mod cli;
pub mod debug;
pub mod labels;
pub mod model;
pub mod store;
pub mod tui;
pub mod util;
