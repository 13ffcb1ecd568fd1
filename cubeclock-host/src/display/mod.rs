//! Terminal output

mod terminal;

pub use terminal::Terminal;
