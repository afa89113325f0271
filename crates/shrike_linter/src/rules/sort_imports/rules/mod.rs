pub use sort_imports::*;

mod sort_imports;
