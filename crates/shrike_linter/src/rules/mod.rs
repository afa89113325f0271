pub mod sort_imports;
