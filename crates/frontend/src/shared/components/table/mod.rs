pub mod cell_format;
pub mod data_table;
pub mod number_format;

pub use data_table::DataTable;
