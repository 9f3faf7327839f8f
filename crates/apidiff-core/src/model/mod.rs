pub mod symbol;
pub mod table;

pub use symbol::{Definition, Kind, SymbolId};
pub use table::SymbolTable;
