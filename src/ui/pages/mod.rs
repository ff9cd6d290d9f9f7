pub mod calculator;
pub mod tables;

pub use calculator::CalculatorPage;
pub use tables::TablesPage;
