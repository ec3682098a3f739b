pub mod results;

pub use results::SearchResultsTable;
