// Adapters implementing the application ports

pub mod google_sheets;
pub mod in_memory_sheets;

pub use google_sheets::GoogleSheetsSource;
pub use in_memory_sheets::InMemorySheetSource;
