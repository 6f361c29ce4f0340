// Adapters layer: concrete implementations of the domain ports (file storage, stdout).

pub mod printer;
pub mod storage;

pub use printer::StdoutPrinter;
pub use storage::LocalStorage;
