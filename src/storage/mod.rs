pub mod traits;
pub mod ledger;

pub use traits::SeenStore;
pub use ledger::FileLedger;
