mod tiberius;

pub use self::in_memory_test::{InMemoryTestOpener, RecordedAttempt, TestHandle};
pub use self::tiberius::{MssqlConnection, TiberiusOpener};
