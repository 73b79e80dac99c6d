mod storage;
pub use storage::LocalStorage;

mod timer;
pub use timer::TimeoutScheduler;
