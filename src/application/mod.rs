//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod mood;
pub mod session;
pub mod store;
pub mod wellness;

pub use manage_config::ConfigService;
pub use mood::MoodService;
pub use session::drive;
pub use store::Store;
pub use wellness::WellnessService;
