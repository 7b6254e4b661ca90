pub mod health;
pub mod history;
pub mod root;
pub mod tools;

pub use health::health_check;
pub use history::get_history;
pub use root::get_root;
pub use tools::{lookup_domain, validate_ip};
