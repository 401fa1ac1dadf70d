//! Action provider implementations for different participant behaviors.

mod aggressive;
mod default_policy;
mod scripted;

pub use aggressive::AggressivePolicy;
pub use default_policy::DefaultPolicy;
pub use scripted::ScriptedPolicy;
