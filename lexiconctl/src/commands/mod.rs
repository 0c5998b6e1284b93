mod browse;
mod config;
mod favorite;
mod prefs;

pub use browse::browse;
pub use config::config;
pub use favorite::favorite;
pub use prefs::prefs;
