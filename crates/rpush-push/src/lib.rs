mod config;
pub use config::{DEFAULT_TIMEOUT, PushConfig, parse_endpoint};

mod errors;
pub use errors::PushError;

mod push;
pub use push::{PushResponse, Pusher};

pub use reqwest::Url;
