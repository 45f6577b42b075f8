// Adapters layer: concrete implementations for the outside world (http server, http client, randomness).

pub mod client;
pub mod http;
pub mod random;
