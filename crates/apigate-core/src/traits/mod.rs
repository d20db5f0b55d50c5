//! Seams between the session logic and the HTTP stack.

mod exchange;
mod executor;

pub use exchange::TokenExchange;
pub use executor::RequestExecutor;
