pub mod transport;
pub mod api_client;

pub use transport::*;
pub use api_client::*;
