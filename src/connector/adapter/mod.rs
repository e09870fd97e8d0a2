mod http_transport;
mod mock_transport;

pub use http_transport::*;
pub use mock_transport::*;
