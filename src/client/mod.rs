pub mod concord;
pub mod netsdk;
pub mod response;

pub use concord::ConcordClient;
pub use netsdk::NetsdkClient;
pub use response::ApiResponse;
