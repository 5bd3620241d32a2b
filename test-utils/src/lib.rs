pub mod fixtures;
pub mod mock_rpc;
pub mod mock_uploader;

pub use fixtures::write_keypair_file;
pub use mock_rpc::{MockBehavior, MockRpcConnection};
pub use mock_uploader::MockUploader;
