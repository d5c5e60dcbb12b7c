//! Service context bundling the loaded contract and port trait objects.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::loopback::LoopbackTransport;
use crate::config::ContractConfig;
use crate::ports::filesystem::FileSystem;
use crate::ports::transport::Transport;

/// Everything a command needs: the contract it validates against and the
/// boundaries it talks through.
pub struct ServiceContext {
    /// Validation rules and wire layout.
    pub config: ContractConfig,
    /// Filesystem for reading payloads and writing output.
    pub fs: Box<dyn FileSystem>,
    /// Transport to the specification service.
    pub transport: Box<dyn Transport>,
}

impl ServiceContext {
    /// Creates a context from explicit parts.
    #[must_use]
    pub fn new(
        config: ContractConfig,
        fs: Box<dyn FileSystem>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self { config, fs, transport }
    }

    /// Creates a live context: real disk, and the loopback service standing
    /// in for the remote one.
    #[must_use]
    pub fn live(config: ContractConfig) -> Self {
        let transport = LoopbackTransport::new(Box::new(LiveClock), config.clone());
        Self::new(config, Box::new(LiveFileSystem), Box::new(transport))
    }
}
