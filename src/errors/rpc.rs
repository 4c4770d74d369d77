//! Shared RPC error types for blockchain provider operations.

/// Errors that can occur while setting up or talking to a provider outside of
/// log queries.
///
/// # Examples
///
/// ```rust
/// use traded_tokens::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("relative URL without a base".to_string());
/// assert_eq!(error.to_string(), "Invalid provider URL: relative URL without a base");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The provider URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// Failed to fetch the current block number from the blockchain.
    ///
    /// This typically indicates a connectivity issue or provider problem.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }
}
