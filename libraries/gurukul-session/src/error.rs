use thiserror::Error;

/// Errors that can occur during session operations
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Portal client error: {0}")]
    Client(#[from] gurukul_portal_client::PortalClientError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
