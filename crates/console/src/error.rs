use memoraid_client::ClientError;
use memoraid_core::CoreError;
use memoraid_types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("no record with id {0} in the current snapshot")]
    NotFound(RecordId),

    #[error("record {0} already has an action in flight")]
    Busy(RecordId),

    #[error("lists are stale after a failed refresh; reload before acting again")]
    StaleSnapshot,

    #[error("alerts view is no longer mounted")]
    Unmounted,
}

pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
