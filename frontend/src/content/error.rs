use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("no chapter event with id `{id}`")]
    EventNotFound { id: String },
    #[error("no game with id {id}")]
    GameNotFound { id: u32 },
}
