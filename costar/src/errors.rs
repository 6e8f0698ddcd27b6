use costar_api::core::storage::arc_str::ArcStr;

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Node already exists with name {0:?}")]
    NodeExistsError(ArcStr),

    #[error("No Node with name {0}")]
    NodeMissingError(ArcStr),

    #[error("Self loops are not supported, tried to connect {0:?} to itself")]
    SelfLoopError(ArcStr),

    #[error("Invalid weight {weight} for edge between {src:?} and {dst:?}, weights must be positive and finite")]
    InvalidWeightError {
        src: ArcStr,
        dst: ArcStr,
        weight: f64,
    },

    #[error("Graph has no nodes")]
    EmptyGraphError,
}
