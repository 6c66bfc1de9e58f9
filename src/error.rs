use thiserror::Error;


pub type Result<T> = std::result::Result<T, SplatvError>;

#[derive(Debug, Error)]
pub enum SplatvError {
    #[error("ply has no `vertex` element")]
    MissingVertexElement,

    #[error("vertex element is missing required properties: {}", .missing.join(", "))]
    Schema {
        missing: Vec<&'static str>,
    },

    #[error("vertex property `{0}` is a list, expected a scalar")]
    ListProperty(String),

    #[error("cannot pack {values} values into {words} half pair words")]
    PreconditionViolation {
        values: usize,
        words: usize,
    },

    #[error("{0} splats exceed the u32 index range of the render order")]
    TooManySplats(usize),

    #[error("invalid splatv magic {0:#x}")]
    InvalidMagic(u32),

    #[error("splatv stream truncated: needed {needed} bytes, found {found}")]
    Truncated {
        needed: usize,
        found: usize,
    },

    #[error("splatv header array is empty")]
    EmptyHeader,

    #[error("splatv record section of {0} bytes is not a whole number of records")]
    RecordLength(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
