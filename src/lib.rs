pub use error::{
    Result,
    SplatvError,
};

pub use gaussian::{
    cloud::SplatCloud,
    interface::SplatSource,
    rand::{
        random_splats,
        random_splats_seeded,
    },
    splat::Splat,
};

pub use sort::{
    RenderOrder,
    rank,
};

pub use splatv::{
    header::SplatvHeader,
    record::SplatvRecord,
    stream::{
        SplatvFile,
        encode_splatv,
    },
};

#[cfg(feature = "io_ply")]
pub mod convert;

pub mod error;
pub mod gaussian;
pub mod io;
pub mod sort;
pub mod splatv;
pub mod utils;
