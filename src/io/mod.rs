pub mod codec;
pub mod writer;

#[cfg(feature = "io_ply")]
pub mod ply;
