use crate::{
    error::Result,
    gaussian::{
        cloud::SplatCloud,
        splat::Splat,
    },
    splatv::stream::encode_splatv,
};


pub trait SplatvCodec {
    fn encode_splatv(&self) -> Result<Vec<u8>>;
}

impl SplatvCodec for SplatCloud {
    fn encode_splatv(&self) -> Result<Vec<u8>> {
        encode_splatv(self)
    }
}

impl SplatvCodec for [Splat] {
    fn encode_splatv(&self) -> Result<Vec<u8>> {
        encode_splatv(self)
    }
}
