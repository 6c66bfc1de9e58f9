#[cfg(feature = "sort_rayon")]
use rayon::prelude::*;
use tracing::{
    debug,
    warn,
};

use crate::{
    error::{
        Result,
        SplatvError,
    },
    gaussian::interface::SplatSource,
    sort::{
        RenderOrder,
        rank,
    },
    splatv::{
        header::{
            SPLATV_MAGIC,
            SplatvHeader,
        },
        record::{
            RECORD_SIZE,
            SplatvRecord,
        },
    },
};


pub const PREAMBLE_SIZE: usize = 8;


/// Encodes `source` into a complete splatv byte stream.
///
/// Nothing is returned unless every record encoded.
#[tracing::instrument(skip_all, fields(splats = source.len()))]
pub fn encode_splatv<S: SplatSource + ?Sized>(source: &S) -> Result<Vec<u8>> {
    let order = rank(source)?;
    debug!("ranked {} splats", order.len());

    assemble(source, &order, &SplatvHeader::new(source.len()))
}

pub fn assemble<S: SplatSource + ?Sized>(
    source: &S,
    order: &RenderOrder,
    header: &SplatvHeader,
) -> Result<Vec<u8>> {
    let header_json = header.to_json()?;
    let records_offset = PREAMBLE_SIZE + header_json.len();

    let mut output = vec![0u8; records_offset + order.len() * RECORD_SIZE];

    output[0..4].copy_from_slice(&SPLATV_MAGIC.to_le_bytes());
    output[4..8].copy_from_slice(&(header_json.len() as u32).to_le_bytes());
    output[PREAMBLE_SIZE..records_offset].copy_from_slice(header_json.as_bytes());

    let records = bytemuck::cast_slice_mut::<u8, [u8; RECORD_SIZE]>(&mut output[records_offset..]);
    let encode_slot = |(slot, index): (&mut [u8; RECORD_SIZE], usize)| -> Result<usize> {
        let encoded = SplatvRecord::encode(&source.splat(index))?;
        encoded.record.write_le(slot);
        Ok(encoded.saturated)
    };

    #[cfg(feature = "sort_rayon")]
    let saturated = records
        .par_iter_mut()
        .zip(order.as_slice().par_iter().map(|&index| index as usize))
        .map(encode_slot)
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    #[cfg(not(feature = "sort_rayon"))]
    let saturated = records
        .iter_mut()
        .zip(order.iter())
        .map(encode_slot)
        .sum::<Result<usize>>()?;

    if saturated > 0 {
        warn!("{saturated} values exceeded half precision range and were saturated to infinity");
    }

    debug!("assembled {} bytes", output.len());
    Ok(output)
}


#[derive(Clone, Debug, PartialEq)]
pub struct SplatvFile {
    pub header: SplatvHeader,
    pub records: Vec<SplatvRecord>,
}

impl SplatvFile {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let word = |offset: usize| -> Result<u32> {
            bytes
                .get(offset..offset + 4)
                .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                .ok_or(SplatvError::Truncated {
                    needed: offset + 4,
                    found: bytes.len(),
                })
        };

        let magic = word(0)?;
        if magic != SPLATV_MAGIC {
            return Err(SplatvError::InvalidMagic(magic));
        }

        let header_len = word(4)? as usize;
        let records_offset = PREAMBLE_SIZE + header_len;
        let header_bytes = bytes
            .get(PREAMBLE_SIZE..records_offset)
            .ok_or(SplatvError::Truncated {
                needed: records_offset,
                found: bytes.len(),
            })?;
        let header_json = std::str::from_utf8(header_bytes).map_err(|err| {
            SplatvError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })?;
        let header = SplatvHeader::from_json(header_json)?;

        let record_bytes = &bytes[records_offset..];
        let records = bytemuck::try_cast_slice::<u8, [u8; RECORD_SIZE]>(record_bytes)
            .map_err(|_| SplatvError::RecordLength(record_bytes.len()))?
            .iter()
            .map(SplatvRecord::read_le)
            .collect();

        Ok(Self { header, records })
    }

    pub fn splat_count(&self) -> usize {
        self.records.len()
    }
}
