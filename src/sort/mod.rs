use std::cmp::Ordering;

use crate::{
    error::{
        Result,
        SplatvError,
    },
    gaussian::interface::SplatSource,
};


#[cfg(feature = "sort_rayon")]
pub mod rayon;

pub mod std_sort;


#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
)]
pub struct SortEntry {
    pub key: f32,
    pub index: u32,
}

impl SortEntry {
    /// Ascending key, NaN keys last, ties by ascending index.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        let by_key = match (self.key.is_nan(), other.key.is_nan()) {
            (false, false) => self.key.partial_cmp(&other.key).unwrap_or(Ordering::Equal),
            (lhs, rhs) => lhs.cmp(&rhs),
        };

        by_key.then(self.index.cmp(&other.index))
    }
}


/// Serialization order over the splats of one input.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
pub struct RenderOrder {
    indices: Vec<u32>,
}

impl RenderOrder {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&index| index as usize)
    }
}

impl From<Vec<SortEntry>> for RenderOrder {
    fn from(entries: Vec<SortEntry>) -> Self {
        Self {
            indices: entries.into_iter().map(|entry| entry.index).collect(),
        }
    }
}


/// Fails when the source holds more splats than a `u32` index can address.
pub fn rank<S: SplatSource + ?Sized>(source: &S) -> Result<RenderOrder> {
    if source.len() > u32::MAX as usize {
        return Err(SplatvError::TooManySplats(source.len()));
    }

    #[cfg(feature = "sort_rayon")]
    return Ok(rayon::rayon_rank(source));

    #[cfg(not(feature = "sort_rayon"))]
    return Ok(std_sort::std_rank(source));
}
