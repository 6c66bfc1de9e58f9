use serde::{
    Deserialize,
    Serialize,
};

use crate::gaussian::{
    interface::SplatSource,
    splat::Splat,
};


#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Serialize,
    Deserialize,
)]
pub struct SplatCloud {
    pub splats: Vec<Splat>,
}

impl SplatCloud {
    pub fn from_splats(splats: Vec<Splat>) -> Self {
        Self { splats }
    }

    pub fn len(&self) -> usize {
        self.splats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splats.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Splat> {
        self.splats.iter()
    }

    pub fn as_slice(&self) -> &[Splat] {
        &self.splats
    }

    pub fn subset(&self, indicies: &[usize]) -> Self {
        indicies
            .iter()
            .map(|&index| self.splats[index])
            .collect()
    }
}

impl SplatSource for SplatCloud {
    fn len(&self) -> usize {
        self.splats.len()
    }

    fn splat(&self, index: usize) -> Splat {
        self.splats[index]
    }
}

impl From<Vec<Splat>> for SplatCloud {
    fn from(splats: Vec<Splat>) -> Self {
        Self::from_splats(splats)
    }
}

impl FromIterator<Splat> for SplatCloud {
    fn from_iter<I: IntoIterator<Item = Splat>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<Splat>>().into()
    }
}

impl<'a> IntoIterator for &'a SplatCloud {
    type Item = &'a Splat;
    type IntoIter = std::slice::Iter<'a, Splat>;

    fn into_iter(self) -> Self::IntoIter {
        self.splats.iter()
    }
}
