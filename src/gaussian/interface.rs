use crate::gaussian::splat::Splat;


/// Indexable, fixed-length view over the splats of one input.
///
/// Implementors must return the same splat for an index on every call.
pub trait SplatSource: Sync {
    fn len(&self) -> usize;
    fn splat(&self, index: usize) -> Splat;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SplatSource for [Splat] {
    fn len(&self) -> usize {
        <[Splat]>::len(self)
    }

    fn splat(&self, index: usize) -> Splat {
        self[index]
    }
}

impl SplatSource for Vec<Splat> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn splat(&self, index: usize) -> Splat {
        self[index]
    }
}
