use rayon::prelude::*;

use crate::{
    gaussian::interface::SplatSource,
    sort::{
        RenderOrder,
        SortEntry,
    },
};


pub fn rayon_rank<S: SplatSource + ?Sized>(source: &S) -> RenderOrder {
    let mut entries = (0..source.len())
        .into_par_iter()
        .map(|index| SortEntry {
            key: source.splat(index).priority_key(),
            index: index as u32,
        })
        .collect::<Vec<_>>();

    entries.par_sort_unstable_by(SortEntry::priority_cmp);

    entries.into()
}
