use crate::{
    gaussian::interface::SplatSource,
    sort::{
        RenderOrder,
        SortEntry,
    },
};


pub fn std_rank<S: SplatSource + ?Sized>(source: &S) -> RenderOrder {
    let mut entries = (0..source.len())
        .map(|index| SortEntry {
            key: source.splat(index).priority_key(),
            index: index as u32,
        })
        .collect::<Vec<_>>();

    // index tie break makes the order total, stability is not needed
    entries.sort_unstable_by(SortEntry::priority_cmp);

    entries.into()
}
