//! Interactive problem selection via skim.

use skim::prelude::*;

use crate::domain::Catalog;

/// Let the user fuzzy-pick a problem from the catalog.
///
/// Each line offered to skim is `<id>  <title>`; the returned value is the
/// id alone. `None` when nothing was selected.
pub fn select_problem(catalog: &Catalog) -> Option<String> {
    let options = SkimOptionsBuilder::default()
        .height(Some("50%"))
        .multi(false)
        .build()
        .unwrap();

    let (tx, rx): (SkimItemSender, SkimItemReceiver) = unbounded();
    for (id, meta) in catalog.iter() {
        let item = Arc::new(format!("{}  {}", id, meta.title)) as Arc<dyn SkimItem>;
        let _ = tx.send(item);
    }
    // Close the channel so skim knows the item stream is complete.
    drop(tx);

    let selected_items = Skim::run_with(&options, Some(rx))
        .map(|out| out.selected_items)
        .unwrap_or_else(Vec::new);

    selected_items.first().and_then(|item| {
        item.output()
            .split_whitespace()
            .next()
            .map(|id| id.to_string())
    })
}
