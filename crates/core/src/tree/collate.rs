//! Sidebar ordering.

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};
use icu_locid::locale;
use std::cmp::Ordering;

use super::types::TreeNode;

/// Folders before files, then display names in natural order. Exact name and
/// path break ties so the order is total.
pub fn compare_nodes(a: &TreeNode, b: &TreeNode) -> Ordering {
    b.is_folder()
        .cmp(&a.is_folder())
        .then_with(|| natural_cmp(a.display_name(), b.display_name()))
        .then_with(|| a.display_name().cmp(b.display_name()))
        .then_with(|| a.path_parts().cmp(b.path_parts()))
}

thread_local! {
    // Chinese tailoring sorts Han by pinyin and Latin by the root order.
    static COLLATOR: Collator = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        options.numeric = Some(Numeric::On);
        Collator::try_new(&locale!("zh").into(), options)
            .expect("compiled collation data for zh")
    };
}

/// Locale-aware comparison at base strength: case and accents are ignored,
/// and digit runs compare by numeric value, so `"2"` sorts before `"10"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| collator.compare(a, b))
}
