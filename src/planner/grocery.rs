use std::collections::HashSet;

use crate::models::{GroceryList, LunchItem, LunchboxPlan};
use crate::planner::constants::*;

/// Accumulator for one aggregation pass.
struct GroceryAccumulator {
    list: GroceryList,
    seen: HashSet<String>,
}

impl GroceryAccumulator {
    fn new() -> Self {
        let list = GROCERY_CATEGORIES
            .iter()
            .map(|category| (category.to_string(), Vec::new()))
            .collect();
        Self {
            list,
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, category: &str, entry: &str) {
        if let Some(items) = self.list.get_mut(category) {
            items.push(entry.to_string());
        }
    }

    /// Emit `entry` under `token` unless the token was already seen.
    fn emit_once(&mut self, category: &str, token: &str, entry: &str) {
        if self.seen.insert(token.to_string()) {
            self.push(category, entry);
        }
    }

    fn categorize(&mut self, item: &LunchItem) {
        let name = item.name.to_lowercase();

        let group = GROCERY_KEYWORD_GROUPS
            .iter()
            .find(|group| group.gate.iter().any(|gate| name.contains(gate)));

        match group {
            Some(group) => {
                for keyword in group.keywords {
                    if keyword.triggers.iter().any(|t| name.contains(t)) {
                        self.emit_once(group.category, keyword.token, keyword.display);
                    }
                }
            }
            None => self.emit_once(CATEGORY_OTHER, &name, &item.name),
        }
    }

    fn add_accompaniments(&mut self) {
        if self.seen.contains(PEANUT_BUTTER_TOKEN) && !self.seen.contains(JELLY_TOKEN) {
            self.push(CATEGORY_OTHER, JELLY_ACCOMPANIMENT);
        }

        let has_tuna = self
            .list
            .get(CATEGORY_PROTEINS)
            .is_some_and(|proteins| proteins.iter().any(|p| p.to_lowercase().contains(TUNA_MARKER)));
        if has_tuna {
            self.push(CATEGORY_OTHER, MAYONNAISE_ACCOMPANIMENT);
        }

        for supply in REUSABLE_SUPPLIES {
            self.push(CATEGORY_OTHER, supply);
        }
    }

    fn finish(mut self) -> GroceryList {
        self.list.retain(|_, items| !items.is_empty());
        self.list
    }
}

/// Categorized, deduplicated shopping list for every item in the plan.
///
/// Pure function of the plan: the dedup set lives only for this call.
pub fn build_grocery_list(plan: &LunchboxPlan) -> GroceryList {
    build_grocery_list_from_items(plan.all_items())
}

/// Same as [`build_grocery_list`] over an arbitrary item sequence.
pub fn build_grocery_list_from_items<'a>(
    items: impl IntoIterator<Item = &'a LunchItem>,
) -> GroceryList {
    let mut acc = GroceryAccumulator::new();
    for item in items {
        acc.categorize(item);
    }
    acc.add_accompaniments();
    acc.finish()
}

/// Merge shopping lists by category, deduplicating exact strings per category.
///
/// Category and item order follow first appearance; empty categories are dropped.
pub fn merge_grocery_lists<'a>(lists: impl IntoIterator<Item = &'a GroceryList>) -> GroceryList {
    let mut merged = GroceryList::new();
    for list in lists {
        for (category, items) in list {
            let bucket = merged.entry(category.clone()).or_default();
            for item in items {
                if !bucket.contains(item) {
                    bucket.push(item.clone());
                }
            }
        }
    }
    merged.retain(|_, items| !items.is_empty());
    merged
}
