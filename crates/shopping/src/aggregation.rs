use std::collections::BTreeMap;

use mealcart_shared::{Category, Chosen, DishCatalog, FamilySize, Frequencies, IngredientTable};
use serde::Serialize;

/// Monthly quantity per ingredient line, sorted by line.
///
/// A quantity is a multiplier on the line's own label ("Rice (2kg)" x 8),
/// not a converted amount.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList(BTreeMap<String, u32>);

impl ShoppingList {
    pub fn get(&self, label: &str) -> Option<u32> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(label, quantity)| (label.as_str(), *quantity))
    }

    /// Sum of every quantity on the list.
    pub fn total_units(&self) -> u64 {
        self.0.values().map(|quantity| u64::from(*quantity)).sum()
    }

    fn add(&mut self, label: &str, quantity: u32) {
        let entry = self.0.entry(label.to_owned()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }
}

/// Aggregates the ingredients of every picked dish into one monthly list.
///
/// Each dish contributes `frequency x family_size` to every one of its lines.
/// Lines are matched verbatim, so "Rice (2kg)" and "Basmati Rice (2kg)" stay
/// separate entries. Dishes without ingredient lines contribute nothing.
pub fn compute(
    chosen: &Chosen,
    frequency: &Frequencies,
    family_size: FamilySize,
    catalog: &DishCatalog,
    table: &IngredientTable,
) -> ShoppingList {
    let dishes = ordered_dishes(chosen, catalog);
    let list = compute_sequence(dishes.iter().copied(), frequency, family_size, table);

    tracing::debug!(
        dishes = dishes.len(),
        ingredients = list.len(),
        family_size = family_size.get(),
        "shopping list computed"
    );

    list
}

/// Aggregates an explicit dish sequence. A dish listed twice is counted twice.
pub fn compute_sequence<'d>(
    dishes: impl IntoIterator<Item = &'d str>,
    frequency: &Frequencies,
    family_size: FamilySize,
    table: &IngredientTable,
) -> ShoppingList {
    let mut list = ShoppingList::default();

    for dish_id in dishes {
        let multiplier = frequency
            .get(dish_id)
            .get()
            .saturating_mul(family_size.get());

        for line in table.lines(dish_id) {
            list.add(line, multiplier);
        }
    }

    list
}

/// Breakfast, lunch, then dinner; menu order within a category, with ids the
/// catalog does not know last.
fn ordered_dishes<'c>(chosen: &'c Chosen, catalog: &DishCatalog) -> Vec<&'c str> {
    let mut dishes = Vec::new();

    for category in Category::all() {
        let mut ids = chosen.dishes(*category).collect::<Vec<_>>();
        ids.sort_by_key(|id| (catalog.position(*category, id).unwrap_or(usize::MAX), *id));
        dishes.extend(ids);
    }

    dishes
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealcart_shared::Frequency;

    fn family(size: u32) -> FamilySize {
        FamilySize::new(size).unwrap()
    }

    #[test]
    fn test_idli_and_biryani_do_not_merge_rice() {
        let chosen: Chosen = [(Category::Breakfast, "idli"), (Category::Lunch, "biryani")]
            .into_iter()
            .collect();
        let frequency: Frequencies = [("idli", Frequency::new(2)), ("biryani", Frequency::new(1))]
            .into_iter()
            .collect();

        let list = compute(
            &chosen,
            &frequency,
            family(4),
            DishCatalog::global(),
            IngredientTable::global(),
        );

        assert_eq!(list.len(), 8);
        assert_eq!(list.get("Rice (2kg)"), Some(8));
        assert_eq!(list.get("Urad Dal (500g)"), Some(8));
        assert_eq!(list.get("Fenugreek seeds (50g)"), Some(8));
        assert_eq!(list.get("Salt (100g)"), Some(8));
        assert_eq!(list.get("Basmati Rice (2kg)"), Some(4));
        assert_eq!(list.get("Chicken/Mutton (2kg)"), Some(4));
        assert_eq!(list.get("Biryani Masala (200g)"), Some(4));
        assert_eq!(list.get("Ghee (500ml)"), Some(4));
    }

    #[test]
    fn test_shared_line_accumulates() {
        // idli and dosa both list "Rice (2kg)" and "Urad Dal (500g)"
        let chosen: Chosen = [(Category::Breakfast, "idli"), (Category::Breakfast, "dosa")]
            .into_iter()
            .collect();
        let frequency: Frequencies = [("dosa", Frequency::new(3))].into_iter().collect();

        let list = compute(
            &chosen,
            &frequency,
            family(2),
            DishCatalog::global(),
            IngredientTable::global(),
        );

        assert_eq!(list.get("Rice (2kg)"), Some(2 + 6));
        assert_eq!(list.get("Urad Dal (500g)"), Some(2 + 6));
        assert_eq!(list.get("Salt (100g)"), Some(2));
        assert_eq!(list.get("Oil (500ml)"), Some(6));
    }

    #[test]
    fn test_empty_selection_yields_empty_list() {
        let list = compute(
            &Chosen::default(),
            &Frequencies::default(),
            family(5),
            DishCatalog::global(),
            IngredientTable::global(),
        );

        assert!(list.is_empty());
        assert_eq!(list.total_units(), 0);
    }

    #[test]
    fn test_stale_frequency_is_ignored() {
        let chosen: Chosen = [(Category::Dinner, "pasta")].into_iter().collect();
        let frequency: Frequencies = [("soup", Frequency::new(9))].into_iter().collect();

        let list = compute(
            &chosen,
            &frequency,
            family(1),
            DishCatalog::global(),
            IngredientTable::global(),
        );

        assert_eq!(list.get("Pasta (2kg)"), Some(1));
        assert_eq!(list.get("Cream (500ml)"), None);
    }

    #[test]
    fn test_unknown_dish_contributes_nothing() {
        let list = compute_sequence(
            ["pizza", "pasta"],
            &Frequencies::default(),
            family(3),
            IngredientTable::global(),
        );

        assert_eq!(list.len(), 4);
        assert_eq!(list.get("Herbs (mixed)"), Some(3));
    }

    #[test]
    fn test_multiplier_saturates() {
        let frequency: Frequencies = [("soup", Frequency::new(u32::MAX))].into_iter().collect();

        let list = compute_sequence(
            ["soup", "soup"],
            &frequency,
            family(2),
            IngredientTable::global(),
        );

        assert_eq!(list.get("Cream (500ml)"), Some(u32::MAX));
    }
}
