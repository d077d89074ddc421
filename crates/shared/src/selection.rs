use std::collections::{BTreeMap, BTreeSet};

use crate::{Category, Frequency};

/// Dish ids picked per category. A category with no picks has no entry, so
/// two selections with the same picks always compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chosen(BTreeMap<Category, BTreeSet<String>>);

impl Chosen {
    pub fn contains(&self, category: Category, dish_id: &str) -> bool {
        self.0
            .get(&category)
            .is_some_and(|dishes| dishes.contains(dish_id))
    }

    pub fn dishes(&self, category: Category) -> impl Iterator<Item = &str> {
        self.0
            .get(&category)
            .into_iter()
            .flat_map(|dishes| dishes.iter().map(String::as_str))
    }

    pub fn count(&self, category: Category) -> usize {
        self.0.get(&category).map_or(0, BTreeSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All picks, breakfast first.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.0
            .iter()
            .flat_map(|(category, dishes)| dishes.iter().map(|id| (*category, id.as_str())))
    }

    /// Adds the dish if absent, removes it otherwise. Returns whether the dish
    /// is picked afterwards.
    pub fn toggle(&mut self, category: Category, dish_id: &str) -> bool {
        let dishes = self.0.entry(category).or_default();

        if dishes.remove(dish_id) {
            if dishes.is_empty() {
                self.0.remove(&category);
            }

            return false;
        }

        dishes.insert(dish_id.to_owned());

        true
    }
}

impl<S: Into<String>> FromIterator<(Category, S)> for Chosen {
    fn from_iter<T: IntoIterator<Item = (Category, S)>>(iter: T) -> Self {
        let mut chosen = Self::default();
        for (category, dish_id) in iter {
            chosen.0.entry(category).or_default().insert(dish_id.into());
        }

        chosen
    }
}

/// Times-per-month per dish id. Entries for dishes that are no longer picked
/// are kept; only picked dishes are ever read during aggregation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frequencies(BTreeMap<String, Frequency>);

impl Frequencies {
    pub fn set(&mut self, dish_id: impl Into<String>, frequency: Frequency) {
        self.0.insert(dish_id.into(), frequency);
    }

    /// Stored value, or the default when the dish was never set.
    pub fn get(&self, dish_id: &str) -> Frequency {
        self.0.get(dish_id).copied().unwrap_or_default()
    }

    pub fn contains(&self, dish_id: &str) -> bool {
        self.0.contains_key(dish_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Frequency)> for Frequencies {
    fn from_iter<T: IntoIterator<Item = (S, Frequency)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(dish_id, frequency)| (dish_id.into(), frequency))
                .collect(),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub chosen: Chosen,
    pub frequency: Frequencies,
}

impl SelectionState {
    pub fn clear(&mut self) {
        self.chosen = Chosen::default();
        self.frequency = Frequencies::default();
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty() && self.frequency.is_empty()
    }
}
