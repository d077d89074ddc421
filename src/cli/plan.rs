use std::{io::Write, str::FromStr};

use anyhow::{Result, bail};
use clap::ValueEnum;
use mealcart_shared::{Category, FamilySize, Frequency};
use mealcart_shopping::ShoppingList;
use mealcart_wizard::{Outcome, SignInInput, Wizard, WizardStep};
use serde::Serialize;

use super::{bounded_frequency, family_size_in_bounds, write_shopping_list};
use crate::config::PlannerConfig;

/// A `category:dish[=times]` argument, e.g. `breakfast:idli=2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DishArg {
    pub category: Category,
    pub dish_id: String,
    pub frequency: Option<String>,
}

impl FromStr for DishArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((category, rest)) = s.split_once(':') else {
            return Err(format!("expected category:dish[=times], got `{s}`"));
        };

        let category = Category::from_str(category.trim())
            .map_err(|_| format!("unknown category `{category}`"))?;

        let (dish_id, frequency) = match rest.split_once('=') {
            Some((dish_id, frequency)) => (dish_id, Some(frequency.trim().to_owned())),
            None => (rest, None),
        };

        let dish_id = dish_id.trim();
        if dish_id.is_empty() {
            return Err(format!("missing dish in `{s}`"));
        }

        Ok(Self {
            category,
            dish_id: dish_id.to_owned(),
            frequency,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

pub struct PlanInput {
    pub username: String,
    pub password: String,
    pub family_size: String,
    pub dishes: Vec<DishArg>,
    pub format: Format,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    step: WizardStep,
    username: &'a str,
    family_size: FamilySize,
    dishes: Vec<PlannedDish<'a>>,
    items: &'a ShoppingList,
}

#[derive(Serialize)]
struct PlannedDish<'a> {
    category: Category,
    id: &'a str,
    name: &'a str,
    frequency: Frequency,
}

/// Walks the whole wizard for a plan given up front and prints the list.
#[tracing::instrument(skip_all, fields(username = %input.username))]
pub fn plan(config: &PlannerConfig, input: PlanInput, out: &mut impl Write) -> Result<()> {
    if !family_size_in_bounds(config, &input.family_size) {
        bail!(
            "family size must be between 1 and {}",
            config.max_family_size
        );
    }

    if input.dishes.is_empty() {
        bail!("pick at least one dish");
    }

    let mut wizard = Wizard::new();

    if let Outcome::Rejected(rejection) = wizard.sign_in(SignInInput::new(
        input.username,
        input.password,
        input.family_size,
    ))? {
        bail!("sign-in rejected: {rejection}");
    }

    wizard.proceed_to_meals()?;

    let categories = Category::all()
        .iter()
        .copied()
        .filter(|category| input.dishes.iter().any(|d| d.category == *category))
        .collect::<Vec<_>>();

    for (n, category) in categories.iter().enumerate() {
        if n > 0 {
            wizard.back_to_categories()?;
        }

        wizard.pick_category(*category)?;

        for dish in input.dishes.iter().filter(|d| d.category == *category) {
            if !wizard.selection().chosen.contains(*category, &dish.dish_id) {
                wizard.toggle_dish(*category, &dish.dish_id)?;
            }
        }
    }

    if let Outcome::Rejected(rejection) = wizard.proceed_to_confirm()? {
        bail!("{rejection}");
    }

    for dish in &input.dishes {
        if let Some(raw) = &dish.frequency {
            wizard.set_frequency(&dish.dish_id, bounded_frequency(config, raw))?;
        }
    }

    wizard.generate_list()?;

    match input.format {
        Format::Text => write_shopping_list(&wizard, out),
        Format::Json => write_report(&wizard, out),
    }
}

fn write_report(wizard: &Wizard<'_>, out: &mut impl Write) -> Result<()> {
    let (Some(user), Some(items)) = (wizard.user(), wizard.shopping_list()) else {
        bail!("no shopping list to report");
    };

    let report = PlanReport {
        step: wizard.step(),
        username: user.username(),
        family_size: user.family_size(),
        dishes: wizard
            .selected_dishes()
            .into_iter()
            .map(|(category, dish)| PlannedDish {
                category,
                id: dish.id,
                name: dish.name,
                frequency: wizard.frequency_of(dish.id),
            })
            .collect(),
        items,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dish_arg() {
        assert_eq!(
            DishArg::from_str("breakfast:idli=2").unwrap(),
            DishArg {
                category: Category::Breakfast,
                dish_id: "idli".to_owned(),
                frequency: Some("2".to_owned()),
            }
        );
        assert_eq!(
            DishArg::from_str("Lunch:biryani").unwrap().frequency,
            None
        );
        assert!(DishArg::from_str("idli").is_err());
        assert!(DishArg::from_str("brunch:idli").is_err());
        assert!(DishArg::from_str("dinner:=3").is_err());
    }
}
