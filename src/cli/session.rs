use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::Result;
use mealcart_shared::Category;
use mealcart_wizard::{Outcome, SignInInput, Wizard, WizardStep};

use super::{bounded_frequency, family_size_in_bounds, write_shopping_list};
use crate::config::PlannerConfig;

const HELP: &str = "\
commands:
  signin <username> <password> <family size>
  start                     begin planning
  pick <category>           breakfast, lunch or dinner
  toggle <category> <dish>  pick or unpick a dish
  back                      return to the category screen
  confirm                   continue to frequencies
  freq <dish> <times>       times per month
  generate                  build the shopping list
  over                      start over, staying signed in
  logout
  show                      current step and picks
  help
  quit";

/// One line of session input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SignIn {
        username: String,
        password: String,
        family_size: String,
    },
    Start,
    Logout,
    Pick(Category),
    Toggle(Category, String),
    Back,
    Confirm,
    Frequency(String, String),
    Generate,
    StartOver,
    Show,
    Help,
    Quit,
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = s.split_whitespace().collect::<Vec<_>>();
        let category = |word: &str| {
            Category::from_str(word).map_err(|_| format!("unknown category `{word}`"))
        };

        let intent = match words.as_slice() {
            ["signin", username, password, family_size] => Intent::SignIn {
                username: (*username).to_owned(),
                password: (*password).to_owned(),
                family_size: (*family_size).to_owned(),
            },
            ["start"] => Intent::Start,
            ["logout"] => Intent::Logout,
            ["pick", c] => Intent::Pick(category(*c)?),
            ["toggle", c, dish] => Intent::Toggle(category(*c)?, (*dish).to_owned()),
            ["back"] => Intent::Back,
            ["confirm"] => Intent::Confirm,
            ["freq", dish, times] => Intent::Frequency((*dish).to_owned(), (*times).to_owned()),
            ["generate"] => Intent::Generate,
            ["over"] => Intent::StartOver,
            ["show"] => Intent::Show,
            ["help"] => Intent::Help,
            ["quit"] | ["exit"] => Intent::Quit,
            _ => return Err(format!("unrecognised input `{}`, try `help`", s.trim())),
        };

        Ok(intent)
    }
}

/// Reads intents line by line and reports where the wizard ends up after each.
///
/// Blank lines and lines starting with `#` are skipped, so a session can be
/// scripted from a file.
pub fn session(config: &PlannerConfig, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut wizard = Wizard::new();

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let intent = match Intent::from_str(line) {
            Ok(intent) => intent,
            Err(message) => {
                writeln!(out, "? {message}")?;
                continue;
            }
        };

        if intent == Intent::Quit {
            break;
        }

        if let Err(err) = apply(config, &mut wizard, intent, out) {
            tracing::debug!(error = %err, "session intent failed");
            writeln!(out, "! {err}")?;
        }
    }

    Ok(())
}

fn apply(
    config: &PlannerConfig,
    wizard: &mut Wizard<'_>,
    intent: Intent,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = match intent {
        Intent::SignIn {
            username,
            password,
            family_size,
        } => {
            if wizard.step() == WizardStep::SignIn
                && !family_size_in_bounds(config, &family_size)
            {
                writeln!(
                    out,
                    "rejected: family size must be at most {}",
                    config.max_family_size
                )?;
                return Ok(());
            }

            wizard.sign_in(SignInInput::new(username, password, family_size))?
        }
        Intent::Start => wizard.proceed_to_meals()?,
        Intent::Logout => wizard.logout()?,
        Intent::Pick(category) => wizard.pick_category(category)?,
        Intent::Toggle(category, dish_id) => {
            let picked = wizard.toggle_dish(category, &dish_id)?;
            let verb = if picked { "picked" } else { "unpicked" };
            let count = wizard.selection().chosen.count(category);
            writeln!(out, "{verb} {dish_id} ({count} {category})")?;
            return Ok(());
        }
        Intent::Back => match wizard.step() {
            WizardStep::Confirm => wizard.back_to_category_pick()?,
            _ => wizard.back_to_categories()?,
        },
        Intent::Confirm => wizard.proceed_to_confirm()?,
        Intent::Frequency(dish_id, raw) => {
            let frequency = bounded_frequency(config, &raw);
            wizard.set_frequency(&dish_id, frequency)?;
            writeln!(out, "{dish_id}: {frequency} times/month")?;
            return Ok(());
        }
        Intent::Generate => wizard.generate_list()?,
        Intent::StartOver => wizard.start_over()?,
        Intent::Show => {
            write_status(wizard, out)?;
            return Ok(());
        }
        Intent::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
        Intent::Quit => return Ok(()),
    };

    match outcome {
        Outcome::Advanced(step) => {
            let (index, total) = step.progress();
            writeln!(out, "[{}/{}] {}", index + 1, total, step.label())?;

            if step == WizardStep::ShoppingList {
                write_shopping_list(wizard, out)?;
            }
        }
        Outcome::Rejected(rejection) => writeln!(out, "rejected: {rejection}")?,
    }

    Ok(())
}

fn write_status(wizard: &Wizard<'_>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "step: {}", wizard.step())?;

    if let Some(user) = wizard.user() {
        writeln!(
            out,
            "user: {} ({} members)",
            user.username(),
            user.family_size()
        )?;
    }

    for (category, dish) in wizard.selected_dishes() {
        writeln!(
            out,
            "  {category}: {} x{}",
            dish.name,
            wizard.frequency_of(dish.id)
        )?;
    }

    Ok(())
}
