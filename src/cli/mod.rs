mod catalog;
mod plan;
mod session;

pub use catalog::*;
pub use plan::*;
pub use session::*;

use std::io::Write;

use anyhow::Result;
use mealcart_shared::{FamilySize, Frequency};
use mealcart_wizard::Wizard;

use crate::config::PlannerConfig;

/// Family sizes above the form's maximum are refused before reaching the
/// wizard. Unparseable input is left for the wizard to reject.
fn family_size_in_bounds(config: &PlannerConfig, raw: &str) -> bool {
    FamilySize::parse(raw).is_none_or(|size| size.get() <= config.max_family_size)
}

/// Normalises a frequency field and caps it at the form's maximum.
fn bounded_frequency(config: &PlannerConfig, raw: &str) -> Frequency {
    let frequency = Frequency::parse(raw);
    Frequency::new(frequency.get().min(config.max_frequency))
}

fn write_shopping_list(wizard: &Wizard<'_>, out: &mut impl Write) -> Result<()> {
    let Some(list) = wizard.shopping_list() else {
        return Ok(());
    };

    if let Some(user) = wizard.user() {
        writeln!(
            out,
            "Monthly shopping list for {} ({} members)",
            user.username(),
            user.family_size()
        )?;
    }

    let width = list.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, quantity) in list.iter() {
        writeln!(out, "  {label:<width$}  x{quantity}")?;
    }

    writeln!(out, "{} items", list.len())?;

    Ok(())
}
