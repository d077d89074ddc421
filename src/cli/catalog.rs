use std::io::Write;

use anyhow::Result;
use mealcart_shared::{Category, DishCatalog, IngredientTable};

/// Prints the menu, optionally limited to one category.
pub fn catalog(
    only: Option<Category>,
    with_ingredients: bool,
    out: &mut impl Write,
) -> Result<()> {
    let catalog = DishCatalog::global();
    let table = IngredientTable::global();

    for category in Category::all()
        .iter()
        .filter(|c| only.is_none_or(|wanted| wanted == **c))
    {
        writeln!(out, "{category}")?;

        for dish in catalog.dishes(*category) {
            writeln!(out, "  {:<12} {}", dish.id, dish.name)?;

            if with_ingredients {
                for line in table.lines(dish.id) {
                    writeln!(out, "      - {line}")?;
                }
            }
        }
    }

    Ok(())
}
