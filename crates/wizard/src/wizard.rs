use mealcart_shared::{
    Category, Dish, DishCatalog, Frequency, IngredientTable, Result, SelectionState, invalid,
};
use mealcart_shopping::ShoppingList;

use crate::{Outcome, Rejection, SignInInput, User, WizardStep};

/// Drives the planning flow and owns everything collected along the way.
///
/// Intents that arrive in the wrong step are programming errors and return
/// [`mealcart_shared::Error::InvalidOperation`] without touching state.
/// Intents that are well placed but carry unusable data (a blank sign-in
/// field, continuing with nothing picked) return [`Outcome::Rejected`].
pub struct Wizard<'a> {
    catalog: &'a DishCatalog,
    table: &'a IngredientTable,
    step: WizardStep,
    user: Option<User>,
    selection: SelectionState,
    shopping_list: Option<ShoppingList>,
}

impl Wizard<'static> {
    /// A wizard over the compiled-in catalog and ingredient table.
    pub fn new() -> Self {
        Self::with_tables(DishCatalog::global(), IngredientTable::global())
    }
}

impl Default for Wizard<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Wizard<'a> {
    pub fn with_tables(catalog: &'a DishCatalog, table: &'a IngredientTable) -> Self {
        Self {
            catalog,
            table,
            step: WizardStep::SignIn,
            user: None,
            selection: SelectionState::default(),
            shopping_list: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Category being edited, while in a dish pick step.
    pub fn active_category(&self) -> Option<Category> {
        self.step.category()
    }

    /// Every picked dish, breakfast first, in menu order.
    pub fn selected_dishes(&self) -> Vec<(Category, &'a Dish)> {
        Category::all()
            .iter()
            .flat_map(|category| {
                let category = *category;
                self.catalog
                    .dishes(category)
                    .iter()
                    .filter(move |dish| self.selection.chosen.contains(category, dish.id))
                    .map(move |dish| (category, dish))
            })
            .collect()
    }

    pub fn frequency_of(&self, dish_id: &str) -> Frequency {
        self.selection.frequency.get(dish_id)
    }

    /// The list built by [`Wizard::generate_list`], while it is on screen.
    pub fn shopping_list(&self) -> Option<&ShoppingList> {
        match self.step {
            WizardStep::ShoppingList => self.shopping_list.as_ref(),
            _ => None,
        }
    }

    pub fn sign_in(&mut self, input: SignInInput) -> Result<Outcome> {
        self.require("sign_in", |step| step == WizardStep::SignIn)?;

        let user = match input.into_user() {
            Ok(user) => user,
            Err(rejection) => return Ok(self.reject(rejection)),
        };

        tracing::info!(
            username = user.username(),
            family_size = user.family_size().get(),
            "signed in"
        );

        self.user = Some(user);
        self.selection.clear();
        self.shopping_list = None;

        Ok(self.advance(WizardStep::Welcome))
    }

    /// Forgets the user and everything picked. Available on every screen
    /// after sign-in.
    pub fn logout(&mut self) -> Result<Outcome> {
        self.require("logout", |step| step != WizardStep::SignIn)?;

        self.user = None;
        self.selection.clear();
        self.shopping_list = None;

        Ok(self.advance(WizardStep::SignIn))
    }

    pub fn proceed_to_meals(&mut self) -> Result<Outcome> {
        self.require("proceed_to_meals", |step| step == WizardStep::Welcome)?;

        Ok(self.advance(WizardStep::CategoryPick))
    }

    pub fn pick_category(&mut self, category: Category) -> Result<Outcome> {
        self.require("pick_category", |step| step == WizardStep::CategoryPick)?;

        Ok(self.advance(WizardStep::DishPick(category)))
    }

    /// Picks or unpicks a dish of the category being edited. Returns whether
    /// the dish is picked afterwards.
    pub fn toggle_dish(&mut self, category: Category, dish_id: &str) -> Result<bool> {
        self.require("toggle_dish", |step| step == WizardStep::DishPick(category))?;

        if self.catalog.find(category, dish_id).is_none() {
            tracing::warn!(%category, dish_id, "toggle of a dish not on the menu");

            return Err(mealcart_shared::Error::UnknownDish {
                category,
                dish_id: dish_id.to_owned(),
            });
        }

        let picked = self.selection.chosen.toggle(category, dish_id);
        tracing::debug!(%category, dish_id, picked, "dish toggled");

        Ok(picked)
    }

    pub fn back_to_categories(&mut self) -> Result<Outcome> {
        self.require("back_to_categories", |step| {
            matches!(step, WizardStep::DishPick(_))
        })?;

        Ok(self.advance(WizardStep::CategoryPick))
    }

    /// Moves on to confirmation once the category being edited has a pick.
    pub fn proceed_to_confirm(&mut self) -> Result<Outcome> {
        let Some(category) = self.active_category() else {
            tracing::warn!(step = %self.step, "proceed_to_confirm outside a dish pick step");
            invalid!("proceed_to_confirm", self.step);
        };

        if self.selection.chosen.count(category) == 0 {
            return Ok(self.reject(Rejection::EmptySelection(category)));
        }

        Ok(self.advance(WizardStep::Confirm))
    }

    pub fn set_frequency(&mut self, dish_id: &str, frequency: Frequency) -> Result<()> {
        self.require("set_frequency", |step| step == WizardStep::Confirm)?;

        tracing::debug!(dish_id, frequency = frequency.get(), "frequency set");
        self.selection.frequency.set(dish_id, frequency);

        Ok(())
    }

    /// Stores a raw form value, normalising anything that is not a positive
    /// integer to the default.
    pub fn set_frequency_raw(&mut self, dish_id: &str, raw: &str) -> Result<()> {
        self.set_frequency(dish_id, Frequency::parse(raw))
    }

    pub fn back_to_category_pick(&mut self) -> Result<Outcome> {
        self.require("back_to_category_pick", |step| step == WizardStep::Confirm)?;

        Ok(self.advance(WizardStep::CategoryPick))
    }

    pub fn generate_list(&mut self) -> Result<Outcome> {
        self.require("generate_list", |step| step == WizardStep::Confirm)?;

        let Some(user) = &self.user else {
            invalid!("generate_list", self.step);
        };

        let list = mealcart_shopping::compute(
            &self.selection.chosen,
            &self.selection.frequency,
            user.family_size(),
            self.catalog,
            self.table,
        );

        tracing::info!(
            ingredients = list.len(),
            units = list.total_units(),
            "shopping list generated"
        );

        self.shopping_list = Some(list);

        Ok(self.advance(WizardStep::ShoppingList))
    }

    /// Back to the welcome screen with an empty plan; the user stays signed in.
    pub fn start_over(&mut self) -> Result<Outcome> {
        self.require("start_over", |step| step == WizardStep::ShoppingList)?;

        self.selection.clear();
        self.shopping_list = None;

        Ok(self.advance(WizardStep::Welcome))
    }

    fn require(
        &self,
        operation: &'static str,
        allowed: impl FnOnce(WizardStep) -> bool,
    ) -> Result<()> {
        if !allowed(self.step) {
            tracing::warn!(operation, step = %self.step, "operation not allowed in this step");
            invalid!(operation, self.step);
        }

        Ok(())
    }

    fn advance(&mut self, to: WizardStep) -> Outcome {
        tracing::debug!(from = %self.step, %to, "wizard transition");
        self.step = to;

        Outcome::Advanced(to)
    }

    fn reject(&self, rejection: Rejection) -> Outcome {
        tracing::info!(step = %self.step, %rejection, "transition rejected");

        Outcome::Rejected(rejection)
    }
}
