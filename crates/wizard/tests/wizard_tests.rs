use mealcart_shared::{Category, Error, Frequency};
use mealcart_wizard::{Outcome, Rejection, SignInInput, Wizard, WizardStep};

fn sign_in(wizard: &mut Wizard<'_>, family_size: &str) -> anyhow::Result<Outcome> {
    Ok(wizard.sign_in(SignInInput::new("ravi", "hunter2", family_size))?)
}

/// Signs in and picks the given dishes, ending on the confirm screen.
fn plan(picks: &[(Category, &str)], family_size: &str) -> anyhow::Result<Wizard<'static>> {
    let mut wizard = Wizard::new();
    sign_in(&mut wizard, family_size)?;
    wizard.proceed_to_meals()?;

    let mut last = None;
    for (category, dish_id) in picks {
        if last != Some(*category) {
            if last.is_some() {
                wizard.back_to_categories()?;
            }
            wizard.pick_category(*category)?;
            last = Some(*category);
        }
        wizard.toggle_dish(*category, dish_id)?;
    }

    assert!(wizard.proceed_to_confirm()?.is_advanced());

    Ok(wizard)
}

#[test]
fn test_idli_biryani_scenario() -> anyhow::Result<()> {
    let mut wizard = plan(
        &[(Category::Breakfast, "idli"), (Category::Lunch, "biryani")],
        "4",
    )?;
    wizard.set_frequency("idli", Frequency::new(2))?;
    wizard.set_frequency("biryani", Frequency::new(1))?;

    assert_eq!(
        wizard.generate_list()?,
        Outcome::Advanced(WizardStep::ShoppingList)
    );

    let list = wizard.shopping_list().expect("list on screen");
    let mut lines = list.iter().collect::<Vec<_>>();
    lines.sort();

    assert_eq!(
        lines,
        vec![
            ("Basmati Rice (2kg)", 4),
            ("Biryani Masala (200g)", 4),
            ("Chicken/Mutton (2kg)", 4),
            ("Fenugreek seeds (50g)", 8),
            ("Ghee (500ml)", 4),
            ("Rice (2kg)", 8),
            ("Salt (100g)", 8),
            ("Urad Dal (500g)", 8),
        ]
    );

    Ok(())
}

#[test]
fn test_sign_in_rejects_bad_family_size() -> anyhow::Result<()> {
    for raw in ["0", "", "abc", "-1", "0.5"] {
        let mut wizard = Wizard::new();

        assert_eq!(
            sign_in(&mut wizard, raw)?,
            Outcome::Rejected(Rejection::InvalidFamilySize),
            "family size {raw:?}"
        );
        assert_eq!(wizard.step(), WizardStep::SignIn);
        assert!(wizard.user().is_none());
    }

    Ok(())
}

#[test]
fn test_sign_in_reads_leading_integer_of_family_size() -> anyhow::Result<()> {
    for (raw, expected) in [("2.5", 2), (" 3x", 3), ("+4", 4)] {
        let mut wizard = Wizard::new();

        assert_eq!(
            sign_in(&mut wizard, raw)?,
            Outcome::Advanced(WizardStep::Welcome),
            "family size {raw:?}"
        );
        assert_eq!(
            wizard.user().map(|u| u.family_size().get()),
            Some(expected)
        );
    }

    Ok(())
}

#[test]
fn test_frequency_field_reads_leading_integer() -> anyhow::Result<()> {
    let mut wizard = plan(&[(Category::Breakfast, "idli")], "1")?;

    wizard.set_frequency_raw("idli", "2.5")?;
    assert_eq!(wizard.frequency_of("idli"), Frequency::new(2));

    wizard.set_frequency_raw("idli", "3x")?;
    assert_eq!(wizard.frequency_of("idli"), Frequency::new(3));

    wizard.set_frequency_raw("idli", "often")?;
    assert_eq!(wizard.frequency_of("idli"), Frequency::DEFAULT);

    Ok(())
}

#[test]
fn test_sign_in_rejects_blank_fields() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();

    assert_eq!(
        wizard.sign_in(SignInInput::new("", "pw", "2"))?,
        Outcome::Rejected(Rejection::MissingUsername)
    );
    assert_eq!(
        wizard.sign_in(SignInInput::new("ravi", "", "2"))?,
        Outcome::Rejected(Rejection::MissingPassword)
    );
    assert_eq!(wizard.step(), WizardStep::SignIn);

    assert_eq!(
        wizard.sign_in(SignInInput::new("ravi", "pw", "2"))?,
        Outcome::Advanced(WizardStep::Welcome)
    );
    assert_eq!(wizard.user().map(|u| u.family_size().get()), Some(2));

    Ok(())
}

#[test]
fn test_confirm_needs_a_pick_in_active_category() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    sign_in(&mut wizard, "2")?;
    wizard.proceed_to_meals()?;
    wizard.pick_category(Category::Breakfast)?;
    wizard.toggle_dish(Category::Breakfast, "poha")?;
    wizard.back_to_categories()?;
    wizard.pick_category(Category::Dinner)?;

    // breakfast has a pick, but dinner is the one being edited
    assert_eq!(
        wizard.proceed_to_confirm()?,
        Outcome::Rejected(Rejection::EmptySelection(Category::Dinner))
    );
    assert_eq!(wizard.step(), WizardStep::DishPick(Category::Dinner));

    wizard.toggle_dish(Category::Dinner, "soup")?;
    assert_eq!(
        wizard.proceed_to_confirm()?,
        Outcome::Advanced(WizardStep::Confirm)
    );

    Ok(())
}

#[test]
fn test_toggle_twice_is_identity() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    sign_in(&mut wizard, "2")?;
    wizard.proceed_to_meals()?;
    wizard.pick_category(Category::Lunch)?;
    wizard.toggle_dish(Category::Lunch, "pulao")?;
    let before = wizard.selection().chosen.clone();

    assert!(wizard.toggle_dish(Category::Lunch, "sambar")?);
    assert!(!wizard.toggle_dish(Category::Lunch, "sambar")?);
    assert_eq!(wizard.selection().chosen, before);

    Ok(())
}

#[test]
fn test_start_over_keeps_user() -> anyhow::Result<()> {
    let mut wizard = plan(&[(Category::Dinner, "pasta")], "5")?;
    wizard.set_frequency("pasta", Frequency::new(4))?;
    wizard.generate_list()?;

    assert_eq!(
        wizard.start_over()?,
        Outcome::Advanced(WizardStep::Welcome)
    );
    assert!(wizard.selection().chosen.is_empty());
    assert!(wizard.selection().frequency.is_empty());
    assert_eq!(wizard.user().map(|u| u.username()), Some("ravi"));
    assert!(wizard.shopping_list().is_none());

    // no second sign-in needed
    assert!(wizard.proceed_to_meals()?.is_advanced());

    Ok(())
}

#[test]
fn test_logout_clears_everything() -> anyhow::Result<()> {
    let mut wizard = plan(&[(Category::Breakfast, "upma")], "3")?;
    wizard.set_frequency("upma", Frequency::new(8))?;

    assert_eq!(wizard.logout()?, Outcome::Advanced(WizardStep::SignIn));
    assert!(wizard.user().is_none());
    assert!(wizard.selection().is_empty());

    Ok(())
}

#[test]
fn test_sign_in_clears_previous_selection() -> anyhow::Result<()> {
    let mut wizard = plan(&[(Category::Breakfast, "upma")], "3")?;
    wizard.logout()?;
    sign_in(&mut wizard, "1")?;

    assert!(wizard.selection().is_empty());

    Ok(())
}

#[test]
fn test_back_from_confirm_keeps_picks_and_frequencies() -> anyhow::Result<()> {
    let mut wizard = plan(&[(Category::Lunch, "curd-rice")], "2")?;
    wizard.set_frequency("curd-rice", Frequency::new(3))?;

    assert_eq!(
        wizard.back_to_category_pick()?,
        Outcome::Advanced(WizardStep::CategoryPick)
    );
    assert!(wizard.selection().chosen.contains(Category::Lunch, "curd-rice"));
    assert_eq!(wizard.frequency_of("curd-rice").get(), 3);

    Ok(())
}

#[test]
fn test_stale_frequency_survives_deselect() -> anyhow::Result<()> {
    let mut wizard = plan(
        &[(Category::Lunch, "chapati"), (Category::Lunch, "pulao")],
        "2",
    )?;
    wizard.set_frequency("chapati", Frequency::new(6))?;
    wizard.back_to_category_pick()?;
    wizard.pick_category(Category::Lunch)?;
    wizard.toggle_dish(Category::Lunch, "chapati")?;
    wizard.proceed_to_confirm()?;

    assert!(wizard.selection().frequency.contains("chapati"));

    wizard.generate_list()?;
    let list = wizard.shopping_list().expect("list on screen");
    assert_eq!(list.get("Wheat Flour (5kg)"), None);
    assert_eq!(list.get("Rice (3kg)"), Some(2));

    Ok(())
}

#[test]
fn test_operations_in_wrong_step_fail_loudly() {
    let mut wizard = Wizard::new();

    assert!(matches!(
        wizard.toggle_dish(Category::Breakfast, "idli"),
        Err(Error::InvalidOperation {
            operation: "toggle_dish",
            ..
        })
    ));
    assert!(wizard.logout().is_err());
    assert!(wizard.proceed_to_meals().is_err());
    assert!(wizard.pick_category(Category::Lunch).is_err());
    assert!(wizard.back_to_categories().is_err());
    assert!(wizard.proceed_to_confirm().is_err());
    assert!(wizard.set_frequency("idli", Frequency::DEFAULT).is_err());
    assert!(wizard.back_to_category_pick().is_err());
    assert!(wizard.generate_list().is_err());
    assert!(wizard.start_over().is_err());

    assert_eq!(wizard.step(), WizardStep::SignIn);
    assert!(wizard.selection().is_empty());
}

#[test]
fn test_sign_in_twice_is_invalid() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    sign_in(&mut wizard, "2")?;

    let err = wizard
        .sign_in(SignInInput::new("other", "pw", "9"))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "`sign_in` is not allowed while in step welcome"
    );
    assert_eq!(wizard.user().map(|u| u.username()), Some("ravi"));

    Ok(())
}

#[test]
fn test_unknown_dish_is_refused() -> anyhow::Result<()> {
    let mut wizard = Wizard::new();
    sign_in(&mut wizard, "2")?;
    wizard.proceed_to_meals()?;
    wizard.pick_category(Category::Dinner)?;

    assert!(matches!(
        wizard.toggle_dish(Category::Dinner, "pizza"),
        Err(Error::UnknownDish { .. })
    ));
    assert!(wizard.selection().chosen.is_empty());

    Ok(())
}

#[test]
fn test_selected_dishes_for_confirm_screen() -> anyhow::Result<()> {
    let wizard = plan(
        &[
            (Category::Breakfast, "poha"),
            (Category::Breakfast, "dosa"),
            (Category::Dinner, "soup"),
        ],
        "2",
    )?;

    let names = wizard
        .selected_dishes()
        .into_iter()
        .map(|(category, dish)| (category, dish.name))
        .collect::<Vec<_>>();

    assert_eq!(
        names,
        vec![
            (Category::Breakfast, "Dosa"),
            (Category::Breakfast, "Poha"),
            (Category::Dinner, "Soup & Bread"),
        ]
    );
    assert_eq!(wizard.frequency_of("soup"), Frequency::DEFAULT);

    Ok(())
}
