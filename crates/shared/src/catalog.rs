use serde::Serialize;
use std::{collections::HashMap, sync::LazyLock};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Meal slot a dish belongs to.
///
/// Variants are declared in wizard order, so the derived `Ord` (and
/// `Category::VARIANTS`) walk breakfast, lunch, then dinner.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
}

impl Category {
    /// Breakfast, lunch, dinner.
    pub fn all() -> &'static [Category] {
        Self::VARIANTS
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: &'static str,
    pub name: &'static str,
}

impl Dish {
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }
}

static BREAKFAST: &[Dish] = &[
    Dish::new("idli", "Idli"),
    Dish::new("dosa", "Dosa"),
    Dish::new("bread", "Bread & Butter"),
    Dish::new("omelet", "Omelet"),
    Dish::new("upma", "Upma"),
    Dish::new("poha", "Poha"),
];

static LUNCH: &[Dish] = &[
    Dish::new("rice-dal", "Rice & Dal"),
    Dish::new("chapati", "Chapati & Curry"),
    Dish::new("biryani", "Biryani"),
    Dish::new("pulao", "Pulao"),
    Dish::new("sambar", "Sambar Rice"),
    Dish::new("curd-rice", "Curd Rice"),
];

static DINNER: &[Dish] = &[
    Dish::new("curry-rice", "Curry & Rice"),
    Dish::new("roti-sabzi", "Roti & Sabzi"),
    Dish::new("dal-chawal", "Dal Chawal"),
    Dish::new("fried-rice", "Fried Rice"),
    Dish::new("soup", "Soup & Bread"),
    Dish::new("pasta", "Pasta"),
];

/// Ingredient lines per dish. The quantity inside each line is display text
/// only; the whole line is the aggregation key.
static INGREDIENTS: &[(&str, &[&str])] = &[
    (
        "idli",
        &[
            "Rice (2kg)",
            "Urad Dal (500g)",
            "Fenugreek seeds (50g)",
            "Salt (100g)",
        ],
    ),
    (
        "dosa",
        &["Rice (2kg)", "Urad Dal (500g)", "Chana Dal (200g)", "Oil (500ml)"],
    ),
    ("bread", &["Bread (4 loaves)", "Butter (500g)", "Jam (2 jars)"]),
    (
        "omelet",
        &["Eggs (2 dozen)", "Onions (1kg)", "Tomatoes (500g)", "Oil (500ml)"],
    ),
    (
        "upma",
        &[
            "Semolina (1kg)",
            "Vegetables (2kg)",
            "Mustard seeds (100g)",
            "Curry leaves (50g)",
        ],
    ),
    (
        "poha",
        &[
            "Flattened Rice (1kg)",
            "Peanuts (500g)",
            "Onions (1kg)",
            "Green chilies (200g)",
        ],
    ),
    (
        "rice-dal",
        &["Rice (5kg)", "Toor Dal (2kg)", "Turmeric (100g)", "Ghee (500ml)"],
    ),
    (
        "chapati",
        &[
            "Wheat Flour (5kg)",
            "Vegetables (3kg)",
            "Spices (mixed)",
            "Oil (1L)",
        ],
    ),
    (
        "biryani",
        &[
            "Basmati Rice (2kg)",
            "Chicken/Mutton (2kg)",
            "Biryani Masala (200g)",
            "Ghee (500ml)",
        ],
    ),
    (
        "pulao",
        &["Rice (3kg)", "Vegetables (2kg)", "Whole spices", "Ghee (500ml)"],
    ),
    (
        "sambar",
        &[
            "Toor Dal (2kg)",
            "Sambar powder (500g)",
            "Vegetables (3kg)",
            "Tamarind (500g)",
        ],
    ),
    (
        "curd-rice",
        &[
            "Rice (2kg)",
            "Curd (2L)",
            "Mustard seeds (100g)",
            "Curry leaves (50g)",
        ],
    ),
    (
        "curry-rice",
        &[
            "Rice (3kg)",
            "Mixed vegetables (3kg)",
            "Curry powder (500g)",
            "Coconut (5 pieces)",
        ],
    ),
    (
        "roti-sabzi",
        &[
            "Wheat Flour (3kg)",
            "Seasonal vegetables (4kg)",
            "Spices (mixed)",
            "Oil (1L)",
        ],
    ),
    (
        "dal-chawal",
        &["Rice (3kg)", "Mixed Dal (2kg)", "Turmeric (100g)", "Ghee (500ml)"],
    ),
    (
        "fried-rice",
        &[
            "Rice (2kg)",
            "Vegetables (2kg)",
            "Soy sauce (2 bottles)",
            "Oil (500ml)",
        ],
    ),
    (
        "soup",
        &[
            "Mixed vegetables (2kg)",
            "Bread (2 loaves)",
            "Herbs (mixed)",
            "Cream (500ml)",
        ],
    ),
    (
        "pasta",
        &["Pasta (2kg)", "Tomatoes (2kg)", "Cheese (500g)", "Herbs (mixed)"],
    ),
];

static DISH_CATALOG: LazyLock<DishCatalog> =
    LazyLock::new(|| DishCatalog::new(BREAKFAST, LUNCH, DINNER));

static INGREDIENT_TABLE: LazyLock<IngredientTable> =
    LazyLock::new(|| IngredientTable::new(INGREDIENTS));

/// Read-only menu of dishes per category.
pub struct DishCatalog {
    menus: [&'static [Dish]; 3],
    index: HashMap<&'static str, (Category, usize)>,
}

impl DishCatalog {
    /// Builds a catalog over static menus. Dish ids must be unique across
    /// all three menus.
    pub fn new(
        breakfast: &'static [Dish],
        lunch: &'static [Dish],
        dinner: &'static [Dish],
    ) -> Self {
        let menus = [breakfast, lunch, dinner];
        let mut index = HashMap::new();

        for category in Category::VARIANTS {
            for (position, dish) in menus[category.index()].iter().enumerate() {
                let previous = index.insert(dish.id, (*category, position));
                debug_assert!(previous.is_none(), "dish id `{}` listed twice", dish.id);
            }
        }

        Self { menus, index }
    }

    /// The compiled-in catalog, built on first use.
    pub fn global() -> &'static DishCatalog {
        &DISH_CATALOG
    }

    pub fn dishes(&self, category: Category) -> &'static [Dish] {
        self.menus[category.index()]
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&'static Dish> {
        self.lookup(id)
            .filter(|(found, _)| *found == category)
            .map(|(_, dish)| dish)
    }

    /// Finds a dish in whichever category lists it.
    pub fn lookup(&self, id: &str) -> Option<(Category, &'static Dish)> {
        let (category, position) = self.index.get(id)?;
        let menu = self.dishes(*category);
        Some((*category, &menu[*position]))
    }

    /// Menu position of a dish within its category.
    pub fn position(&self, category: Category, id: &str) -> Option<usize> {
        match self.index.get(id) {
            Some((found, position)) if *found == category => Some(*position),
            _ => None,
        }
    }
}

/// Read-only dish id to ingredient lines mapping.
pub struct IngredientTable {
    lines: HashMap<&'static str, &'static [&'static str]>,
}

impl IngredientTable {
    pub fn new(entries: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self {
            lines: entries.iter().copied().collect(),
        }
    }

    pub fn global() -> &'static IngredientTable {
        &INGREDIENT_TABLE
    }

    /// Lines for a dish; unknown ids have none.
    pub fn lines(&self, dish_id: &str) -> &'static [&'static str] {
        self.lines.get(dish_id).copied().unwrap_or(&[])
    }
}
