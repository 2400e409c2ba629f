use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Dietary and meat codes from the feed's tag column.
///
/// Codes nobody has a name for are kept verbatim in `Other` so a feed
/// with new markers still parses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Vegetarian,
    Vegan,
    Organic,
    Pork,
    Beef,
    Poultry,
    Fish,
    Other(String),
}

impl Tag {
    pub fn from_code(code: &str) -> Self {
        match code {
            "V" => Tag::Vegetarian,
            "VG" => Tag::Vegan,
            "B" => Tag::Organic,
            "S" => Tag::Pork,
            "R" => Tag::Beef,
            "G" => Tag::Poultry,
            "F" => Tag::Fish,
            other => Tag::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Tag::Vegetarian => "V",
            Tag::Vegan => "VG",
            Tag::Organic => "B",
            Tag::Pork => "S",
            Tag::Beef => "R",
            Tag::Poultry => "G",
            Tag::Fish => "F",
            Tag::Other(code) => code,
        }
    }

    pub fn animal_label(&self) -> Option<&'static str> {
        match self {
            Tag::Pork => Some("[Schweinefleisch]"),
            Tag::Beef => Some("[Rindfleisch]"),
            Tag::Fish => Some("[Fisch]"),
            Tag::Poultry => Some("[Geflügel]"),
            _ => None,
        }
    }
}

/// Presentation bucket derived from the feed's category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Soup,
    Main,
    Side,
    Dessert,
    Other,
}

impl Category {
    /// Render order; also the priority order for classification.
    pub const ORDER: [Category; 5] = [
        Category::Soup,
        Category::Main,
        Category::Side,
        Category::Dessert,
        Category::Other,
    ];

    pub fn from_code(code: &str) -> Self {
        if code.starts_with("Suppe") {
            Category::Soup
        } else if code.starts_with("HG") {
            Category::Main
        } else if code.starts_with('B') {
            Category::Side
        } else if code.starts_with('N') {
            Category::Dessert
        } else {
            Category::Other
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::Soup => "Suppen",
            Category::Main => "Hauptgerichte",
            Category::Side => "Beilagen",
            Category::Dessert => "Nachspeisen",
            Category::Other => "Sonstiges",
        }
    }
}

/// Price strings exactly as the feed prints them, e.g. "3,50".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prices {
    pub student: String,
    pub employee: String,
    pub guest: String,
}

impl Prices {
    pub fn new(
        student: impl Into<String>,
        employee: impl Into<String>,
        guest: impl Into<String>,
    ) -> Self {
        Self {
            student: student.into(),
            employee: employee.into(),
            guest: guest.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceSelection {
    pub student: bool,
    pub employee: bool,
    pub guest: bool,
}

impl PriceSelection {
    pub const ALL: PriceSelection = PriceSelection {
        student: true,
        employee: true,
        guest: true,
    };

    pub fn any(&self) -> bool {
        self.student || self.employee || self.guest
    }
}

/// One menu item for one day. Built by the dish parser, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    name: String,
    category: String,
    tags: Vec<Tag>,
    marked_ingredient_codes: Vec<String>,
    allergen_codes: Vec<String>,
    prices: Prices,
}

impl Dish {
    pub(crate) fn from_parts(
        name: String,
        category: String,
        tags: Vec<Tag>,
        marked_ingredient_codes: Vec<String>,
        allergen_codes: Vec<String>,
        prices: Prices,
    ) -> Self {
        Self {
            name,
            category,
            tags,
            marked_ingredient_codes,
            allergen_codes,
            prices,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw category code as found in the feed.
    pub fn category_code(&self) -> &str {
        &self.category
    }

    pub fn category(&self) -> Category {
        Category::from_code(&self.category)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn marked_ingredient_codes(&self) -> &[String] {
        &self.marked_ingredient_codes
    }

    pub fn allergen_codes(&self) -> &[String] {
        &self.allergen_codes
    }

    pub fn prices(&self) -> &Prices {
        &self.prices
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_soup(&self) -> bool {
        self.category() == Category::Soup
    }

    pub fn is_main(&self) -> bool {
        self.category() == Category::Main
    }

    pub fn is_side(&self) -> bool {
        self.category() == Category::Side
    }

    pub fn is_dessert(&self) -> bool {
        self.category() == Category::Dessert
    }

    pub fn is_vegan(&self) -> bool {
        self.has_tag(&Tag::Vegan)
    }

    pub fn is_vegetarian(&self) -> bool {
        self.has_tag(&Tag::Vegetarian) || self.is_vegan()
    }

    /// The tag column is not reliable for organic dishes, so the name counts too.
    pub fn is_organic(&self) -> bool {
        self.has_tag(&Tag::Organic) || self.name.to_lowercase().contains("bio")
    }

    pub fn contains_pork(&self) -> bool {
        self.has_tag(&Tag::Pork)
    }

    pub fn contains_beef(&self) -> bool {
        self.has_tag(&Tag::Beef)
    }

    pub fn contains_chicken(&self) -> bool {
        self.has_tag(&Tag::Poultry)
    }

    pub fn contains_fish(&self) -> bool {
        self.has_tag(&Tag::Fish)
    }
}

/// Dishes of one week keyed by date; iteration is in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    days: BTreeMap<NaiveDate, Vec<Dish>>,
}

impl Menu {
    pub fn new(days: BTreeMap<NaiveDate, Vec<Dish>>) -> Self {
        Self { days }
    }

    pub fn dishes(&self, date: NaiveDate) -> Option<&[Dish]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Dish])> + '_ {
        self.days.iter().map(|(date, dishes)| (*date, dishes.as_slice()))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn dish_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Which dishes survive; active filters combine with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DietFilter {
    pub vegetarian_only: bool,
    pub vegan_only: bool,
    pub organic_only: bool,
}

impl DietFilter {
    pub fn accepts(&self, dish: &Dish) -> bool {
        (!self.vegetarian_only || dish.is_vegetarian())
            && (!self.vegan_only || dish.is_vegan())
            && (!self.organic_only || dish.is_organic())
    }
}

/// Which annotations and price tiers a rendered dish line carries.
///
/// `None` for a code set shows every code the dish has; `Some(set)` shows
/// only codes in the set, so an empty set hides the annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub marked_ingredients: Option<HashSet<String>>,
    pub allergens: Option<HashSet<String>>,
    pub prices: PriceSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canteen {
    pub key: String,
    pub source: String,
    pub name: String,
}

/// Fully resolved input for one run.
#[derive(Debug, Clone)]
pub struct MenuRequest {
    pub canteen: Canteen,
    pub week: u32,
    pub day: Option<NaiveDate>,
    pub diet: DietFilter,
    pub display: DisplayOptions,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedMenu {
    pub lines: Vec<String>,
    pub days_rendered: usize,
    pub dishes_rendered: usize,
}
