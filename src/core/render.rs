//! Text output: one line per dish, grouped into a framed block per day.

use crate::core::filter::{select_and_bucket, DayBuckets};
use crate::domain::codes::{CodeTable, Codebook};
use crate::domain::model::{
    DietFilter, DisplayOptions, Dish, Menu, MenuRequest, PriceSelection, Prices, RenderedMenu,
};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

pub const CURRENCY_LABEL: &str = "EUR";
pub const NO_MENU_MESSAGE: &str = "No menu for this day.";

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Montag",
        Weekday::Tue => "Dienstag",
        Weekday::Wed => "Mittwoch",
        Weekday::Thu => "Donnerstag",
        Weekday::Fri => "Freitag",
        Weekday::Sat => "Samstag",
        Weekday::Sun => "Sonntag",
    }
}

/// `[desc, desc]` for the dish codes the filter lets through, or `""`.
pub fn format_codes(codes: &[String], table: &CodeTable, filter: Option<&HashSet<String>>) -> String {
    let descriptions: Vec<&str> = codes
        .iter()
        .filter(|code| filter.map_or(true, |selected| selected.contains(code.as_str())))
        .filter_map(|code| table.get(code))
        .collect();

    if descriptions.is_empty() {
        String::new()
    } else {
        format!("[{}]", descriptions.join(", "))
    }
}

pub fn format_price(prices: &Prices, select: &PriceSelection) -> String {
    if !select.any() {
        return String::new();
    }
    let tiers = [
        (select.student, prices.student.as_str()),
        (select.employee, prices.employee.as_str()),
        (select.guest, prices.guest.as_str()),
    ];
    let selected: Vec<&str> = tiers
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, price)| *price)
        .collect();
    format!("{} {}", CURRENCY_LABEL, selected.join("/"))
}

/// Meat and fish labels in tag order.
pub fn format_animals(dish: &Dish) -> Vec<&'static str> {
    dish.tags().iter().filter_map(|tag| tag.animal_label()).collect()
}

pub struct Renderer<'a> {
    codebook: &'a Codebook,
    display: &'a DisplayOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(codebook: &'a Codebook, display: &'a DisplayOptions) -> Self {
        Self { codebook, display }
    }

    pub fn format_marked_ingredients(&self, dish: &Dish) -> String {
        format_codes(
            dish.marked_ingredient_codes(),
            &self.codebook.marked_ingredients,
            self.display.marked_ingredients.as_ref(),
        )
    }

    pub fn format_allergens(&self, dish: &Dish) -> String {
        format_codes(
            dish.allergen_codes(),
            &self.codebook.allergens,
            self.display.allergens.as_ref(),
        )
    }

    pub fn render_dish(&self, dish: &Dish) -> String {
        let mut line = dish.name().to_string();

        let annotations = format!(
            "{}{}",
            self.format_marked_ingredients(dish),
            self.format_allergens(dish)
        );
        if !annotations.is_empty() {
            line.push(' ');
            line.push_str(&annotations);
        }

        let animals = format_animals(dish);
        if !animals.is_empty() {
            line.push(' ');
            line.push_str(&animals.join(" "));
        }

        let price = format_price(dish.prices(), &self.display.prices);
        if !price.is_empty() {
            line.push_str(": ");
            line.push_str(&price);
        }

        line
    }

    pub fn render_day(&self, date: NaiveDate, buckets: &DayBuckets<'_>) -> Vec<String> {
        let mut lines = vec![format!(
            "*** {}, {} ***",
            weekday_name(date.weekday()),
            date.format("%d.%m.%Y")
        )];

        for (category, dishes) in buckets.iter().filter(|(_, dishes)| !dishes.is_empty()) {
            lines.push("*".to_string());
            lines.push(format!("* {}:", category.heading()));
            lines.extend(dishes.iter().map(|dish| format!("*   {}", self.render_dish(dish))));
        }

        lines.push("*".to_string());
        lines.push("**********".to_string());
        lines.push(String::new());
        lines
    }

    /// Renders every day in date order, or only `day` when given.
    pub fn render_menu(&self, menu: &Menu, day: Option<NaiveDate>, filter: &DietFilter) -> RenderedMenu {
        let days: Vec<(NaiveDate, &[Dish])> = match day {
            None => menu.iter().collect(),
            Some(date) => match menu.dishes(date) {
                Some(dishes) => vec![(date, dishes)],
                None => {
                    tracing::info!("No dishes for {} in the fetched week", date);
                    return RenderedMenu {
                        lines: vec![NO_MENU_MESSAGE.to_string()],
                        ..Default::default()
                    };
                }
            },
        };

        let mut rendered = RenderedMenu::default();
        for (date, dishes) in days {
            let buckets = select_and_bucket(dishes, filter);
            rendered.dishes_rendered += buckets.len();
            rendered.days_rendered += 1;
            rendered.lines.extend(self.render_day(date, &buckets));
        }
        rendered
    }
}

/// The lines printed above the menu describing what is being shown.
pub fn render_banner(request: &MenuRequest) -> Vec<String> {
    let kind = if request.diet.vegan_only {
        "Vegan"
    } else if request.diet.vegetarian_only {
        "Vegetarian"
    } else {
        "Complete"
    };

    let mut lines = vec![
        String::new(),
        format!(
            "{} menu for week {} at {}",
            kind, request.week, request.canteen.name
        ),
    ];

    if request.diet.organic_only {
        lines.push("Showing only organic dishes.".to_string());
    }

    let prices = &request.display.prices;
    if prices.any() {
        let tiers: Vec<&str> = [
            (prices.student, "students"),
            (prices.employee, "employees"),
            (prices.guest, "guests"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, label)| *label)
        .collect();
        lines.push(format!("Prices are for {}.", tiers.join("/")));
    }

    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_dish;
    use crate::domain::model::Canteen;
    use std::collections::BTreeMap;

    fn codes(items: &[&str]) -> Option<HashSet<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn gulasch() -> Dish {
        parse_dish("Gulasch (3,A)", "HG1", "VG,B", Prices::new("3,50", "4,50", "5,50"))
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 12, d).unwrap()
    }

    #[test]
    fn test_full_dish_line() {
        let codebook = Codebook::default();
        let display = DisplayOptions {
            marked_ingredients: codes(&["3"]),
            allergens: codes(&["A"]),
            prices: PriceSelection::ALL,
        };
        let renderer = Renderer::new(&codebook, &display);
        assert_eq!(
            renderer.render_dish(&gulasch()),
            "Gulasch [mit Antioxidationsmittel][Gluten]: EUR 3,50/4,50/5,50"
        );
    }

    #[test]
    fn test_bare_name_without_annotations_or_prices() {
        let codebook = Codebook::default();
        let display = DisplayOptions {
            marked_ingredients: codes(&[]),
            allergens: codes(&[]),
            prices: PriceSelection::default(),
        };
        let renderer = Renderer::new(&codebook, &display);
        assert_eq!(renderer.render_dish(&gulasch()), "Gulasch");

        let plain = parse_dish("Reis", "B1", "VG", Prices::new("1", "2", "3"));
        assert_eq!(renderer.render_dish(&plain), "Reis");
    }

    #[test]
    fn test_no_filter_shows_all_known_codes() {
        let codebook = Codebook::default();
        let display = DisplayOptions::default();
        let renderer = Renderer::new(&codebook, &display);
        let dish = parse_dish("Cola (1,14,99,Z)", "AE", "", Prices::default());
        // 99 and Z are not in the tables and are left out
        assert_eq!(
            renderer.format_marked_ingredients(&dish),
            "[mit Farbstoff, coffeinhaltig]"
        );
        assert_eq!(renderer.format_allergens(&dish), "");
    }

    #[test]
    fn test_filter_is_membership_not_reordering() {
        let table = CodeTable::marked_ingredients();
        let dish_codes = vec!["8".to_string(), "2".to_string(), "3".to_string()];
        let filter = codes(&["3", "8"]);
        assert_eq!(
            format_codes(&dish_codes, &table, filter.as_ref()),
            "[mit Phosphat, mit Antioxidationsmittel]"
        );
    }

    #[test]
    fn test_price_tiers() {
        let prices = Prices::new("2,00", "3,00", "4,00");
        let select = PriceSelection {
            student: true,
            employee: false,
            guest: true,
        };
        assert_eq!(format_price(&prices, &select), "EUR 2,00/4,00");
        assert_eq!(format_price(&prices, &PriceSelection::default()), "");
    }

    #[test]
    fn test_animal_labels_follow_tag_order() {
        let codebook = Codebook::default();
        let display = DisplayOptions {
            marked_ingredients: codes(&[]),
            allergens: codes(&["A"]),
            prices: PriceSelection {
                student: true,
                ..Default::default()
            },
        };
        let renderer = Renderer::new(&codebook, &display);
        let dish = parse_dish("Grillteller (A)", "HG1", "R,S,X", Prices::new("5,00", "", ""));
        assert_eq!(format_animals(&dish), ["[Rindfleisch]", "[Schweinefleisch]"]);
        assert_eq!(
            renderer.render_dish(&dish),
            "Grillteller [Gluten] [Rindfleisch] [Schweinefleisch]: EUR 5,00"
        );
    }

    #[test]
    fn test_render_day_skips_empty_buckets() {
        let codebook = Codebook::default();
        let display = DisplayOptions {
            marked_ingredients: codes(&[]),
            allergens: codes(&[]),
            prices: PriceSelection::default(),
        };
        let renderer = Renderer::new(&codebook, &display);
        let dishes = vec![
            parse_dish("Pudding", "N1", "V", Prices::default()),
            parse_dish("Linsensuppe", "Suppe", "VG", Prices::default()),
        ];
        let buckets = select_and_bucket(&dishes, &DietFilter::default());

        assert_eq!(
            renderer.render_day(date(1), &buckets),
            vec![
                "*** Donnerstag, 01.12.2016 ***",
                "*",
                "* Suppen:",
                "*   Linsensuppe",
                "*",
                "* Nachspeisen:",
                "*   Pudding",
                "*",
                "**********",
                "",
            ]
        );
    }

    #[test]
    fn test_render_menu_orders_days_and_reports_missing_day() {
        let mut days = BTreeMap::new();
        days.insert(date(2), vec![parse_dish("Fisch", "HG1", "F", Prices::default())]);
        days.insert(date(1), vec![parse_dish("Tofu", "HG1", "VG", Prices::default())]);
        let menu = Menu::new(days);

        let codebook = Codebook::default();
        let display = DisplayOptions::default();
        let renderer = Renderer::new(&codebook, &display);

        let all = renderer.render_menu(&menu, None, &DietFilter::default());
        assert_eq!(all.days_rendered, 2);
        assert_eq!(all.dishes_rendered, 2);
        assert_eq!(all.lines[0], "*** Donnerstag, 01.12.2016 ***");
        assert!(all.lines.contains(&"*** Freitag, 02.12.2016 ***".to_string()));

        let missing = renderer.render_menu(&menu, Some(date(9)), &DietFilter::default());
        assert_eq!(missing.lines, vec![NO_MENU_MESSAGE]);
        assert_eq!(missing.days_rendered, 0);
    }

    #[test]
    fn test_day_with_everything_filtered_keeps_frame() {
        let mut days = BTreeMap::new();
        days.insert(date(1), vec![parse_dish("Schnitzel", "HG1", "S", Prices::default())]);
        let menu = Menu::new(days);
        let codebook = Codebook::default();
        let display = DisplayOptions::default();
        let renderer = Renderer::new(&codebook, &display);

        let filter = DietFilter {
            vegetarian_only: true,
            ..Default::default()
        };
        let rendered = renderer.render_menu(&menu, Some(date(1)), &filter);
        assert_eq!(rendered.dishes_rendered, 0);
        assert_eq!(
            rendered.lines,
            vec!["*** Donnerstag, 01.12.2016 ***", "*", "**********", ""]
        );
    }

    #[test]
    fn test_banner() {
        let request = MenuRequest {
            canteen: Canteen {
                key: "pa".to_string(),
                source: "UNI-P".to_string(),
                name: "Mensa Uni Passau".to_string(),
            },
            week: 48,
            day: None,
            diet: DietFilter {
                vegetarian_only: true,
                vegan_only: false,
                organic_only: true,
            },
            display: DisplayOptions {
                prices: PriceSelection {
                    student: true,
                    employee: false,
                    guest: true,
                },
                ..Default::default()
            },
        };
        assert_eq!(
            render_banner(&request),
            vec![
                "",
                "Vegetarian menu for week 48 at Mensa Uni Passau",
                "Showing only organic dishes.",
                "Prices are for students/guests.",
                "",
            ]
        );
    }
}
