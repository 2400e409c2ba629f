//! Turns the loosely formatted name/tag columns of one feed row into a [`Dish`].
//!
//! Names carry their annotation codes as a trailing parenthesised block,
//! e.g. `"Gulasch (3,A)"`: digits are marked-ingredient codes, single
//! letters are allergen codes. Anything else in that block is dropped.

use crate::domain::model::{Dish, Prices, Tag};

pub fn parse_dish(name_field: &str, category_field: &str, tags_field: &str, prices: Prices) -> Dish {
    let (raw_name, extra) = split_name(name_field);
    let (marked_ingredient_codes, allergen_codes) = extra.map(parse_extra).unwrap_or_default();

    Dish::from_parts(
        normalize_whitespace(raw_name),
        category_field.to_string(),
        parse_tags(tags_field),
        marked_ingredient_codes,
        allergen_codes,
        prices,
    )
}

/// Splits off the trailing `(...)` block. A `(` at index 0 does not count.
pub fn split_name(name_field: &str) -> (&str, Option<&str>) {
    let name = name_field.trim();
    if let Some(inner) = name.strip_suffix(')') {
        if let Some(open) = inner.rfind('(') {
            if open > 0 {
                return (&name[..open], Some(&inner[open + 1..]));
            }
        }
    }
    (name, None)
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns `(marked_ingredient_codes, allergen_codes)` in block order.
pub fn parse_extra(extra: &str) -> (Vec<String>, Vec<String>) {
    let mut marked = Vec::new();
    let mut allergens = Vec::new();

    for item in extra.split(',').map(str::trim) {
        if !item.is_empty() && item.chars().all(|c| c.is_ascii_digit()) {
            marked.push(item.to_string());
        } else if is_single_letter(item) {
            allergens.push(item.to_string());
        } else {
            tracing::debug!("Dropping unrecognized code token '{}'", item);
        }
    }

    (marked, allergens)
}

fn is_single_letter(item: &str) -> bool {
    let mut chars = item.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

pub fn parse_tags(tags_field: &str) -> Vec<Tag> {
    tags_field
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(Tag::from_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Dish {
        parse_dish(name, "HG1", "", Prices::default())
    }

    #[test]
    fn test_extracts_codes_from_trailing_block() {
        let dish = parse("Gulasch (3,A,VG)");
        assert_eq!(dish.name(), "Gulasch");
        assert_eq!(dish.marked_ingredient_codes(), ["3"]);
        assert_eq!(dish.allergen_codes(), ["A"]);
    }

    #[test]
    fn test_keeps_code_order() {
        let dish = parse("Currywurst (2,G,3,A,8)");
        assert_eq!(dish.marked_ingredient_codes(), ["2", "3", "8"]);
        assert_eq!(dish.allergen_codes(), ["G", "A"]);
    }

    #[test]
    fn test_trims_code_tokens() {
        let dish = parse("Nudeln ( 1, C ,14 )");
        assert_eq!(dish.marked_ingredient_codes(), ["1", "14"]);
        assert_eq!(dish.allergen_codes(), ["C"]);
    }

    #[test]
    fn test_collapses_whitespace() {
        let dish = parse("  Pasta   mit\tTomaten  soße   (A) ");
        assert_eq!(dish.name(), "Pasta mit Tomaten soße");
    }

    #[test]
    fn test_uses_last_parenthesis() {
        let dish = parse("Pasta (mit Soße) (1,G)");
        assert_eq!(dish.name(), "Pasta (mit Soße)");
        assert_eq!(dish.marked_ingredient_codes(), ["1"]);
        assert_eq!(dish.allergen_codes(), ["G"]);
    }

    #[test]
    fn test_leading_parenthesis_is_not_a_code_block() {
        let dish = parse("(3,A)");
        assert_eq!(dish.name(), "(3,A)");
        assert!(dish.marked_ingredient_codes().is_empty());
        assert!(dish.allergen_codes().is_empty());
    }

    #[test]
    fn test_unbalanced_or_missing_parentheses() {
        let dish = parse("Suppe 3,A)");
        assert_eq!(dish.name(), "Suppe 3,A)");
        assert!(dish.allergen_codes().is_empty());

        let dish = parse("Kaiserschmarrn (A,C");
        assert_eq!(dish.name(), "Kaiserschmarrn (A,C");
        assert!(dish.allergen_codes().is_empty());

        let dish = parse("Apfelstrudel");
        assert_eq!(dish.name(), "Apfelstrudel");
        assert!(dish.marked_ingredient_codes().is_empty());
    }

    #[test]
    fn test_block_without_codes_yields_nothing() {
        let dish = parse("Salat (hausgemacht, frisch)");
        assert_eq!(dish.name(), "Salat");
        assert!(dish.marked_ingredient_codes().is_empty());
        assert!(dish.allergen_codes().is_empty());
    }

    #[test]
    fn test_tags_and_fields_verbatim() {
        let dish = parse_dish(
            "Tofu (F)",
            "HG2",
            "VG,B,XY",
            Prices::new("2,10", "3,10", "4,10"),
        );
        assert_eq!(dish.category_code(), "HG2");
        assert_eq!(
            dish.tags(),
            [Tag::Vegan, Tag::Organic, Tag::Other("XY".to_string())]
        );
        assert_eq!(dish.prices().student, "2,10");
        assert_eq!(dish.prices().guest, "4,10");
    }

    #[test]
    fn test_empty_tag_field() {
        assert!(parse_tags("").is_empty());
        assert_eq!(parse_tags("S, R"), [Tag::Pork, Tag::Beef]);
    }

    #[test]
    fn test_parsing_is_pure() {
        let a = parse_dish("Gulasch (3,A)", "HG1", "R", Prices::new("1", "2", "3"));
        let b = parse_dish("Gulasch (3,A)", "HG1", "R", Prices::new("1", "2", "3"));
        assert_eq!(a, b);
    }
}
