use crate::core::parser::parse_dish;
use crate::domain::model::{Dish, Menu, Prices};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MIN_FIELDS: usize = 5;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

const DATE_FIELD: usize = 0;
const CATEGORY_FIELD: usize = 2;
const NAME_FIELD: usize = 3;
const TAGS_FIELD: usize = 4;
const STUDENT_PRICE_FIELD: usize = 6;
const EMPLOYEE_PRICE_FIELD: usize = 7;
const GUEST_PRICE_FIELD: usize = 8;

/// Why a feed row was skipped. Never surfaced beyond debug logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("row has {found} fields, expected at least {}", MIN_FIELDS)]
    TooFewFields { found: usize },

    #[error("invalid date '{value}', expected DD.MM.YYYY")]
    InvalidDate { value: String },
}

/// One decoded line of the weekly feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRow {
    pub date: NaiveDate,
    pub category: String,
    pub name: String,
    pub tags: String,
    pub prices: Prices,
}

impl FeedRow {
    pub fn into_dish(self) -> (NaiveDate, Dish) {
        let dish = parse_dish(&self.name, &self.category, &self.tags, self.prices);
        (self.date, dish)
    }
}

impl TryFrom<&StringRecord> for FeedRow {
    type Error = RowError;

    fn try_from(record: &StringRecord) -> Result<Self, Self::Error> {
        if record.len() < MIN_FIELDS {
            return Err(RowError::TooFewFields {
                found: record.len(),
            });
        }

        let field = |index: usize| record.get(index).unwrap_or_default().to_string();

        let raw_date = field(DATE_FIELD);
        let date = NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT)
            .map_err(|_| RowError::InvalidDate { value: raw_date })?;

        Ok(FeedRow {
            date,
            category: field(CATEGORY_FIELD),
            name: field(NAME_FIELD),
            tags: field(TAGS_FIELD),
            prices: Prices::new(
                field(STUDENT_PRICE_FIELD),
                field(EMPLOYEE_PRICE_FIELD),
                field(GUEST_PRICE_FIELD),
            ),
        })
    }
}

/// Groups the feed's rows by date. The first line is the header and is skipped.
///
/// Rows that do not decode are skipped; dishes keep row order within a day.
pub fn build_menu<S: AsRef<str>>(lines: &[S]) -> Menu {
    let body = lines
        .iter()
        .skip(1)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut days: BTreeMap<NaiveDate, Vec<Dish>> = BTreeMap::new();
    let mut skipped = 0usize;

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!("Skipping unreadable row {}: {}", index + 1, e);
                skipped += 1;
                continue;
            }
        };

        match FeedRow::try_from(&record) {
            Ok(row) => {
                let (date, dish) = row.into_dish();
                days.entry(date).or_default().push(dish);
            }
            Err(e) => {
                tracing::debug!("Skipping row {}: {}", index + 1, e);
                skipped += 1;
            }
        }
    }

    let menu = Menu::new(days);
    tracing::debug!(
        "Built menu with {} dishes over {} days ({} rows skipped)",
        menu.dish_count(),
        menu.day_count(),
        skipped
    );
    menu
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "datum;tag;warengruppe;name;kennz;preis;stud;bed;gast";

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_groups_by_date_in_row_order() {
        let lines = vec![
            HEADER,
            "02.12.2016;Fr;HG1;Fischstäbchen (D);F;;2,00;3,00;4,00",
            "01.12.2016;Do;Suppe1;Tomatensuppe;VG;;0,60;0,90;1,20",
            "01.12.2016;Do;HG1;Gulasch (3,A);R;;3,50;4,50;5,50",
        ];
        let menu = build_menu(&lines);

        assert_eq!(menu.day_count(), 2);
        assert_eq!(menu.days().collect::<Vec<_>>(), vec![date(1, 12, 2016), date(2, 12, 2016)]);

        let first = menu.dishes(date(1, 12, 2016)).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name(), "Tomatensuppe");
        assert_eq!(first[1].name(), "Gulasch");
        assert_eq!(first[1].prices().employee, "4,50");
    }

    #[test]
    fn test_skips_header_and_short_rows() {
        let lines = vec![
            "01.12.2016;Do;HG1;Header row looks like data;V;;1;2;3",
            "01.12.2016;Do;HG1;Too short",
            "",
            "01.12.2016;Do;HG2;Spätzle;V;;1,00;2,00;3,00",
        ];
        let menu = build_menu(&lines);
        assert_eq!(menu.dish_count(), 1);
        assert_eq!(menu.dishes(date(1, 12, 2016)).unwrap()[0].name(), "Spätzle");
    }

    #[test]
    fn test_skips_rows_with_bad_dates() {
        let lines = vec![HEADER, "2016-12-01;Do;HG1;Gulasch;R;;1;2;3"];
        assert!(build_menu(&lines).is_empty());
    }

    #[test]
    fn test_missing_price_fields_are_empty() {
        let lines = vec![HEADER, "01.12.2016;Do;N1;Pudding;V"];
        let menu = build_menu(&lines);
        let dish = &menu.dishes(date(1, 12, 2016)).unwrap()[0];
        assert_eq!(dish.prices(), &Prices::default());
    }

    #[test]
    fn test_tolerates_crlf_line_endings() {
        let lines = vec![HEADER, "01.12.2016;Do;B1;Reis;VG;;0,80;1,00;1,20\r"];
        let menu = build_menu(&lines);
        let dish = &menu.dishes(date(1, 12, 2016)).unwrap()[0];
        assert_eq!(dish.prices().guest, "1,20");
    }

    #[test]
    fn test_row_decode_errors() {
        let short = StringRecord::from(vec!["01.12.2016", "Do", "HG1"]);
        assert_eq!(
            FeedRow::try_from(&short),
            Err(RowError::TooFewFields { found: 3 })
        );

        let bad_date = StringRecord::from(vec!["32.12.2016", "Do", "HG1", "X", ""]);
        assert_eq!(
            FeedRow::try_from(&bad_date),
            Err(RowError::InvalidDate {
                value: "32.12.2016".to_string()
            })
        );
    }

    #[test]
    fn test_empty_input() {
        let lines: Vec<String> = vec![];
        assert!(build_menu(&lines).is_empty());
    }
}
