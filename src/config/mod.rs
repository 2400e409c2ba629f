pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::day::{resolve_day, DaySelector};
    use crate::core::selection::select_codes;
    use crate::domain::codes::Codebook;
    use crate::domain::model::{DietFilter, DisplayOptions, MenuRequest, PriceSelection};
    use crate::domain::ports::ConfigProvider;
    use crate::utils::error::{MenuError, Result};
    use crate::utils::validation::{self, Validate};
    use chrono::NaiveDate;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "mensa-menu")]
    #[command(about = "Retrieves and filters menus of STWNO canteens")]
    pub struct CliConfig {
        /// Canteen key, e.g. pa (Mensa Uni Passau), pa-nk or rgbg
        #[arg(short, long)]
        pub canteen: Option<String>,

        /// Do not filter non-vegetarian dishes
        #[arg(short, long)]
        pub all: bool,

        /// Show only vegan dishes
        #[arg(short, long)]
        pub vegan: bool,

        /// Show only organic dishes
        #[arg(short, long)]
        pub organic: bool,

        /// Show the given marked ingredient; use 'all' to show all
        #[arg(short, long = "marked")]
        pub marked: Vec<String>,

        /// Show the given allergen; use 'all' to show all
        #[arg(short = 'l', long = "allergen")]
        pub allergen: Vec<String>,

        /// ISO week to show; defaults to the current week
        #[arg(short, long)]
        pub week: Option<u32>,

        /// Show student prices
        #[arg(short, long)]
        pub student: bool,

        /// Show employee prices
        #[arg(short, long)]
        pub employee: bool,

        /// Show guest prices
        #[arg(short, long)]
        pub guest: bool,

        /// mon..sun, today, tomorrow, curweek or nextweek; defaults to the whole current week
        pub day: Option<DaySelector>,

        /// Optional TOML file with feed URL and canteen registry
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(week) = self.week {
                validation::validate_range("week", week, 1, 53)?;
            }
            if let Some(canteen) = &self.canteen {
                validation::validate_non_empty_string("canteen", canteen)?;
            }
            Ok(())
        }
    }

    impl CliConfig {
        /// Combines the arguments with the registry into everything one run needs.
        pub fn resolve<C: ConfigProvider>(
            &self,
            config: &C,
            codebook: &Codebook,
            today: NaiveDate,
        ) -> Result<MenuRequest> {
            let key = self
                .canteen
                .as_deref()
                .unwrap_or_else(|| config.default_canteen());
            let canteen = config
                .canteen(key)
                .ok_or_else(|| MenuError::UnknownCanteenError {
                    key: key.to_string(),
                    known: config.canteen_keys().join(", "),
                })?;

            let (day, resolved_week) = resolve_day(self.day, today);
            let week = self.week.unwrap_or(resolved_week);

            Ok(MenuRequest {
                canteen,
                week,
                day,
                diet: DietFilter {
                    vegetarian_only: !self.all,
                    vegan_only: self.vegan,
                    organic_only: self.organic,
                },
                display: DisplayOptions {
                    marked_ingredients: Some(select_codes(
                        &self.marked,
                        &codebook.marked_ingredients,
                    )),
                    allergens: Some(select_codes(&self.allergen, &codebook.allergens)),
                    prices: PriceSelection {
                        student: self.student,
                        employee: self.employee,
                        guest: self.guest,
                    },
                },
            })
        }
    }

}
