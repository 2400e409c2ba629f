use crate::domain::model::{Category, DietFilter, Dish};

/// A day's surviving dishes, one list per presentation category.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayBuckets<'a> {
    pub soup: Vec<&'a Dish>,
    pub main: Vec<&'a Dish>,
    pub side: Vec<&'a Dish>,
    pub dessert: Vec<&'a Dish>,
    pub other: Vec<&'a Dish>,
}

impl<'a> DayBuckets<'a> {
    pub fn bucket(&self, category: Category) -> &[&'a Dish] {
        match category {
            Category::Soup => &self.soup,
            Category::Main => &self.main,
            Category::Side => &self.side,
            Category::Dessert => &self.dessert,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<&'a Dish> {
        match category {
            Category::Soup => &mut self.soup,
            Category::Main => &mut self.main,
            Category::Side => &mut self.side,
            Category::Dessert => &mut self.dessert,
            Category::Other => &mut self.other,
        }
    }

    /// Buckets in render order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a Dish])> + '_ {
        Category::ORDER
            .into_iter()
            .map(move |category| (category, self.bucket(category)))
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, dishes)| dishes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Drops dishes the diet filter rejects and sorts the rest into buckets,
/// keeping input order inside each bucket.
pub fn select_and_bucket<'a>(dishes: &'a [Dish], filter: &DietFilter) -> DayBuckets<'a> {
    let mut buckets = DayBuckets::default();
    for dish in dishes.iter().filter(|dish| filter.accepts(dish)) {
        buckets.bucket_mut(dish.category()).push(dish);
    }
    buckets
}
