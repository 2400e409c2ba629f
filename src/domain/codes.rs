/// Immutable code -> description lookup for the feed's annotation codes.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    entries: &'static [(&'static str, &'static str)],
}

const MARKED_INGREDIENTS: &[(&str, &str)] = &[
    ("1", "mit Farbstoff"),
    ("2", "mit Konservierungsstoff"),
    ("3", "mit Antioxidationsmittel"),
    ("4", "mit Geschmacksverstärker"),
    ("5", "geschwefelt"),
    ("6", "geschwärzt"),
    ("7", "gewachst"),
    ("8", "mit Phosphat"),
    ("9", "mit Süßungsmittel Saccharin"),
    ("10", "mit Süßungsmittel Aspartam, enthält Phenylalaninquelle"),
    ("11", "mit Süßungsmittel Cyclamat"),
    ("12", "mit Süßungsmittel Acesulfam"),
    ("13", "chininhaltig"),
    ("14", "coffeinhaltig"),
    ("15", "gentechnisch verändert"),
    ("16", "enthält Sulfite"),
    ("17", "enthält Phenylalanin"),
];

const ALLERGENS: &[(&str, &str)] = &[
    ("A", "Gluten"),
    ("B", "Krebstiere"),
    ("C", "Eier"),
    ("D", "Fisch"),
    ("E", "Erdnüsse"),
    ("F", "Soja"),
    ("G", "Milch und Milchprodukte"),
    ("H", "Schalenfrüchte"),
    ("I", "Sellerie"),
    ("J", "Senf"),
    ("K", "Sesamsamen"),
    ("L", "Schwefeldioxid und Sulfite"),
    ("M", "Lupinen"),
    ("N", "Weichtiere"),
];

impl CodeTable {
    pub const fn marked_ingredients() -> Self {
        Self {
            entries: MARKED_INGREDIENTS,
        }
    }

    pub const fn allergens() -> Self {
        Self { entries: ALLERGENS }
    }

    /// Unknown codes yield `None`; callers omit them.
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, description)| *description)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both code tables, built once and passed to whoever needs descriptions.
#[derive(Debug, Clone, Copy)]
pub struct Codebook {
    pub marked_ingredients: CodeTable,
    pub allergens: CodeTable,
}

impl Default for Codebook {
    fn default() -> Self {
        Self {
            marked_ingredients: CodeTable::marked_ingredients(),
            allergens: CodeTable::allergens(),
        }
    }
}
