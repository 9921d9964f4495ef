//! Built-in food table, calories per portion.

/// Approximate calories for one common portion. Plural forms are listed
/// separately because matching is by substring, not by stem.
pub const BUILTIN_FOODS: &[(&str, f64)] = &[
    ("banane", 90.0),
    ("bananes", 90.0),
    ("pomme", 80.0),
    ("pommes", 80.0),
    ("clémentine", 35.0),
    ("clémentines", 35.0),
    ("orange", 80.0),
    ("oranges", 80.0),
    ("yaourt", 90.0),
    ("yaourts", 90.0),
    ("fromage_blanc", 100.0),
    ("fromage blanc", 100.0),
    ("flocons d'avoine", 150.0),
    ("flocons", 150.0),
    ("avoine", 150.0),
    ("lait", 120.0),
    ("soupe", 120.0),
    ("soupe légumes", 120.0),
    ("riz", 180.0),
    ("pâtes", 190.0),
    ("poulet", 165.0),
    ("poisson", 150.0),
    ("oeuf", 80.0),
    ("oeufs", 80.0),
    ("pain", 80.0),
    ("tranche de pain", 80.0),
    ("beurre", 50.0),
    ("huile", 90.0),
    ("café", 5.0),
    ("café au lait", 60.0),
    ("thé", 5.0),
    ("biscuit", 70.0),
    ("biscuits", 70.0),
];
