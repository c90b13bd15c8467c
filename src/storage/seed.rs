//! Bundled seed dataset

use crate::model::{Author, Book, Continent, Country};
use super::memory::Tables;

const AUTHORS: &[(i32, &str)] = &[
    (1, "J. K. Rowling"),
    (2, "J. R. R. Tolkien"),
    (3, "Brent Weeks"),
];

const BOOKS: &[(i32, &str, i32)] = &[
    (1, "Harry Potter and the Chamber of Secrets", 1),
    (2, "Harry Potter and the Prisoner of Azkaban", 1),
    (3, "Harry Potter and the Goblet of Fire", 1),
    (4, "The Fellowship of the Ring", 2),
    (5, "The Two Towers", 2),
    (6, "The Return of the King", 2),
    (7, "The Way of Shadows", 3),
    (8, "Beyond the Shadows", 3),
];

const CONTINENTS: &[(i32, &str, &str)] = &[
    (1, "Africa", "AF"),
    (2, "Antarctica", "AN"),
    (3, "Asia", "AS"),
    (4, "Europe", "EU"),
    (5, "North America", "NA"),
    (6, "Oceania", "OC"),
    (7, "South America", "SA"),
];

// (id, name, code, capital, continent code)
const COUNTRIES: &[(i32, &str, &str, Option<&str>, &str)] = &[
    (1, "Egypt", "EG", Some("Cairo"), "AF"),
    (2, "Ghana", "GH", Some("Accra"), "AF"),
    (3, "Kenya", "KE", Some("Nairobi"), "AF"),
    (4, "Morocco", "MA", Some("Rabat"), "AF"),
    (5, "Nigeria", "NG", Some("Abuja"), "AF"),
    (6, "South Africa", "ZA", Some("Pretoria"), "AF"),
    (7, "Antarctica", "AQ", None, "AN"),
    (8, "China", "CN", Some("Beijing"), "AS"),
    (9, "India", "IN", Some("New Delhi"), "AS"),
    (10, "Japan", "JP", Some("Tokyo"), "AS"),
    (11, "France", "FR", Some("Paris"), "EU"),
    (12, "Germany", "DE", Some("Berlin"), "EU"),
    (13, "Italy", "IT", Some("Rome"), "EU"),
    (14, "Canada", "CA", Some("Ottawa"), "NA"),
    (15, "Mexico", "MX", Some("Mexico City"), "NA"),
    (16, "United States", "US", Some("Washington D.C."), "NA"),
    (17, "Australia", "AU", Some("Canberra"), "OC"),
    (18, "New Zealand", "NZ", Some("Wellington"), "OC"),
    (19, "Argentina", "AR", Some("Buenos Aires"), "SA"),
    (20, "Brazil", "BR", Some("Brasília"), "SA"),
    (21, "Chile", "CL", Some("Santiago"), "SA"),
];

/// Build the seed tables
pub fn tables() -> Tables {
    Tables::from_records(
        AUTHORS.iter().map(|&(id, name)| Author::new(id, name)).collect(),
        BOOKS
            .iter()
            .map(|&(id, name, author_id)| Book::new(id, name, author_id))
            .collect(),
        CONTINENTS
            .iter()
            .map(|&(id, name, code)| Continent::new(id, name, code))
            .collect(),
        COUNTRIES
            .iter()
            .map(|&(id, name, code, capital, continent)| Country::new(id, name, code, capital, continent))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_per_collection() {
        let t = tables();
        let author_ids: HashSet<_> = t.authors.iter().map(|a| a.id).collect();
        let book_ids: HashSet<_> = t.books.iter().map(|b| b.id).collect();
        let country_codes: HashSet<_> = t.countries.iter().map(|c| c.code.as_str()).collect();

        assert_eq!(author_ids.len(), t.authors.len());
        assert_eq!(book_ids.len(), t.books.len());
        assert_eq!(country_codes.len(), t.countries.len());
    }

    #[test]
    fn test_every_seed_country_has_a_continent() {
        let t = tables();
        let codes: HashSet<_> = t.continents.iter().map(|c| c.code.as_str()).collect();
        assert!(t.countries.iter().all(|c| codes.contains(c.continent_code.as_str())));
    }
}
