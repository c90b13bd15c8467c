use tabled::{settings::Style, Table, Tabled};
use crate::graph::{self, GraphStats};
use crate::model::EntityKind;
use crate::storage::Tables;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Default)]
pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

pub fn stats_table(stats: &GraphStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Authors", &stats.authors.to_string());
    builder.add_row("Books", &stats.books.to_string());
    builder.add_row("Books with unknown author", &stats.dangling_books.to_string());
    builder.add_row("Continents", &stats.continents.to_string());
    builder.add_row("Countries", &stats.countries.to_string());
    builder.add_row("Countries with unknown continent", &stats.dangling_countries.to_string());
    builder.build()
}

#[derive(Tabled)]
struct AuthorRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Books")]
    books: usize,
}

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Author")]
    author: String,
}

#[derive(Tabled)]
struct ContinentRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Countries")]
    countries: usize,
}

#[derive(Tabled)]
struct CountryRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Continent")]
    continent: String,
}

/// Render one collection, with its relationship resolved into a column
pub fn entity_table(kind: EntityKind, tables: &Tables) -> String {
    let mut table = match kind {
        EntityKind::Author => Table::new(tables.authors.iter().map(|a| AuthorRow {
            id: a.id,
            name: a.name.clone(),
            books: graph::books_of_author(&tables.books, a).len(),
        })),
        EntityKind::Book => Table::new(tables.books.iter().map(|b| BookRow {
            id: b.id,
            name: b.name.clone(),
            author: graph::author_of_book(&tables.authors, b)
                .map(|a| a.name.clone())
                .unwrap_or_else(|| format!("? ({})", b.author_id)),
        })),
        EntityKind::Continent => Table::new(tables.continents.iter().map(|c| ContinentRow {
            id: c.id,
            code: c.code.clone(),
            name: c.name.clone(),
            countries: graph::countries_of_continent(&tables.countries, c).len(),
        })),
        EntityKind::Country => Table::new(tables.countries.iter().map(|c| CountryRow {
            id: c.id,
            code: c.code.clone(),
            name: c.name.clone(),
            capital: c.capital.clone().unwrap_or_else(|| "-".to_string()),
            continent: graph::continent_of_country(&tables.continents, c)
                .map(|continent| continent.name.clone())
                .unwrap_or_else(|| format!("? ({})", c.continent_code)),
        })),
    };

    table.with(Style::rounded()).to_string()
}
