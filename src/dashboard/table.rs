//! Server table: one row per server list entry, filled in as polls complete

use crate::dashboard::link::Link;

/// Column identifiers and headings, in display order
pub const COLUMNS: [(&str, &str); 7] = [
    ("server-name", "Server"),
    ("api-version", "BCDice-API"),
    ("lib-version", "BCDice"),
    ("response-time", "Response"),
    ("admin-name", "Admin"),
    ("admin-url", "Web"),
    ("admin-email", "Email"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cell {
    /// Not filled in (yet)
    #[default]
    Empty,
    Text(String),
    Link(Link),
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text(text.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Cell::Link(link) => Some(link),
            _ => None,
        }
    }
}

/// State of one server's row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub base_url: String,
    pub name: Cell,
    pub api_version: Cell,
    pub library_version: Cell,
    pub response_time: Cell,
    pub admin_name: Cell,
    pub admin_url: Cell,
    pub admin_email: Cell,
}

impl RowState {
    /// Placeholder row: the base URL as name, everything else empty
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            name: Cell::text(base_url),
            api_version: Cell::Empty,
            library_version: Cell::Empty,
            response_time: Cell::Empty,
            admin_name: Cell::Empty,
            admin_url: Cell::Empty,
            admin_email: Cell::Empty,
        }
    }

    /// Cells in [`COLUMNS`] order
    pub fn cells(&self) -> [&Cell; 7] {
        [
            &self.name,
            &self.api_version,
            &self.library_version,
            &self.response_time,
            &self.admin_name,
            &self.admin_url,
            &self.admin_email,
        ]
    }
}

/// Rows in list order, one per entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerTable {
    rows: Vec<RowState>,
}

impl ServerTable {
    /// Create a placeholder row per list entry. A base URL listed twice gets
    /// two rows.
    pub fn render(servers: &[String]) -> Self {
        let rows = servers.iter().map(|server| RowState::new(server)).collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row for `base_url`
    pub fn row(&self, base_url: &str) -> Option<&RowState> {
        self.rows.iter().find(|row| row.base_url == base_url)
    }

    pub fn rows(&self) -> impl Iterator<Item = &RowState> {
        self.rows.iter()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut RowState> {
        self.rows.iter_mut()
    }
}
