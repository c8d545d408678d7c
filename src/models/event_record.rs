use serde::Serialize;

/// One row returned by the store, reduced to the fields shown to users.
///
/// Every field is optional: a `NULL` value and a column missing from the
/// result set (a translated query may project fewer columns) look the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventRecord {
    pub title: Option<String>,
    pub address: Option<String>,
    pub date_time: Option<String>, // ⇔ events.date_time (TEXT "dd/mm/YYYY,HH:MM")
    pub link: Option<String>,
    pub rating: Option<String>,
    pub about: Option<String>,
}

impl EventRecord {
    /// Assign a column value by name; unknown columns are ignored.
    pub fn set_field(&mut self, column: &str, value: Option<String>) {
        let slot = match column.to_ascii_lowercase().as_str() {
            "title" => &mut self.title,
            "address" => &mut self.address,
            "date_time" => &mut self.date_time,
            "link" => &mut self.link,
            "rating" => &mut self.rating,
            "about" => &mut self.about,
            _ => return,
        };
        *slot = value;
    }
}
