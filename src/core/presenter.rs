//! Result presenter: events → chat reply text.

use crate::models::EventRecord;

pub const NO_RESULTS: &str = "No matching events found.";
pub const PLACEHOLDER: &str = "N/A";

fn field(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or(PLACEHOLDER)
}

/// One block per record, numbered from 1, separated by a blank line.
pub fn present(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    records
        .iter()
        .enumerate()
        .map(|(i, ev)| {
            format!(
                "📅 *Event {}*\n\
                 • *Title:* {}\n\
                 • *Date & Time:* {}\n\
                 • *Location:* {}\n\
                 • *Link:* {}\n\
                 • *Rating:* {}/5\n\
                 • *About:* {}\n",
                i + 1,
                field(&ev.title),
                field(&ev.date_time),
                field(&ev.address),
                field(&ev.link),
                field(&ev.rating),
                field(&ev.about),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
