//! Text rendering for views, cards and session status

use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use studyhere_core::{result_summary, Session, SpaceRecord, ViewEntry, EMPTY_VIEW_MESSAGE};

/// Table row for one visible space
#[derive(Tabled)]
struct SpaceRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Building")]
    building: String,
    #[tabled(rename = "Capacity")]
    capacity: u32,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Outlets")]
    outlets: &'static str,
    #[tabled(rename = "Noise")]
    noise: &'static str,
    #[tabled(rename = "Reserved")]
    reserved: &'static str,
}

impl From<&ViewEntry<'_>> for SpaceRow {
    fn from(entry: &ViewEntry<'_>) -> Self {
        let space = entry.space;
        SpaceRow {
            id: space.id.0,
            name: space.name.clone(),
            building: space.building.clone(),
            capacity: space.capacity,
            status: space.availability_label(),
            outlets: space.outlets_label(),
            noise: space.noise.label(),
            reserved: if entry.reserved { "yes" } else { "-" },
        }
    }
}

/// Render entries as a table
pub fn render_table(entries: &[ViewEntry<'_>]) -> String {
    let rows: Vec<SpaceRow> = entries.iter().map(SpaceRow::from).collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// Render the summary heading followed by the table, or the empty message
pub fn render_view(entries: &[ViewEntry<'_>]) -> String {
    let heading = result_summary(entries.len());
    if entries.is_empty() {
        format!("{heading}\n\n{EMPTY_VIEW_MESSAGE}")
    } else {
        format!("{heading}\n\n{}", render_table(entries))
    }
}

/// Render a single space as a detail card
pub fn render_card(space: &SpaceRecord, reserved: bool) -> String {
    let icon = if space.emoji.is_empty() {
        String::new()
    } else {
        format!("{} ", space.emoji)
    };
    let action = if reserved { "Reserved" } else { "Reserve" };

    let mut card = String::new();
    card.push_str(&format!("{icon}{} (#{})\n", space.name, space.id));
    card.push_str(&format!("  {}\n", space.building));
    card.push_str(&format!(
        "  [{}] [Capacity: {}] [{}] [{}]\n",
        space.availability_label(),
        space.capacity,
        space.outlets_label(),
        space.noise.label()
    ));
    card.push_str(&format!("  {action}"));
    card
}

/// One-line description of the current filters
pub fn render_status(session: &Session) -> String {
    let criteria = session.criteria();
    format!(
        "Search: {:?} | Min capacity: {} | Open now: {} | Sort: {} | Reserved: {}",
        criteria.search_term,
        criteria.min_capacity,
        if criteria.only_open { "on" } else { "off" },
        session.sort_key().label(),
        session.reservations().len()
    )
}
