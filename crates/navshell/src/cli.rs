//! Terminal rendering for `navshell inspect`

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use navshell_core::{NodeView, SidebarView};

/// Format a sidebar snapshot as a table (human) or JSON
pub fn format_sidebar_view(view: &SidebarView, json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string());
    }

    let mut out = format!(
        "path: {}  layout: {:?}  expanded: {}  labels: {}  overlay: {}\n",
        view.path,
        view.layout,
        yes_no(view.expanded),
        yes_no(view.labels_visible),
        yes_no(view.overlay_open),
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["Section", "Entry", "Path", "Open", "Active"]);
    } else {
        table.set_header(vec![
            Cell::new("Section").fg(Color::Cyan),
            Cell::new("Entry").fg(Color::Cyan),
            Cell::new("Path").fg(Color::Cyan),
            Cell::new("Open").fg(Color::Cyan),
            Cell::new("Active").fg(Color::Cyan),
        ]);
    }

    for section in &view.sections {
        let mut rows = Vec::new();
        for item in &section.items {
            collect_rows(item, 0, &mut rows);
        }
        for (i, row) in rows.into_iter().enumerate() {
            let title = if i == 0 { section.title.as_str() } else { "" };
            table.add_row(styled_row(title, row, no_color));
        }
    }

    out.push_str(&table.to_string());
    out
}

struct EntryRow {
    entry: String,
    path: String,
    open: String,
    active: bool,
}

fn collect_rows(node: &NodeView, depth: usize, rows: &mut Vec<EntryRow>) {
    let indent = "  ".repeat(depth);
    match node {
        NodeView::Link(link) => rows.push(EntryRow {
            entry: format!("{}{}", indent, link.label),
            path: link.path.clone(),
            open: "-".to_string(),
            active: link.active,
        }),
        NodeView::Group(group) => {
            rows.push(EntryRow {
                entry: format!("{}{} [{}]", indent, group.label, group.id),
                path: String::new(),
                open: yes_no(group.open).to_string(),
                active: group.active,
            });
            for child in &group.children {
                collect_rows(child, depth + 1, rows);
            }
        }
    }
}

fn styled_row(section: &str, row: EntryRow, no_color: bool) -> Row {
    let active = if row.active { "●" } else { "" };
    let mut entry = Cell::new(&row.entry);
    if row.active && !no_color {
        entry = entry.fg(Color::Green);
    }
    Row::from(vec![
        Cell::new(section),
        entry,
        Cell::new(&row.path),
        Cell::new(&row.open),
        Cell::new(active),
    ])
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
