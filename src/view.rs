//! Plain-text rendering of a panel: header, filter bar, table and modal form.

use std::fmt::{self, Display, Formatter};

use strum::IntoEnumIterator;

use crate::panel::{CrudPanel, Entity, EntityField, FormMode};

const RULE_WIDTH: usize = 72;

pub fn render<E: Entity>(panel: &CrudPanel<E>) -> String {
    PanelView(panel).to_string()
}

struct PanelView<'a, E: Entity>(&'a CrudPanel<E>);

impl<E: Entity> Display for PanelView<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let panel = self.0;
        write_header::<E>(f)?;
        write_filter_bar(f, panel)?;
        write_table(f, panel.records())?;
        if panel.form().is_open() {
            write_modal(f, panel)?;
        }
        Ok(())
    }
}

fn write_header<E: Entity>(f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, " {}", E::TITLE)?;
    writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(f, " [new] register a new {}", E::SINGULAR.to_lowercase())
}

fn write_filter_bar<E: Entity>(f: &mut Formatter<'_>, panel: &CrudPanel<E>) -> fmt::Result {
    let filter = panel.filter();
    let field = filter
        .field()
        .map(|field| format!("{} ({field})", field.label()))
        .unwrap_or_else(|| "-".to_owned());
    let state = if filter.active().is_some() {
        "active"
    } else {
        "off"
    };
    writeln!(
        f,
        " Filter by: {field}   Search: \"{}\"   [{state}]",
        filter.query()
    )
}

fn write_table<E: Entity>(f: &mut Formatter<'_>, records: &[E]) -> fmt::Result {
    let mut header = vec!["Code".to_owned()];
    header.extend(E::Field::iter().map(|field| field.label().to_owned()));
    header.push("Actions".to_owned());

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            let id = record.id();
            let mut row = vec![id.to_string()];
            row.extend(E::Field::iter().map(|field| record.get(field).to_owned()));
            row.push(format!("edit {id} | delete {id}"));
            row
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|column| {
            rows.iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header[column].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    writeln!(f)?;
    write_row(f, &header, &widths)?;
    let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(f, &separator, &widths)?;
    for row in &rows {
        write_row(f, row, &widths)?;
    }
    if rows.is_empty() {
        writeln!(f, " (no records)")?;
    }
    Ok(())
}

fn write_row(f: &mut Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, " {}", line.trim_end())
}

fn write_modal<E: Entity>(f: &mut Formatter<'_>, panel: &CrudPanel<E>) -> fmt::Result {
    let form = panel.form();
    let title = match form.mode() {
        FormMode::Create => format!("New {}", E::SINGULAR.to_lowercase()),
        FormMode::Edit(id) => format!("{} #{id}", E::SINGULAR),
    };
    writeln!(f)?;
    writeln!(f, " +-- {title} {}", "-".repeat(RULE_WIDTH.saturating_sub(title.len() + 6)))?;
    for field in E::Field::iter() {
        writeln!(
            f,
            " | {:<12} ({field}): {}",
            field.label(),
            form.draft().get(field)
        )?;
    }
    // Last API rejection for this draft
    for info in panel.errors() {
        writeln!(f, " | ! {}", info.user_message)?;
    }
    writeln!(f, " | [save] [cancel]")?;
    writeln!(f, " +{}", "-".repeat(RULE_WIDTH - 2))
}
