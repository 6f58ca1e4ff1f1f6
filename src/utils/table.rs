use crate::utils;
use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

// ----------------------------------------------------------------------------
// Table
// ----------------------------------------------------------------------------

/// A rectangular table of display values, written as tsv/csv or markdown.
#[derive(Clone, Debug, Default)]
pub struct Table<T>
where
    T: PartialEq + ToString,
{
    pub headers: Vec<T>,
    pub rows: Vec<Vec<T>>,
    pub path: Option<PathBuf>,
}

impl<T> Table<T>
where
    T: PartialEq + ToString,
{
    pub fn new() -> Self {
        Table { headers: Vec::new(), rows: Vec::new(), path: None }
    }

    /// Appends a row, which must match the header width.
    pub fn add_row(&mut self, row: Vec<T>) -> Result<(), Report> {
        if row.len() != self.headers.len() {
            return Err(eyre!(
                "Row width ({}) does not match the header width ({}).",
                row.len(),
                self.headers.len()
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the position of a named header.
    pub fn header_position(&self, header: &str) -> Result<usize, Report> {
        self.headers
            .iter()
            .position(|h| h.to_string() == header)
            .ok_or_else(|| eyre!("Column {header:?} was not found in table: {:?}.", self.path))
    }

    /// Returns the column under a named header.
    pub fn column(&self, header: &str) -> Result<Vec<&T>, Report> {
        let header_i = self.header_position(header)?;
        Ok(self.rows.iter().map(|row| &row[header_i]).collect_vec())
    }

    /// Replaces one cell, addressed by header and row index.
    pub fn set(&mut self, header: &str, row: usize, value: T) -> Result<(), Report> {
        let header_i = self.header_position(header)?;
        let row =
            self.rows.get_mut(row).ok_or_else(|| eyre!("Row {row} is out of bounds."))?;
        row[header_i] = value;
        Ok(())
    }

    /// Writes the table as tsv or csv, chosen by the output extension.
    pub fn write(&self, path: &Path) -> Result<(), Report> {
        let mut file =
            File::create(path).wrap_err_with(|| format!("Unable to create file: {path:?}"))?;

        let delim = utils::get_delimiter(&path)?.to_string();

        let line = format!("{}\n", self.headers.iter().map(|h| h.to_string()).join(&delim));
        file.write_all(line.as_bytes())
            .wrap_err_with(|| format!("Unable to write table headers: {line}"))?;

        for row in &self.rows {
            let line = format!("{}\n", row.iter().map(|c| c.to_string()).join(&delim));
            file.write_all(line.as_bytes())
                .wrap_err_with(|| format!("Unable to write table rows: {line}"))?;
        }

        Ok(())
    }

    /// Renders the table in markdown, with cells centered per column.
    pub fn to_markdown(&self) -> Result<String, Report> {
        // column width: widest of header and cells, plus one space either side
        let col_widths = self
            .headers
            .iter()
            .enumerate()
            .map(|(col_i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col_i].to_string().len())
                    .chain(std::iter::once(header.to_string().len()))
                    .max()
                    .unwrap_or_default()
                    + 2
            })
            .collect_vec();

        let mut markdown = String::from("|");
        let mut header_frame = String::from("|");

        for (header, col_width) in self.headers.iter().zip(col_widths.iter()) {
            markdown.push_str(&format!("{:^width$}|", header.to_string(), width = col_width));
            header_frame.push_str(&format!("{}|", "-".repeat(*col_width)));
        }
        markdown.push('\n');
        markdown.push_str(&header_frame);
        markdown.push('\n');

        for row in &self.rows {
            markdown.push('|');
            for (col_i, col_width) in col_widths.iter().enumerate() {
                markdown
                    .push_str(&format!("{:^width$}|", row[col_i].to_string(), width = col_width));
            }
            markdown.push('\n');
        }

        Ok(markdown)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
