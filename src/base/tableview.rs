use crate::base;

const COLUMN_GAP: &str = "  ";

pub struct Tableview<'a> {
    charset: &'a base::Charset,
    table: &'a base::Table,
    widths: Vec<usize>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub table: base::Table,
}

impl Config {
    pub fn to_tableview(&self) -> Tableview<'_> {
        let mut widths = self
            .table
            .columns()
            .iter()
            .map(|c| c.chars().count())
            .collect::<Vec<_>>();
        for row in self.table.rows() {
            for (w, value) in widths.iter_mut().zip(row) {
                *w = (*w).max(value.to_string().chars().count());
            }
        }
        Tableview {
            charset: &self.charset,
            table: &self.table,
            widths,
        }
    }
}

impl Tableview<'_> {
    fn write_line(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        cells: impl Iterator<Item = (String, bool)>,
        bold: bool,
    ) -> std::fmt::Result {
        let last = self.widths.len().saturating_sub(1);
        let mut line = String::new();
        for (i, (cell, right_align)) in cells.enumerate() {
            if i > 0 {
                line.push_str(COLUMN_GAP);
            }
            let width = self.widths[i];
            let mut padded = match right_align {
                true => format!("{:>width$}", cell),
                false => format!("{:<width$}", cell),
            };
            if i == last {
                padded.truncate(padded.trim_end().len());
            }
            if bold && self.charset.color {
                padded = colored::Colorize::bold(padded.as_str()).to_string();
            }
            line.push_str(&padded);
        }
        writeln!(f, "{}", line.trim_end())
    }
}

impl std::fmt::Display for Tableview<'_> {
    /// Writes a terminating newline. Integer cells are right aligned.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.table.is_schemaless() {
            return Ok(());
        }
        let int_columns = (0..self.widths.len())
            .map(|i| {
                !self.table.is_empty()
                    && self
                        .table
                        .rows()
                        .all(|row| {
                            matches!(row[i], base::Value::Int(_) | base::Value::Decimal(_))
                        })
            })
            .collect::<Vec<_>>();

        let header = self
            .table
            .columns()
            .iter()
            .zip(&int_columns)
            .map(|(c, &r)| (c.clone(), r));
        self.write_line(f, header, true)?;

        let rule_charlen = self.widths.iter().sum::<usize>()
            + COLUMN_GAP.len() * self.widths.len().saturating_sub(1);
        let rule = self.charset.table_rule.to_string().repeat(rule_charlen);
        writeln!(f, "{}", rule)?;

        for row in self.table.rows() {
            let cells = row
                .iter()
                .zip(&int_columns)
                .map(|(v, &r)| (v.to_string(), r));
            self.write_line(f, cells, false)?;
        }
        Ok(())
    }
}
