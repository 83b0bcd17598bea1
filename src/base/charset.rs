#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    pub table_rule: char,
    pub chart_axis: char,
    pub chart_bar: char,
    /// Fill characters for consecutive pie slices; reused cyclically.
    pub pie_slices: &'static [char],
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            table_rule: '-',
            chart_axis: '|',
            chart_bar: '+',
            pie_slices: &['#', '=', '*', 'o', '%', '~', '@', ':'],
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            table_rule: '\u{2500}',
            chart_axis: '\u{2502}',
            chart_bar: '\u{2588}',
            pie_slices: &[
                '\u{2588}', '\u{2593}', '\u{2592}', '\u{2591}', '\u{259e}', '\u{259a}', '\u{2596}',
                '\u{2597}',
            ],
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Fill character of the `i`th pie slice.
    pub fn pie_slice(&self, i: usize) -> char {
        self.pie_slices[i % self.pie_slices.len()]
    }
}
