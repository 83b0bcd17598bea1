use crate::base;

/// Text rendition of a pie chart: one strip split proportionally between the
/// slices, then a legend with each slice's value and share.
pub struct Piechart {
    charset: base::Charset,
    slices: Vec<(String, base::Decimal)>,
    widths: Vec<usize>,
    total: f64,
    alignment_charlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub term_width: usize,
    /// `(label, value)` per slice. Slices with non-positive values are listed
    /// but take no room in the strip.
    pub slices: Vec<(String, base::Decimal)>,
}

const COLORS: &[colored::Color] = &[
    colored::Color::Green,
    colored::Color::Blue,
    colored::Color::Yellow,
    colored::Color::Magenta,
    colored::Color::Cyan,
    colored::Color::Red,
];

impl Config {
    pub fn to_piechart(&self) -> Piechart {
        let total = positive_total(&self.slices);
        let strip_charlen = self.term_width.max(base::util::MIN_TERM_WIDTH) - 2;
        let widths = apportion(&self.slices, total, strip_charlen);

        fn char_count((label, value): &(String, base::Decimal)) -> usize {
            label.chars().count()
                + base::util::BOUNDING_SPACES_COUNT
                + base::util::MIN_DASHES_COUNT
                + value.to_string().chars().count()
        }
        let alignment_charlen = self.slices.iter().map(char_count).max().unwrap_or_default();

        Piechart {
            charset: self.charset.clone(),
            slices: self.slices.clone(),
            widths,
            total,
            alignment_charlen,
        }
    }
}

fn positive_total(slices: &[(String, base::Decimal)]) -> f64 {
    slices
        .iter()
        .filter(|(_, v)| v.is_positive())
        .map(|(_, v)| v.to_f64())
        .sum()
}

/// Splits `width` cells between the positive slices, proportionally to their
/// values, using the largest remainder method. Ties go to the earlier slice.
fn apportion(slices: &[(String, base::Decimal)], total: f64, width: usize) -> Vec<usize> {
    if total <= 0.0 {
        return vec![0; slices.len()];
    }
    let exact = slices
        .iter()
        .map(|(_, v)| match v.is_positive() {
            true => v.to_f64() / total * width as f64,
            false => 0.0,
        })
        .collect::<Vec<_>>();
    let mut widths = exact
        .iter()
        .map(|&x| (x.floor() as usize).min(width))
        .collect::<Vec<_>>();
    let mut order = (0..slices.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });
    let leftover = width.saturating_sub(widths.iter().sum::<usize>());
    for &i in order.iter().take(leftover) {
        widths[i] += 1;
    }
    widths
}

impl Piechart {
    fn paint(&self, s: String, i: usize) -> String {
        match self.charset.color {
            true => colored::Colorize::color(s.as_str(), COLORS[i % COLORS.len()]).to_string(),
            false => s,
        }
    }

    fn legend_line(&self, i: usize, label: &str, value: base::Decimal) -> String {
        let pct = match self.total > 0.0 && value.is_positive() {
            true => value.to_f64() / self.total * 100.0,
            false => 0.0,
        };
        let value = value.to_string();
        let dash_count = self.alignment_charlen
            - label.chars().count()
            - base::util::BOUNDING_SPACES_COUNT
            - value.chars().count();
        let mut s = String::with_capacity(self.alignment_charlen + 12);
        s.push_str(&self.paint(self.charset.pie_slice(i).to_string(), i));
        s.push(' ');
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(&format!("{} ({:.1}%)", value, pct));
        s
    }
}

impl std::fmt::Display for Piechart {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.slices.is_empty() {
            return Ok(());
        }
        if self.total > 0.0 {
            write!(f, "{}", self.charset.chart_axis)?;
            for (i, &width) in self.widths.iter().enumerate() {
                let run = self.charset.pie_slice(i).to_string().repeat(width);
                write!(f, "{}", self.paint(run, i))?;
            }
            writeln!(f, "{}", self.charset.chart_axis)?;
        }
        for (i, (label, value)) in self.slices.iter().enumerate() {
            writeln!(f, "{}", self.legend_line(i, label, *value))?;
        }
        Ok(())
    }
}
