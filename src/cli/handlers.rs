use std::{io, time::Instant};

use crate::{
    core::{
        config::SniffConfig,
        error::{ConfigError, SniffError},
        fields::{ColumnCount, count_numeric_columns},
        stream::MemoryStream,
    },
    sniff::{LabelSet, LabelStyle, TableShape, extract_labels_with_style, sniff as sniff_stream, sniff_path},
};

use super::parse::{BoundsArgs, ColumnsArgs, LabelsArgs, SniffArgs};

fn config(b: BoundsArgs) -> Result<SniffConfig, ConfigError> {
    SniffConfig::builder()
        .max_header_lines(b.max_header_lines)
        .max_columns(b.max_columns)
        .label_capacity(b.label_capacity)
        .build()
}

pub fn sniff(a: &SniffArgs) -> Result<(), SniffError> {
    let cfg = config(a.bounds)?;

    let t_sniff = Instant::now();
    let shape = if a.file == "-" {
        // stdin cannot seek, buffer it
        let mut stream = MemoryStream::from_reader(io::stdin().lock())?;
        sniff_stream(&mut stream, &cfg)?
    } else {
        sniff_path(&a.file, &cfg)?
    };
    let dur_sniff = t_sniff.elapsed().as_micros();

    print!("{}", render_report(&a.file, &shape));
    if a.debug {
        eprintln!(
            "sniff: {dur_sniff} µs   ({} header + {} rows)",
            shape.header_line_count(),
            shape.row_count
        );
    }
    Ok(())
}

pub fn labels(a: &LabelsArgs) -> Result<(), SniffError> {
    let cfg = SniffConfig::builder()
        .label_capacity(a.label_capacity)
        .build()?;
    let (style, set) = extract_labels_with_style(&a.line, cfg.label_capacity);
    print!("{}", render_labels(style, &set));
    Ok(())
}

pub fn columns(a: &ColumnsArgs) -> Result<(), SniffError> {
    let cfg = SniffConfig::builder().max_columns(a.max_columns).build()?;
    let cols = count_numeric_columns(&a.line, cfg.max_columns);
    println!("{}", render_columns(cols));
    Ok(())
}

fn render_labels(style: Option<LabelStyle>, set: &LabelSet) -> String {
    let mut lines = vec![format!("{} label(s), {}", set.count, style_name(style))];
    for (i, label) in set.labels.iter().enumerate() {
        lines.push(format!("{:>4}  {label}", i + 1));
    }
    if set.is_truncated() {
        lines.push(format!("      ({} not kept)", set.count - set.labels.len()));
    }
    lines.push(String::new());
    lines.join("\n")
}

fn render_columns(cols: ColumnCount) -> String {
    if cols.truncated {
        format!("{} (limit reached)", cols.count)
    } else {
        cols.count.to_string()
    }
}

fn style_name(style: Option<LabelStyle>) -> &'static str {
    match style {
        Some(LabelStyle::Bracketed) => "bracketed",
        Some(LabelStyle::CommaList) => "comma separated",
        Some(LabelStyle::Columns) => "whitespace columns",
        None => "no label line",
    }
}

/// Plain-text summary of a sniffed table, one fact per line.
pub(crate) fn render_report(source: &str, shape: &TableShape) -> String {
    let mut lines = vec![
        format!("source       : {source}"),
        format!("header lines : {}", shape.header_line_count()),
        format!("columns      : {}", shape.column_count()),
        format!("rows         : {}", shape.row_count),
        format!(
            "labels       : {} ({})",
            shape.labels.count,
            style_name(shape.label_style)
        ),
    ];
    for i in 0..shape.column_count() {
        lines.push(format!("{:>4}  {}", i + 1, shape.column_name(i)));
    }
    if shape.labels.is_truncated() {
        lines.push(format!(
            "      ({} labels found, {} kept)",
            shape.labels.count,
            shape.labels.labels.len()
        ));
    }
    for d in &shape.columns.diagnostics {
        lines.push(format!("warning: {d}"));
    }
    lines.push(String::new());
    lines.join("\n")
}
