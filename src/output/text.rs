use std::fmt::Write;

use crate::ascii::{DLE, ESC, RS, SOH, STX, US};
use crate::color::Color;
use crate::datastyle::DataStyles;
use crate::error::Result;
use crate::font::Font;
use crate::value::{DataType, Value};

use super::{ColorMode, DecodeReport, OutputFormatter, ansi};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(&std::io::stdout()),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{}{text}{}", ansi::DIM, ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_properties(&self, out: &mut String, report: &DecodeReport) {
        let _ = writeln!(
            out,
            "{}",
            self.heading(&format!("Properties ({})", report.properties.len()))
        );
        for entry in &report.properties {
            let tag = match entry.data_type {
                DataType::Neutral => String::new(),
                other => self.dim(&format!(" [{other}]")),
            };
            let _ = writeln!(out, "  {} = {}{tag}", entry.name, display_value(&entry.value));
        }
    }

    fn write_data(&self, out: &mut String, report: &DecodeReport) {
        let data = &report.data;
        let _ = writeln!(out, "{}", self.heading("Data"));
        let _ = writeln!(out, "  values: {} set(s)", data.values.len());
        for (i, set) in data.values.iter().enumerate() {
            let _ = writeln!(out, "    [{i}] {}", join_values(set));
        }
        let _ = writeln!(out, "  titles: {}", join_values(&data.titles));
        let _ = writeln!(out, "  labels: {}", join_values(&data.labels));
        let colors: Vec<String> = data.colors.iter().map(format_color).collect();
        let _ = writeln!(out, "  colors: {}", colors.join(", "));
        let fonts: Vec<String> = data.fonts.iter().map(format_font).collect();
        let _ = writeln!(out, "  fonts: {}", fonts.join(", "));
        write_styles(out, "styles", &data.styles);
        write_styles(out, "formats", &data.formats);
    }

    fn write_fonts(&self, out: &mut String, report: &DecodeReport) {
        if report.fonts.is_empty() {
            return;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.heading("Fonts"));
        for resolved in &report.fonts {
            let style = &resolved.style;
            let underline = if style.underline { " underline" } else { "" };
            let _ = writeln!(
                out,
                "  {}: {} {}{underline}",
                resolved.source,
                style.font_resource,
                format_color(&style.color)
            );
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &DecodeReport) -> Result<String> {
        let mut out = String::new();
        let name = if report.name.is_empty() {
            "(unnamed)"
        } else {
            report.name.as_str()
        };
        let _ = writeln!(out, "{} {name}", self.heading("Chart:"));
        let nf = report.number_format;
        let _ = writeln!(
            out,
            "Number format: thousands '{}' decimal '{}'",
            nf.thousands_separator, nf.decimal_point
        );
        let _ = writeln!(out);
        self.write_properties(&mut out, report);
        let _ = writeln!(out);
        self.write_data(&mut out, report);
        self.write_fonts(&mut out, report);
        Ok(out)
    }
}

fn write_styles(out: &mut String, label: &str, styles: &DataStyles) {
    let _ = writeln!(out, "  {label}: {} series", styles.len());
    for (series, points) in styles.iter().enumerate() {
        for (point, style) in points.iter().enumerate() {
            if style.kind.is_empty() && style.settings.is_empty() {
                continue;
            }
            let settings: Vec<String> = style
                .settings
                .iter()
                .map(|(k, v)| format!("{k}={}", display_value(v)))
                .collect();
            let _ = writeln!(
                out,
                "    [{series}][{point}] {} {}",
                style.kind,
                settings.join(" ")
            );
        }
    }
}

/// Replaces the grammar's control characters with readable names.
#[must_use]
pub fn escape_controls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            SOH => out.push_str("<SOH>"),
            STX => out.push_str("<STX>"),
            DLE => out.push_str("<DLE>"),
            ESC => out.push_str("<ESC>"),
            RS => out.push_str("<RS>"),
            US => out.push_str("<US>"),
            c if c.is_control() => out.extend(c.escape_default()),
            c => out.push(c),
        }
    }
    out
}

/// Display text of a value, with any remaining control characters named.
#[must_use]
pub fn display_value(value: &Value) -> String {
    escape_controls(value.text())
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(display_value)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `#RRGGBB cmyk(c,m,y,k)`.
#[must_use]
pub fn format_color(color: &Color) -> String {
    format!(
        "{} cmyk({},{},{},{})",
        color.rgb_hex(),
        color.c,
        color.m,
        color.y,
        color.k
    )
}

/// `style GUID` or `font GUID color [underline]`; `(default)` for the default font.
#[must_use]
pub fn format_font(font: &Font) -> String {
    if *font == Font::default() {
        return "(default)".to_string();
    }
    if font.is_style {
        return format!("style {}", font.guid);
    }
    let underline = if font.underline { " underline" } else { "" };
    format!("font {} {}{underline}", font.guid, format_color(&font.color))
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
