//! Renders each framework's supported and unsupported operator lists.

use crate::Result;
use crate::fixtures::Framework;
use crate::format::percent_of_total;
use crate::misc::ColorMode;
use core::fmt::Write;
use owo_colors::OwoColorize;
use serde_json::Value;

pub fn generate<W: Write>(frameworks: &[Framework], color: ColorMode, writer: &mut W) -> Result<()> {
    let enabled = super::color_enabled(color);

    let mut first = true;
    for framework in frameworks.iter().filter(|fw| !fw.disabled) {
        if !first {
            writeln!(writer)?;
        }
        first = false;

        let support = framework.doc().get("operatorSupport");
        let heading = format!("{} ({})", framework.name, percent_of_total(support));
        if enabled {
            writeln!(writer, "{}", heading.bold())?;
        } else {
            writeln!(writer, "{heading}")?;
        }

        write_list(writer, "Supported", &names_of(support, "supported"), enabled, true)?;
        write_list(writer, "Not supported", &names_of(support, "notSupported"), enabled, false)?;
    }
    Ok(())
}

fn names_of(support: Option<&Value>, key: &str) -> Vec<String> {
    support
        .and_then(|value| value.get(key))
        .and_then(Value::as_array)
        .map_or_else(Vec::new, |items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
}

fn write_list<W: Write>(writer: &mut W, label: &str, names: &[String], enabled: bool, positive: bool) -> Result<()> {
    let heading = format!("  {label} ({}):", names.len());
    if !enabled {
        writeln!(writer, "{heading}")?;
    } else if positive {
        writeln!(writer, "{}", heading.green())?;
    } else {
        writeln!(writer, "{}", heading.red())?;
    }

    if names.is_empty() {
        writeln!(writer, "    -")?;
    } else {
        writeln!(writer, "    {}", names.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn frameworks() -> Vec<Framework> {
        vec![
            Framework::from_value(json!({
                "id": "ezkl",
                "name": "EZKL",
                "operatorSupport": {
                    "supported": ["Add", "Mul"],
                    "notSupported": ["Loop", "Scan"],
                    "total": ["Add", "Mul", "Loop", "Scan"]
                }
            }))
            .unwrap(),
            Framework::from_value(json!({"id": "zkml", "name": "zkML", "disabled": true})).unwrap(),
        ]
    }

    #[test]
    fn test_lists_and_percentage() {
        let mut out = String::new();
        generate(&frameworks(), ColorMode::Never, &mut out).unwrap();

        assert!(out.contains("EZKL (50%)"));
        assert!(out.contains("Supported (2):"));
        assert!(out.contains("Add, Mul"));
        assert!(out.contains("Not supported (2):"));
        assert!(out.contains("Loop, Scan"));
    }

    #[test]
    fn test_disabled_frameworks_are_skipped() {
        let mut out = String::new();
        generate(&frameworks(), ColorMode::Never, &mut out).unwrap();
        assert!(!out.contains("zkML"));
    }

    #[test]
    fn test_missing_support_record() {
        let bare = vec![Framework::from_value(json!({"id": "orion", "name": "Orion"})).unwrap()];
        let mut out = String::new();
        generate(&bare, ColorMode::Never, &mut out).unwrap();

        assert!(out.contains("Orion (No data)"));
        assert!(out.contains("Supported (0):"));
        assert!(out.contains("    -"));
    }
}
