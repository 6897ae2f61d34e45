use anyhow::{Context, Result, bail};
use std::io::{self, Write};

use crate::args::Cli;
use mailsyntax_lib::ValidationResult;

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub address: String,
    pub valid: bool,
}

impl OutputRow {
    pub fn new(address: &str, result: ValidationResult) -> Self {
        Self {
            address: address.to_string(),
            valid: result.valid,
        }
    }
}

pub fn write_reports(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    match cli.format.as_str() {
        "human" => write_human(rows, cli),
        "json" => write_json(rows, cli),
        "ndjson" => write_ndjson(rows, cli),
        "csv" => write_csv(rows, cli),
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    }
}

pub fn any_invalid(rows: &[OutputRow]) -> bool {
    rows.iter().any(|row| !row.valid)
}

fn write_human(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let mut buf = Vec::new();
        render_human(rows, &mut buf)?;
        return write_all_atomically(path, &buf);
    }
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_human(rows, &mut out)?;
    out.flush()?;
    Ok(())
}

fn render_human<W: Write>(rows: &[OutputRow], out: &mut W) -> io::Result<()> {
    for row in rows {
        if row.valid {
            writeln!(out, "[OK]      {}", row.address)?;
        } else {
            writeln!(out, "[INVALID] {}", row.address)?;
        }
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn write_json(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let s = serde_json::to_string_pretty(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, s.as_bytes())?;
    } else {
        println!("{s}");
    }
    Ok(())
}

#[cfg(not(feature = "with-serde"))]
fn write_json(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=json nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-serde")]
fn write_ndjson(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    let buf = render_ndjson(rows)?;
    if let Some(path) = &cli.out {
        write_all_atomically(path, &buf)?;
    } else {
        io::stdout().lock().write_all(&buf)?;
    }
    Ok(())
}

#[cfg(feature = "with-serde")]
fn render_ndjson(rows: &[OutputRow]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in rows {
        let line = serde_json::to_string(row)?;
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn write_ndjson(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=ndjson nécessite la feature 'with-serde'")
}

#[cfg(feature = "with-csv")]
fn write_csv(rows: &[OutputRow], cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.out {
        let data = render_csv(rows, Vec::new())?;
        write_all_atomically(path, &data)?;
    } else {
        render_csv(rows, io::stdout())?;
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn render_csv<W: Write>(rows: &[OutputRow], sink: W) -> Result<W> {
    let mut wtr = csv::Writer::from_writer(sink);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    wtr.into_inner().map_err(|err| anyhow::anyhow!("csv flush: {}", err.error()))
}

#[cfg(not(feature = "with-csv"))]
fn write_csv(_: &[OutputRow], _: &Cli) -> Result<()> {
    bail!("format=csv nécessite la feature 'with-csv'")
}

fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    let tmp = format!("{path}.tmp");
    {
        let mut f = std::fs::File::create(&tmp).with_context(|| format!("create {tmp}"))?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path).with_context(|| format!("rename {tmp} -> {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn rows() -> Vec<OutputRow> {
        vec![
            OutputRow::new("test@example.com", ValidationResult::from(true)),
            OutputRow::new("plainaddress", ValidationResult::from(false)),
        ]
    }

    #[test]
    fn human_rendering() {
        let mut buf = Vec::new();
        render_human(&rows(), &mut buf).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf-8");
        insta::assert_snapshot!(text.trim_end(), @r"
        [OK]      test@example.com
        [INVALID] plainaddress
        ");
    }

    #[test]
    fn invalid_rows_detected() {
        assert!(any_invalid(&rows()));
        assert!(!any_invalid(&rows()[..1]));
        assert!(!any_invalid(&[]));
    }

    #[test]
    fn human_report_honors_out_path() {
        let path =
            std::env::temp_dir().join(format!("mailsyntax-human-{}.txt", std::process::id()));
        let path_str = path.to_str().expect("utf-8 temp path");
        let cli = Cli::try_parse_from(["mailsyntax-cli", "--out", path_str]).expect("args");
        assert_eq!(cli.format, "human");

        write_reports(&rows(), &cli).expect("write report");
        let text = std::fs::read_to_string(&path).expect("report file");
        std::fs::remove_file(&path).ok();
        insta::assert_snapshot!(text.trim_end(), @r"
        [OK]      test@example.com
        [INVALID] plainaddress
        ");
    }

    #[cfg(feature = "with-serde")]
    #[test]
    fn ndjson_rendering() {
        let buf = render_ndjson(&rows()).expect("serialize");
        let text = String::from_utf8(buf).expect("utf-8");
        insta::assert_snapshot!(text.trim_end(), @r#"
        {"address":"test@example.com","valid":true}
        {"address":"plainaddress","valid":false}
        "#);
    }

    #[cfg(feature = "with-csv")]
    #[test]
    fn csv_rendering() {
        let buf = render_csv(&rows(), Vec::new()).expect("serialize");
        let text = String::from_utf8(buf).expect("utf-8");
        insta::assert_snapshot!(text.trim_end(), @r"
        address,valid
        test@example.com,true
        plainaddress,false
        ");
    }
}
