//! Dated HTML report of the funds trading at a discount.

use super::discount::FundDiscount;
use super::error::{Error, Result};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_PREFIX: &str = "GAMCO";

/// `{dir}/{prefix}_{YYYY-MM-DD}.html`
pub fn report_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_{}.html", prefix, date.format("%Y-%m-%d")))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(results: &[FundDiscount], date: NaiveDate) -> String {
    let mut output = format!(
        r#"<html>
  <h1>Date: {}</h1>
  <table>
    <tr>
      <th>Symbol</th>
      <th>NAV (USD)</th>
      <th>Price (USD)</th>
      <th>Discount (%)</th>
    </tr>"#,
        date.format("%Y-%m-%d")
    );

    for r in results {
        // Writing into a String cannot fail
        let _ = write!(
            output,
            r#"
    <tr>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
      <td>{}</td>
    </tr>"#,
            escape(&r.symbol),
            escape(&r.nav),
            escape(&r.price),
            r.discount
        );
    }
    output.push_str("\n  </table>\n</html>");
    output
}

/// Writes the report and returns its path, or `None` without touching the
/// filesystem when no fund qualified.
pub fn write_report(
    results: &[FundDiscount],
    dir: &Path,
    prefix: &str,
    date: NaiveDate,
) -> Result<Option<PathBuf>> {
    if results.is_empty() {
        debug!("No qualifying funds, skipping report");
        return Ok(None);
    }

    let path = report_path(dir, prefix, date);
    fs::create_dir_all(dir).map_err(|source| Error::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    fs::write(&path, render_html(results, date)).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), funds = results.len(), "Wrote report");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()
    }

    fn sample() -> Vec<FundDiscount> {
        vec![
            FundDiscount {
                symbol: "GGT".to_string(),
                nav: "4.27".to_string(),
                price: "3.80".to_string(),
                discount: 12,
            },
            FundDiscount {
                symbol: "GUT".to_string(),
                nav: "1.20".to_string(),
                price: "1.00".to_string(),
                discount: 20,
            },
        ]
    }

    #[test]
    fn test_report_path() {
        let path = report_path(Path::new("/tmp"), DEFAULT_PREFIX, date());
        assert_eq!(path, PathBuf::from("/tmp/GAMCO_2021-04-01.html"));
    }

    #[test]
    fn test_render_html() {
        let html = render_html(&sample(), date());

        assert!(html.starts_with("<html>\n  <h1>Date: 2021-04-01</h1>"));
        assert!(html.contains("<th>Discount (%)</th>"));
        assert!(html.contains(
            "    <tr>\n      <td>GUT</td>\n      <td>1.20</td>\n      <td>1.00</td>\n      <td>20</td>\n    </tr>"
        ));
        assert!(html.ends_with("\n  </table>\n</html>"));
        assert!(html.find("GGT").unwrap() < html.find("GUT").unwrap());
    }

    #[test]
    fn test_render_html_escapes_cells() {
        let mut results = sample();
        results[0].symbol = "<b>&".to_string();

        let html = render_html(&results, date());
        assert!(html.contains("<td>&lt;b&gt;&amp;</td>"));
    }

    #[test]
    fn test_write_report() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = write_report(&sample(), temp_dir.path(), DEFAULT_PREFIX, date())?;

        let path = path.expect("report path");
        assert_eq!(path, temp_dir.path().join("GAMCO_2021-04-01.html"));
        assert_eq!(fs::read_to_string(&path)?, render_html(&sample(), date()));
        Ok(())
    }

    #[test]
    fn test_write_report_empty_writes_nothing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let report_dir = temp_dir.path().join("reports");

        let path = write_report(&[], &report_dir, DEFAULT_PREFIX, date())?;
        assert!(path.is_none());
        assert!(!report_dir.exists());
        Ok(())
    }

    #[test]
    fn test_write_report_failure() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        // A regular file where the report directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "")?;

        let result = write_report(&sample(), &blocker, DEFAULT_PREFIX, date());
        assert!(matches!(result, Err(Error::Write { .. })));
        Ok(())
    }
}
