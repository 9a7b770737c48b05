//! Resource kind listing

use anyhow::Result;
use dashboard_common::ResourceKind;
use tabled::Tabled;

use crate::output::{print_json, OutputFormat};

#[derive(Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: String,
}

/// Print the resource kinds known to the dashboard
pub fn list_kinds(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&ResourceKind::ALL)?,
        OutputFormat::Table => {
            let rows: Vec<KindRow> = ResourceKind::ALL
                .iter()
                .map(|kind| KindRow {
                    kind: kind.to_string(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
