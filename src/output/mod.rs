//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use pulumi_cloud_client::Result;

use crate::cli::OutputFormat;

pub mod json;
pub mod table;

/// Print a list either as a table of display rows or as JSON of the models
pub fn print_list<T, R>(
    items: &[T],
    format: OutputFormat,
    to_row: impl Fn(&T) -> R,
) -> Result<()>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => println!("{}", json::format_json(items)?),
    }
    Ok(())
}

/// Print a single item; tables show it as a one-row table
pub fn print_one<T, R>(
    item: &T,
    format: OutputFormat,
    to_row: impl Fn(&T) -> R,
) -> Result<()>
where
    T: Serialize,
    R: Tabled,
{
    print_list(std::slice::from_ref(item), format, to_row)
}
