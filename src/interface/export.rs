use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::ledger::Ledger;

/// Write every entry as a CSV row, followed by a grand total row.
///
/// Columns: `meal,index,name,calories`. Indices are zero-based, matching
/// what `remove_food` expects.
pub fn write_csv(ledger: &Ledger, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "index", "name", "calories"])?;

    for (meal, index, food) in ledger.entries() {
        wtr.write_record([
            meal.as_str().to_string(),
            index.to_string(),
            food.name.clone(),
            food.calories.to_string(),
        ])?;
    }

    wtr.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        ledger.grand_total().to_string(),
    ])?;

    wtr.flush()?;
    info!(path = %path.display(), rows = ledger.food_count(), "exported entries");
    Ok(())
}
