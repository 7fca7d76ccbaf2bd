// Survey commands, rendered to strings.
//
// Each command calls into `galaxy_gen` and formats the result as either a
// text report or pretty JSON. `main.rs` only parses arguments and prints.

use crate::config::OutputFormat;
use crate::error::{SurveyError, SurveyResult};
use galaxy_gen::{Coordinate, GenerationMode, Region, Sector, generate_with_mode, scan_region};

/// Generate one sector in `mode` and render it.
pub fn survey_sector(
    coordinate: Coordinate,
    mode: GenerationMode,
    format: OutputFormat,
) -> SurveyResult<String> {
    let sector = Sector {
        coordinate,
        system: generate_with_mode(coordinate, mode),
    };
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&sector)?),
        OutputFormat::Text => Ok(format!("Sector {}\n{}", sector.coordinate, sector.system)),
    }
}

/// Reject empty windows and windows over `max_cells`.
pub fn validate_region(region: &Region, max_cells: u64) -> SurveyResult<()> {
    if region.width == 0 || region.height == 0 {
        return Err(SurveyError::InvalidRegion(format!(
            "{}x{} window is empty",
            region.width, region.height
        )));
    }
    if region.cell_count() > max_cells {
        return Err(SurveyError::InvalidRegion(format!(
            "{}x{} window exceeds the limit of {max_cells} sectors",
            region.width, region.height
        )));
    }
    Ok(())
}

/// Scan a window and render the occupied sectors.
pub fn survey_region(
    region: &Region,
    max_cells: u64,
    format: OutputFormat,
) -> SurveyResult<String> {
    validate_region(region, max_cells)?;
    let found = scan_region(region);
    log::info!(
        "{} stars in {}x{} window at {}",
        found.len(),
        region.width,
        region.height,
        region.origin
    );

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&found)?),
        OutputFormat::Text => {
            let mut out = format!(
                "{} stars in {}x{} sectors from {}",
                found.len(),
                region.width,
                region.height,
                region.origin
            );
            for sector in &found {
                if let Some(star) = sector.system.star() {
                    out.push_str(&format!(
                        "\n{}  diameter {:.2}  {}",
                        sector.coordinate,
                        star.diameter(),
                        star.color()
                    ));
                }
            }
            Ok(out)
        }
    }
}
