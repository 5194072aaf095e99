mod file;
mod rows;

#[cfg(windows)]
mod com;
#[cfg(windows)]
mod live;

pub use file::FileAppender;
pub use rows::next_free_row;

#[cfg(windows)]
pub use com::ComGuard;
#[cfg(windows)]
pub use live::LiveAppender;

use snapsheet_core::error::Error;
use snapsheet_core::traits::RowAppender;
use snapsheet_types::AppendStrategy;
use std::path::Path;

/// Build the appender the configuration asks for.
pub fn build_appender(
    strategy: AppendStrategy,
    workbook: &Path,
    sheet: &str,
) -> Result<Box<dyn RowAppender>, Error> {
    match strategy {
        AppendStrategy::File => Ok(Box::new(FileAppender::new(workbook, sheet))),
        #[cfg(windows)]
        AppendStrategy::Live => Ok(Box::new(LiveAppender::new(workbook, sheet))),
        #[cfg(not(windows))]
        AppendStrategy::Live => Err(Error::Unsupported("live workbook automation")),
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn live_strategy_is_rejected_off_windows() {
        let result = build_appender(
            AppendStrategy::Live,
            Path::new("ExcelTabelleOCR.xlsx"),
            "Daten",
        );
        assert!(matches!(result, Err(Error::Unsupported(_))));
    }
}
