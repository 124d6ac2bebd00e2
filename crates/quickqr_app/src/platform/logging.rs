//! Platform logging initialization for quickqr.
//!
//! The terminal belongs to the UI, so log lines go to the file named in the
//! settings (`./quickqr.log` by default).

use super::settings::Settings;

pub fn initialize(settings: &Settings) {
    quickqr_logging::initialize(&settings.log_file, settings.log_level());
}
