use std::io;

use record_mapper::error::ReportError;
use record_mapper::model::UserDto;
use record_mapper::report::write_report;
use record_mapper::runtime::setup_tracing;
use record_mapper::sample;
use tracing::info;

fn main() -> Result<(), ReportError> {
    setup_tracing();

    info!("Starting record mapper");

    let user = sample::user();
    let dto = UserDto::from(&user);

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &dto)?;

    info!(user_id = dto.id(), "Report written");
    Ok(())
}
