use std::process::Command;

use record_mapper::model::UserDto;
use record_mapper::report::write_report;
use record_mapper::sample;

const EXPECTED: &str = "User ID: 1, Full Name: Alex Terrieur\n\
Adress Id: 1 , Full: Rue de la Paix, Paris, France 95000\n\
Adress Id: 2 , Full: Avenue des Champs-Élysées, Paris, France 95000\n";

#[test]
fn test_sample_report_lines() {
    let dto = UserDto::from(&sample::user());
    let mut buf = Vec::new();

    write_report(&mut buf, &dto).expect("Failed to write report");

    assert_eq!(String::from_utf8(buf).expect("Report is not UTF-8"), EXPECTED);
}

#[test]
fn test_sample_data_matches_scenario() {
    let user = sample::user();

    assert_eq!(user.id(), 1);
    assert_eq!(user.first_name(), "Alex");
    assert_eq!(user.last_name(), "Terrieur");
    assert_eq!(user.addresses(), sample::addresses().as_slice());
}

/// End-to-end: the compiled binary prints exactly the report on stdout.
#[test]
fn test_binary_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_record-mapper"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_binary_logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_record-mapper"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Starting record mapper"));
}
