use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn supplydesk() -> Command {
    Command::cargo_bin("supplydesk").unwrap()
}

#[test]
fn test_main_help_lists_namespaces() {
    supplydesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search, filter and maintain supplier records"))
        .stdout(predicate::str::contains("supplier"))
        .stdout(predicate::str::contains("analytics"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("--data-dir"));
}

#[test]
fn test_supplier_list_help_documents_filters() {
    supplydesk()
        .args(["supplier", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("--importance"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("reliability-desc"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_view_modes_are_exclusive() {
    supplydesk()
        .args(["supplier", "list", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_bad_status_value_is_rejected() {
    supplydesk()
        .args(["supplier", "list", "--status", "Dormant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status: 'Dormant'"));
}

#[test]
fn test_version_flag() {
    supplydesk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("supplydesk "));
}

#[test]
fn test_supplier_add_help_describes_trading_name() {
    supplydesk()
        .args(["supplier", "add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--trading-name"))
        .stdout(predicate::str::contains("kept alongside the company name"))
        .stdout(predicate::str::contains("shown when").not());
}
