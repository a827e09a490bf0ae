use supplydesk_runtime::{Config, DeskConfig, Error, Workspace};
use supplydesk_types::{SortKey, SupplierDraft, SupplierQuery};
use tempfile::TempDir;

#[test]
fn test_open_requires_init() {
    let temp_dir = TempDir::new().unwrap();

    let result = Workspace::open(temp_dir.path());
    assert!(matches!(result, Err(Error::NotInitialized(_))));
}

#[test]
fn test_init_is_repeatable_and_keeps_data() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("desk");

    let first = Workspace::init(&data_dir).unwrap();
    assert!(first.config_created);
    assert_eq!(first.supplier_count, 0);

    {
        let workspace = Workspace::open(&data_dir).unwrap();
        let mut desk = workspace.desk().unwrap();
        desk.create(SupplierDraft::new("Lanka Dairy")).unwrap();
    }

    let second = Workspace::init(&data_dir).unwrap();
    assert!(!second.config_created);
    assert_eq!(second.supplier_count, 1);
}

#[test]
fn test_config_operator_is_recorded_on_writes() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path();

    Workspace::init(data_dir).unwrap();
    Config {
        desk: DeskConfig {
            operator: "night-shift".to_string(),
            default_sort: SortKey::LeadAsc,
        },
    }
    .save_to(&data_dir.join("config.toml"))
    .unwrap();

    let workspace = Workspace::open(data_dir).unwrap();
    assert_eq!(workspace.config().desk.default_sort, SortKey::LeadAsc);

    let mut desk = workspace.desk().unwrap();
    let created = desk.create(SupplierDraft::new("Green Leaf")).unwrap();
    desk.deactivate(created.id).unwrap();

    let stored = desk.find(created.id).unwrap();
    assert_eq!(stored.updated_by.as_deref(), Some("night-shift"));

    let listing = desk.listing(&SupplierQuery::new());
    assert_eq!(listing.total_count, 1);
}
