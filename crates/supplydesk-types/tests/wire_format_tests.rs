use supplydesk_types::{
    CategoryFilter, ImportanceLevel, SortKey, StatusFilter, Supplier, SupplierQuery,
    SupplierStatus,
};

#[test]
fn test_sort_keys_serialize_as_kebab_case() {
    let keys: Vec<String> = SortKey::ALL
        .iter()
        .map(|k| serde_json::to_string(k).unwrap())
        .collect();

    assert_eq!(
        keys,
        vec![
            "\"name-asc\"",
            "\"name-desc\"",
            "\"reliability-desc\"",
            "\"lead-asc\"",
            "\"status\""
        ]
    );

    for key in SortKey::ALL {
        assert_eq!(SortKey::parse_lenient(key.as_str()), key);
    }
}

#[test]
fn test_unknown_sort_key_deserializes_as_name_asc() {
    let key: SortKey = serde_json::from_str("\"price-desc\"").unwrap();
    assert_eq!(key, SortKey::NameAsc);

    let key: SortKey = serde_json::from_str("\"lead-asc\"").unwrap();
    assert_eq!(key, SortKey::LeadAsc);
}

#[test]
fn test_supplier_enums_use_display_names() {
    let supplier = Supplier {
        importance_level: Some(ImportanceLevel::Critical),
        status: Some(SupplierStatus::Inactive),
        ..Supplier::new(9)
    };

    let json = serde_json::to_value(&supplier).unwrap();
    assert_eq!(json["id"], 9);
    assert_eq!(json["importance_level"], "Critical");
    assert_eq!(json["status"], "Inactive");
    assert!(json["delivery_day"].is_null());
}

#[test]
fn test_query_survives_json() {
    let query = SupplierQuery::new()
        .with_search("acme")
        .with_status(StatusFilter::Active)
        .with_category("Dairy")
        .with_sort(SortKey::LeadAsc)
        .with_page(2);

    let json = serde_json::to_string(&query).unwrap();
    let back: SupplierQuery = serde_json::from_str(&json).unwrap();

    assert_eq!(back, query);
    assert_eq!(back.category, CategoryFilter::Tag("Dairy".to_string()));
    assert_eq!(back.page, 2);
}
