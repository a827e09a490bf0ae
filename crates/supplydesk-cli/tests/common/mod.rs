#![allow(dead_code)]

use anyhow::Result;
use supplydesk_testing::TestWorld;

pub const GROCERY_CSV: &str = "\
SupplierCode,Name,CompanyName,ContactPerson,Email,Phone,Category,PaymentTerms,Priority,Status,LeadTime
SUP-100001,,Lanka Dairy,Nimal Perera,orders@lanka.example,+94 11 234 5678,\"Dairy, Frozen\",30 days,Critical,Active,2
SUP-100002,,Green Leaf Farms,Ayesha Fernando,,,\"Vegetables, Fruits\",Cash,Preferred,Active,1
SUP-100003,,Harbor Seafood,,,,Seafood,,Normal,Inactive,4
SUP-100004,Crumb,Crumb & Co Bakery,,,,\"Bakery, Snacks\",,,Active,3
SUP-100005,,Island Beverages,,,0771234567,Beverages,,Normal,Active,7
";

/// Initialized workspace holding the five grocery suppliers.
pub fn grocery_world() -> Result<TestWorld> {
    let world = TestWorld::new();
    world.run_json(&["init"])?;

    let path = world.write_file("grocery.csv", GROCERY_CSV)?;
    let path = path.to_string_lossy().to_string();
    world.run_json(&["import", "csv", &path])?;

    Ok(world)
}

/// Initialized workspace holding `n` Active suppliers "Supplier 01".. in id order.
pub fn numbered_world(n: usize) -> Result<TestWorld> {
    let world = TestWorld::new();
    world.run_json(&["init"])?;

    let mut csv = String::from("CompanyName,Status\n");
    for i in 1..=n {
        csv.push_str(&format!("Supplier {:02},Active\n", i));
    }
    let path = world.write_file("numbered.csv", &csv)?;
    let path = path.to_string_lossy().to_string();
    world.run_json(&["import", "csv", &path])?;

    Ok(world)
}
