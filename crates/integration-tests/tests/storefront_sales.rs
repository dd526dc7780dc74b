//! Integration tests for the sales ledger.
//!
//! These tests require a running storefront server; see the crate docs.

use tiendita_integration_tests::{base_url, client};
use uuid::Uuid;

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_recording_a_sale_appends_exactly_one_record() {
    let client = client();
    let base_url = base_url();
    let product = format!("Cono-{}", Uuid::new_v4());

    let before: Vec<serde_json::Value> = client
        .get(format!("{base_url}/ventas"))
        .send()
        .await
        .expect("Failed to list sales")
        .json()
        .await
        .expect("Failed to parse sales");

    let resp = client
        .post(format!("{base_url}/ventas"))
        .form(&[
            ("producto", product.as_str()),
            ("cantidad", "2"),
            ("precio", "2.5"),
        ])
        .send()
        .await
        .expect("Failed to record sale");
    assert!(resp.status().is_redirection());

    let after: Vec<serde_json::Value> = client
        .get(format!("{base_url}/ventas"))
        .send()
        .await
        .expect("Failed to list sales")
        .json()
        .await
        .expect("Failed to parse sales");

    assert_eq!(after.len(), before.len() + 1);

    // Prior records survive, in order, and the new one is last
    assert_eq!(after.get(..before.len()), Some(before.as_slice()));
    let last = after.last().expect("missing appended sale");
    assert_eq!(last["producto"], product.as_str());
    assert_eq!(last["cantidad"], 2);
}
