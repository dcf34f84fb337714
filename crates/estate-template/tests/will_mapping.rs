//! Will adapter behaviour over realistic record sets.

use estate_model::{Asset, AssetKind, Bequest, ExecutorRole, MaritalStatus, PersonId, Relation};
use estate_template::{map_records, map_will};
use estate_test_utils::{married_family, person, RecordsBuilder};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn three_share_bequest_expands_to_three_rows_with_one_shared_uuid() {
    let records = married_family();
    let data = map_will(&records);
    let rows = data.rows("table_dataBequest");

    assert_eq!(rows.len(), 3);
    let uuid = rows[0]["shared_uuid"].as_str().unwrap().to_string();
    assert_eq!(uuid, records.will.bequests[0].id.to_string());
    for row in rows {
        assert_eq!(row["shared_uuid"], json!(uuid));
        assert_eq!(row["description"], "Family home at 12 Elm St");
    }
    let total: f64 = rows.iter().map(|r| r["percentage"].as_f64().unwrap()).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn single_share_bequest_has_no_shared_uuid() {
    let heir = person("Quinn", "Tremblay", Relation::Child);
    let car = Asset::new(AssetKind::Vehicle, "2019 hatchback");
    let records = RecordsBuilder::will()
        .bequest(Bequest::of_asset(car.id).with_share(heir.id, 100.0))
        .person(heir)
        .asset(car)
        .build();

    let data = map_will(&records);
    let rows = data.rows("table_dataBequest");
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("shared_uuid").is_none());
    assert_eq!(rows[0]["beneficiary"], "Quinn Tremblay");
    assert_eq!(rows[0]["predecease"], "per_stirpes");
}

#[test]
fn bequest_without_asset_uses_its_own_description() {
    let heir = person("Quinn", "Tremblay", Relation::Child);
    let mut gift = Bequest::of_asset(estate_model::AssetId::new()).with_share(heir.id, 100.0);
    gift.description = Some("Grandfather's watch".to_string());
    let records = RecordsBuilder::will().bequest(gift).person(heir).build();

    let data = map_will(&records);
    assert_eq!(data.rows("table_dataBequest")[0]["description"], "Grandfather's watch");
}

#[test]
fn dangling_beneficiary_resolves_to_empty_name() {
    let house = Asset::new(AssetKind::RealEstate, "Cottage");
    let records = RecordsBuilder::will()
        .bequest(Bequest::of_asset(house.id).with_share(PersonId::new(), 100.0))
        .asset(house)
        .executor(PersonId::new(), ExecutorRole::Primary)
        .build();

    let data = map_will(&records);
    assert_eq!(data.rows("table_dataBequest")[0]["beneficiary"], "");
    assert_eq!(data.rows("executors")[0]["fullName"], "");
}

#[test]
fn executors_sorted_by_priority() {
    let a = person("Avery", "One", Relation::Friend);
    let b = person("Blake", "Two", Relation::Sibling);
    let c = person("Cam", "Three", Relation::Parent);
    let records = RecordsBuilder::will()
        .executor(c.id, ExecutorRole::Additional)
        .executor(b.id, ExecutorRole::Alternate)
        .executor(a.id, ExecutorRole::Primary)
        .person(a)
        .person(b)
        .person(c)
        .build();

    let data = map_will(&records);
    let order: Vec<(Value, Value)> = data
        .rows("executors")
        .iter()
        .map(|r| (r["fullName"].clone(), r["priority"].clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            (json!("Avery One"), json!(0)),
            (json!("Blake Two"), json!(1)),
            (json!("Cam Three"), json!(2)),
        ]
    );
}

#[test]
fn trusting_range_spans_all_children() {
    let data = map_will(&married_family());
    let trusting = data.get("trusting").unwrap();
    assert_eq!(trusting["min"], 21);
    assert_eq!(trusting["max"], 25);
    assert_eq!(trusting["entries"].as_array().unwrap().len(), 2);
}

#[test]
fn trusting_range_absent_without_entries() {
    let data = map_will(&RecordsBuilder::will().build());
    let trusting = data.get("trusting").unwrap();
    assert!(trusting.get("min").is_none());
    assert!(trusting.get("max").is_none());
}

#[test]
fn marital_flags_and_spouse() {
    let data = map_will(&married_family());
    assert_eq!(data.get_bool("isMarried"), Some(true));
    assert_eq!(data.get_bool("isCommonRelationship"), Some(false));
    assert_eq!(data.get_bool("hasSpouse"), Some(true));
    assert_eq!(data.get("spouse").unwrap()["fullName"], "Alex Tremblay");
    assert_eq!(data.get_str("willType"), Some("PRIMARY"));

    let common = map_will(
        &RecordsBuilder::will()
            .marital_status(MaritalStatus::CommonLaw)
            .build(),
    );
    assert_eq!(common.get_bool("isMarried"), Some(false));
    assert_eq!(common.get_bool("isCommonRelationship"), Some(true));
}

#[test]
fn will_type_follows_document_type() {
    let spousal = map_records(&RecordsBuilder::new("spousalWill").build());
    assert_eq!(spousal.get_str("willType"), Some("SPOUSAL"));

    let secondary = map_records(&RecordsBuilder::new("secondaryWill").build());
    assert_eq!(secondary.get_str("willType"), Some("SECONDARY"));

    let unknown = map_records(&RecordsBuilder::new("mysteryDocument").build());
    assert_eq!(unknown.get_str("willType"), Some("PRIMARY"));
}

#[test]
fn short_and_padded_will_types_keep_their_label() {
    for (stored, label) in [
        ("spousal", "SPOUSAL"),
        (" spousalWill", "SPOUSAL"),
        ("secondary", "SECONDARY"),
        ("primary", "PRIMARY"),
    ] {
        let records = RecordsBuilder::new(stored).build();
        assert!(records.document_type().is_some(), "{stored:?} should parse");
        let data = map_records(&records);
        assert_eq!(data.get_str("willType"), Some(label), "{stored:?}");
        assert_eq!(data.get_str("documentType"), Some(stored));
    }
}

#[test]
fn testator_and_guardians_are_flattened() {
    let data = map_will(&married_family());
    assert_eq!(data.get_str("fullName"), Some("Jordan Lee Tremblay"));
    assert_eq!(data.get_str("province"), Some("ON"));
    assert_eq!(data.get("guardianPrimary").unwrap()["fullName"], "Morgan Gagnon");
    assert_eq!(data.get("guardianAlternate").unwrap()["fullName"], "");
    assert_eq!(data.rows("children").len(), 2);
}

#[test]
fn poa_document_dispatches_to_poa_adapter() {
    let data = map_records(&RecordsBuilder::new("poaProperty").build());
    assert!(data.contains_key("attorneyOne"));
    assert!(!data.contains_key("table_dataBequest"));
}

proptest! {
    #[test]
    fn prop_bequest_rows_match_share_count(share_count in 0usize..6) {
        let house = Asset::new(AssetKind::RealEstate, "House");
        let mut bequest = Bequest::of_asset(house.id);
        for _ in 0..share_count {
            bequest = bequest.with_share(PersonId::new(), 100.0 / share_count as f64);
        }
        let records = RecordsBuilder::will().bequest(bequest).asset(house).build();

        let data = map_will(&records);
        let rows = data.rows("table_dataBequest");
        prop_assert_eq!(rows.len(), share_count);
        for row in rows {
            prop_assert_eq!(row.get("shared_uuid").is_some(), share_count > 1);
        }
    }
}
