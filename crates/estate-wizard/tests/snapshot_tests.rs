//! End-to-end tests: records in, wizard state out.

use estate_model::{MaritalStatus, Pet};
use estate_test_utils::{adult_child, fixture_today, married_family, RecordsBuilder};
use estate_wizard::{Category, CursorPosition, WizardConfig, WizardContext, WizardSnapshot};
use pretty_assertions::assert_eq;

#[test]
fn married_family_with_minor_children_sees_expected_steps() {
    let records = married_family();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());

    assert_eq!(
        snapshot.context,
        WizardContext {
            marital_status: Some(MaritalStatus::Married),
            has_children: true,
            has_minor_children: true,
            has_pets: false,
            has_assets: true,
        }
    );
    assert_eq!(
        snapshot.visible.ids(),
        vec![
            "personal-info",
            "family-status",
            "spouse-info",
            "children",
            "key-people",
            "guardians",
            "assets",
            "bequests",
            "residue",
            "inheritance",
            "executors",
            "wipeout",
            "additional",
            "final-details",
            "review",
        ]
    );
    assert!(!snapshot.visible.contains("pet-guardians"));
}

#[test]
fn pets_reveal_pet_guardians() {
    let records = RecordsBuilder::will()
        .with_will(|will| {
            will.pets.push(Pet {
                name: "Biscuit".into(),
                species: "cat".into(),
                ..Pet::default()
            });
        })
        .build();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());
    assert!(snapshot.visible.contains("pet-guardians"));
}

#[test]
fn removing_spouse_while_on_spouse_step_falls_back() {
    let records = RecordsBuilder::will()
        .marital_status(MaritalStatus::Single)
        .completed("personal-info")
        .completed("familyStatus")
        .build();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());

    let cursor = snapshot.cursor("spouse-info");
    assert_eq!(
        cursor.position(),
        &CursorPosition::Fallback {
            requested: "spouse-info".to_string()
        }
    );
    assert_eq!(cursor.current().map(|s| s.id), Some("children"));
}

#[test]
fn entry_cursor_starts_at_first_incomplete() {
    let records = RecordsBuilder::will()
        .completed("personal-info")
        .build();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());
    assert_eq!(snapshot.entry_cursor().current().map(|s| s.id), Some("family-status"));
}

#[test]
fn categories_report_progress() {
    let records = RecordsBuilder::will()
        .completed("personal-info")
        .completed("family-status")
        .completed("children")
        .build();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());
    let groups = snapshot.categories();

    let summary: Vec<_> = groups
        .iter()
        .map(|g| (g.category, g.completed_count, g.total()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Category::AboutYou, 2, 2),
            (Category::People, 1, 2),
            (Category::Assets, 0, 2),
            (Category::Arrangements, 0, 3),
            (Category::Review, 0, 2),
        ]
    );
}

#[test]
fn nineteen_majority_province_keeps_guardians() {
    let records = RecordsBuilder::will()
        .person(adult_child("Casey").with_date_of_birth(estate_test_utils::date(2006, 1, 1)))
        .build();

    let ontario = WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());
    assert!(!ontario.visible.contains("guardians"));

    let bc = WizardSnapshot::from_records(
        &records,
        fixture_today(),
        &WizardConfig::default().with_age_of_majority(19),
    );
    assert!(bc.visible.contains("guardians"));
}

#[test]
fn unknown_document_type_gives_empty_wizard() {
    let records = RecordsBuilder::new("codicil").build();
    let snapshot =
        WizardSnapshot::from_records(&records, fixture_today(), &WizardConfig::default());
    assert!(snapshot.visible.is_empty());
    assert!(snapshot.categories().is_empty());
    assert_eq!(snapshot.entry_cursor().position(), &CursorPosition::Empty);
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wizard.toml");
    std::fs::write(&path, "age_of_majority = 19\n").unwrap();
    let config = WizardConfig::load(&path).unwrap();
    assert_eq!(config.age_of_majority, 19);
}
