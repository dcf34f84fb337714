//! Testing utilities for the estate wizard workspace
//!
//! Shared fixtures and record builders.

#![allow(missing_docs)]

use chrono::NaiveDate;
use estate_model::{
    Asset, AssetKind, Bequest, Executor, ExecutorRole, Guardian, MaritalStatus, Person,
    PersonalInfo, RecordSet, Relation, TrustingEntry, WillData,
};

/// Fixed "today" used by fixtures so ages never drift
pub fn fixture_today() -> NaiveDate {
    date(2024, 6, 1)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

pub fn testator() -> PersonalInfo {
    PersonalInfo {
        first_name: "Jordan".to_string(),
        middle_name: Some("Lee".to_string()),
        last_name: "Tremblay".to_string(),
        date_of_birth: Some(date(1980, 3, 14)),
        city: "Ottawa".to_string(),
        province: "ON".to_string(),
        country: "Canada".to_string(),
        phone: "613-555-0100".to_string(),
        email: Some("jordan@example.com".to_string()),
    }
}

pub fn person(first: &str, last: &str, relation: Relation) -> Person {
    Person::new(first, last, relation).with_location("Ottawa", "ON", "Canada")
}

pub fn minor_child(first: &str) -> Person {
    person(first, "Tremblay", Relation::Child).with_date_of_birth(date(2015, 9, 1))
}

pub fn adult_child(first: &str) -> Person {
    person(first, "Tremblay", Relation::Child).with_date_of_birth(date(1998, 2, 1))
}

/// Builder over a [`RecordSet`] for readable test setup
#[derive(Debug, Clone)]
pub struct RecordsBuilder {
    records: RecordSet,
}

impl RecordsBuilder {
    pub fn new(document_type: &str) -> Self {
        let mut will = WillData::new(document_type);
        will.personal_info = Some(testator());
        Self {
            records: RecordSet::new(will, Vec::new(), Vec::new()),
        }
    }

    pub fn will() -> Self {
        Self::new("primaryWill")
    }

    pub fn marital_status(mut self, status: MaritalStatus) -> Self {
        self.records.will.marital_status = Some(status);
        self
    }

    pub fn spouse(mut self, spouse: Person) -> Self {
        self.records.will.spouse_id = Some(spouse.id);
        self.records.people.push(spouse);
        self
    }

    pub fn person(mut self, person: Person) -> Self {
        self.records.people.push(person);
        self
    }

    pub fn asset(mut self, asset: Asset) -> Self {
        self.records.assets.push(asset);
        self
    }

    pub fn bequest(mut self, bequest: Bequest) -> Self {
        self.records.will.bequests.push(bequest);
        self
    }

    pub fn executor(mut self, person_id: estate_model::PersonId, role: ExecutorRole) -> Self {
        self.records.will.executors.push(Executor { person_id, role });
        self
    }

    pub fn guardian(mut self, guardian_id: estate_model::PersonId, is_alternate: bool) -> Self {
        let position = u32::try_from(self.records.will.guardians.len()).unwrap_or(u32::MAX);
        self.records.will.guardians.push(Guardian {
            guardian_id,
            is_alternate,
            position,
        });
        self
    }

    pub fn trusting(mut self, child_id: estate_model::PersonId, age: u8) -> Self {
        self.records.will.trusting.push(TrustingEntry { child_id, age });
        self
    }

    pub fn completed(mut self, step: &str) -> Self {
        self.records.will.completed_steps.insert(step.to_string());
        self
    }

    pub fn with_will(mut self, edit: impl FnOnce(&mut WillData)) -> Self {
        edit(&mut self.records.will);
        self
    }

    pub fn build(self) -> RecordSet {
        self.records
    }
}

/// Married testator with two minor children, a house, and a spouse executor
pub fn married_family() -> RecordSet {
    let spouse = person("Alex", "Tremblay", Relation::Spouse);
    let sam = minor_child("Sam");
    let riley = minor_child("Riley");
    let sister = person("Morgan", "Gagnon", Relation::Sibling);
    let house = Asset::new(AssetKind::RealEstate, "Family home at 12 Elm St");

    let bequest = Bequest::of_asset(house.id)
        .with_share(spouse.id, 50.0)
        .with_share(sam.id, 25.0)
        .with_share(riley.id, 25.0);

    RecordsBuilder::will()
        .marital_status(MaritalStatus::Married)
        .executor(spouse.id, ExecutorRole::Primary)
        .executor(sister.id, ExecutorRole::Alternate)
        .guardian(sister.id, false)
        .trusting(sam.id, 25)
        .trusting(riley.id, 21)
        .spouse(spouse)
        .person(sam)
        .person(riley)
        .person(sister)
        .asset(house)
        .bequest(bequest)
        .build()
}
