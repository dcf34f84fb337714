//! Will adapter
//!
//! Flattens the normalized will records into the variables the will
//! templates read. Every lookup is total: missing sections produce empty
//! strings, empty arrays or `false`.

use crate::data::{extend_object, TemplateData};
use crate::document::WillType;
use crate::lookup::PersonLookup;
use estate_model::{
    Bequest, DistributionShare, Executor, ExecutorRole, FuneralWish, MaritalStatus, RecordSet,
    TrustingEntry, WillData, WipeoutStrategy,
};
use serde_json::{json, Value};

/// Build will template data from a record set
#[must_use]
pub fn map_will(records: &RecordSet) -> TemplateData {
    let will = &records.will;
    let people = PersonLookup::new(&records.people);
    let mut data = TemplateData::new();

    data.insert("documentType", will.document_type.as_str());
    let will_type = records
        .document_type()
        .map_or(WillType::Primary, WillType::from);
    data.insert("willType", will_type.label());
    insert_testator(&mut data, will);
    insert_marital(&mut data, will, &people);

    let children: Vec<Value> = records
        .children()
        .map(|child| crate::lookup::ResolvedPerson::from(child).to_value())
        .collect();
    data.insert("hasChildren", !children.is_empty());
    data.insert("children", children);

    data.insert(
        "keyPeople",
        will.key_people
            .iter()
            .map(|id| people.resolve(*id).to_value())
            .collect::<Vec<_>>(),
    );
    insert_guardians(&mut data, will, &people);
    data.insert("pets", pet_rows(will, &people));
    data.insert("executors", executor_rows(&will.executors, &people));
    data.insert("table_dataBequest", bequest_rows(&will.bequests, records, &people));
    data.insert("residue", residue_value(will, &people));
    data.insert("trusting", trusting_value(&will.trusting, &people));
    data.insert("wipeout", wipeout_value(will, &people));
    insert_additional(&mut data, will);
    data
}

fn insert_testator(data: &mut TemplateData, will: &WillData) {
    let info = will.personal_info.clone().unwrap_or_default();
    data.insert("fullName", info.full_name());
    data.insert("firstName", info.first_name);
    data.insert("middleName", info.middle_name.unwrap_or_default());
    data.insert("lastName", info.last_name);
    data.insert("city", info.city);
    data.insert("province", info.province);
    data.insert("country", info.country);
    data.insert("phone", info.phone);
    data.insert("email", info.email.unwrap_or_default());
}

fn insert_marital(data: &mut TemplateData, will: &WillData, people: &PersonLookup<'_>) {
    let status = will.marital_status;
    data.insert("maritalStatus", status.map(|s| s.as_str()).unwrap_or_default());
    data.insert("isMarried", status == Some(MaritalStatus::Married));
    data.insert("isCommonRelationship", status == Some(MaritalStatus::CommonLaw));

    let has_spouse = status.is_some_and(|s| s.has_partner()) && will.spouse_id.is_some();
    data.insert("hasSpouse", has_spouse);
    data.insert("spouse", people.resolve_opt(will.spouse_id).to_value());
}

fn insert_guardians(data: &mut TemplateData, will: &WillData, people: &PersonLookup<'_>) {
    let mut guardians: Vec<_> = will.guardians.iter().collect();
    guardians.sort_by_key(|g| (g.is_alternate, g.position));

    let rows: Vec<Value> = guardians
        .iter()
        .map(|g| {
            extend_object(
                people.resolve(g.guardian_id).to_value(),
                [("isAlternate", json!(g.is_alternate))],
            )
        })
        .collect();

    let first_with = |alternate: bool| {
        let id = guardians
            .iter()
            .find(|g| g.is_alternate == alternate)
            .map(|g| g.guardian_id);
        people.resolve_opt(id).to_value()
    };
    data.insert("guardianPrimary", first_with(false));
    data.insert("guardianAlternate", first_with(true));
    data.insert("guardians", rows);
}

fn pet_rows(will: &WillData, people: &PersonLookup<'_>) -> Vec<Value> {
    will.pets
        .iter()
        .map(|pet| {
            json!({
                "name": pet.name,
                "species": pet.species,
                "guardian": people.resolve_opt(pet.guardian_id).to_value(),
                "careFunds": pet.care_funds.unwrap_or(0),
            })
        })
        .collect()
}

/// Document ordering of an executor: 0 primary, 1 alternate, then 2, 3, ...
/// for additional executors in list order
#[must_use]
pub fn executor_priorities(executors: &[Executor]) -> Vec<u32> {
    let mut next_additional = 2;
    executors
        .iter()
        .map(|executor| match executor.role {
            ExecutorRole::Primary => 0,
            ExecutorRole::Alternate => 1,
            ExecutorRole::Additional => {
                let priority = next_additional;
                next_additional += 1;
                priority
            }
        })
        .collect()
}

fn executor_rows(executors: &[Executor], people: &PersonLookup<'_>) -> Vec<Value> {
    let mut ranked: Vec<(u32, &Executor)> = executor_priorities(executors)
        .into_iter()
        .zip(executors)
        .collect();
    ranked.sort_by_key(|(priority, _)| *priority);
    ranked
        .into_iter()
        .map(|(priority, executor)| {
            extend_object(
                people.resolve(executor.person_id).to_value(),
                [("priority", json!(priority))],
            )
        })
        .collect()
}

/// One row per bequest share
///
/// Rows from a bequest with several shares carry the bequest id as
/// `shared_uuid` so the renderer can merge them visually.
fn bequest_rows(
    bequests: &[Bequest],
    records: &RecordSet,
    people: &PersonLookup<'_>,
) -> Vec<Value> {
    let mut rows = Vec::new();
    for bequest in bequests {
        let description = bequest
            .asset_id
            .and_then(|id| records.asset(id))
            .map(|asset| asset.description.clone())
            .or_else(|| bequest.description.clone())
            .unwrap_or_default();
        let shared = (bequest.shares.len() > 1).then(|| bequest.id.to_string());

        for share in &bequest.shares {
            let beneficiary = people.resolve(share.beneficiary_id);
            let mut row = json!({
                "description": description,
                "beneficiary": beneficiary.full_name,
                "relation": beneficiary.relation,
                "percentage": share.percentage,
                "predecease": share.predecease.as_str(),
            });
            if let Some(shared) = &shared {
                row = extend_object(row, [("shared_uuid", json!(shared))]);
            }
            rows.push(row);
        }
    }
    rows
}

fn share_rows(shares: &[DistributionShare], people: &PersonLookup<'_>) -> Vec<Value> {
    shares
        .iter()
        .map(|share| {
            extend_object(
                people.resolve(share.beneficiary_id).to_value(),
                [
                    ("percentage", json!(share.percentage)),
                    ("predecease", json!(share.predecease.as_str())),
                ],
            )
        })
        .collect()
}

fn residue_value(will: &WillData, people: &PersonLookup<'_>) -> Value {
    let residue = will.residue.clone().unwrap_or_default();
    json!({
        "toSpouseFirst": residue.to_spouse_first,
        "rows": share_rows(&residue.shares, people),
    })
}

/// Inheritance ages with the youngest and oldest age across all children
///
/// `min` and `max` are omitted entirely when there are no entries.
fn trusting_value(entries: &[TrustingEntry], people: &PersonLookup<'_>) -> Value {
    let rows: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "childName": people.resolve(entry.child_id).full_name,
                "age": entry.age,
            })
        })
        .collect();

    let mut value = json!({ "entries": rows });
    let min = entries.iter().map(|e| e.age).min();
    let max = entries.iter().map(|e| e.age).max();
    if let (Some(min), Some(max)) = (min, max) {
        value = extend_object(value, [("min", json!(min)), ("max", json!(max))]);
    }
    value
}

fn wipeout_value(will: &WillData, people: &PersonLookup<'_>) -> Value {
    let wipeout = will.wipeout.clone().unwrap_or_default();
    let strategy = match wipeout.strategy {
        WipeoutStrategy::Heirs => "heirs",
        WipeoutStrategy::Beneficiaries => "beneficiaries",
        WipeoutStrategy::Charity => "charity",
    };
    json!({
        "strategy": strategy,
        "charityName": wipeout.charity_name.unwrap_or_default(),
        "rows": share_rows(&wipeout.shares, people),
    })
}

fn insert_additional(data: &mut TemplateData, will: &WillData) {
    let additional = will.additional.clone().unwrap_or_default();
    let funeral = match additional.funeral {
        FuneralWish::Unspecified => "",
        FuneralWish::Burial => "burial",
        FuneralWish::Cremation => "cremation",
    };
    data.insert("funeralWish", funeral);
    data.insert("additionalNotes", additional.notes.unwrap_or_default());

    let details = will.final_details.clone().unwrap_or_default();
    data.insert("signingCity", details.signing_city.unwrap_or_default());
    data.insert(
        "signingDate",
        details.signing_date.map(|d| d.to_string()).unwrap_or_default(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor(role: ExecutorRole) -> Executor {
        Executor {
            person_id: estate_model::PersonId::new(),
            role,
        }
    }

    #[test]
    fn priorities_count_additional_executors_from_two() {
        let executors = vec![
            executor(ExecutorRole::Additional),
            executor(ExecutorRole::Primary),
            executor(ExecutorRole::Additional),
            executor(ExecutorRole::Alternate),
        ];
        assert_eq!(executor_priorities(&executors), vec![2, 0, 3, 1]);
    }

    #[test]
    fn trusting_without_entries_has_no_range() {
        let value = trusting_value(&[], &PersonLookup::new(&[]));
        assert!(value.get("min").is_none());
        assert!(value.get("max").is_none());
        assert_eq!(value["entries"], json!([]));
    }

    #[test]
    fn empty_records_map_to_safe_defaults() {
        let data = map_will(&RecordSet::default());
        assert_eq!(data.get_str("willType"), Some("PRIMARY"));
        assert_eq!(data.get_str("fullName"), Some(""));
        assert_eq!(data.get_bool("isMarried"), Some(false));
        assert_eq!(data.get_bool("hasSpouse"), Some(false));
        assert!(data.rows("table_dataBequest").is_empty());
        assert!(data.rows("executors").is_empty());
        assert_eq!(data.get("spouse").and_then(|s| s.get("fullName")), Some(&json!("")));
    }
}
