//! Power-of-attorney adapters

use crate::data::{extend_object, TemplateData};
use crate::lookup::PersonLookup;
use estate_model::{AttorneyRole, PoaData, RecordSet};
use serde_json::json;

/// Build power-of-attorney-for-property template data
#[must_use]
pub fn map_poa_property(records: &RecordSet) -> TemplateData {
    let mut data = map_poa_common(records);
    data.insert("documentTitle", "Continuing Power of Attorney for Property");
    data
}

/// Build power-of-attorney-for-personal-care template data
#[must_use]
pub fn map_poa_care(records: &RecordSet) -> TemplateData {
    let mut data = map_poa_common(records);
    data.insert("documentTitle", "Power of Attorney for Personal Care");
    let wishes = records
        .will
        .poa
        .as_ref()
        .and_then(|poa| poa.care_wishes.clone())
        .unwrap_or_default();
    data.insert("careWishes", wishes);
    data
}

fn map_poa_common(records: &RecordSet) -> TemplateData {
    let will = &records.will;
    let people = PersonLookup::new(&records.people);
    let poa = will.poa.clone().unwrap_or_default();
    let mut data = TemplateData::new();

    data.insert("documentType", will.document_type.as_str());

    let info = will.personal_info.clone().unwrap_or_default();
    data.insert("principalName", info.full_name());
    data.insert("city", info.city);
    data.insert("province", info.province);
    data.insert("country", info.country);

    let first = |role: AttorneyRole| {
        people
            .resolve_opt(poa.attorneys_with_role(role).next().map(|a| a.person_id))
            .to_value()
    };
    data.insert("attorneyOne", first(AttorneyRole::Primary));
    data.insert("attorneyTwo", first(AttorneyRole::Joint));
    data.insert("alternateAttorney", first(AttorneyRole::Alternate));

    let has_joint = poa.attorneys_with_role(AttorneyRole::Joint).next().is_some();
    data.insert("hasJointAttorney", has_joint);
    data.insert("actJointly", has_joint && poa.act_jointly);

    data.insert("attorneys", attorney_rows(&poa, &people));
    data.insert("restrictions", poa.restrictions.clone().unwrap_or_default());
    data.insert("isEffectiveImmediately", poa.effective_immediately);
    data
}

fn attorney_rows(poa: &PoaData, people: &PersonLookup<'_>) -> Vec<serde_json::Value> {
    poa.attorneys
        .iter()
        .map(|attorney| {
            let role = match attorney.role {
                AttorneyRole::Primary => "primary",
                AttorneyRole::Joint => "joint",
                AttorneyRole::Alternate => "alternate",
            };
            extend_object(people.resolve(attorney.person_id).to_value(), [("role", json!(role))])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_model::{Attorney, Person, PersonId, Relation, WillData};

    fn poa_records(
        document_type: &str,
        attorneys: Vec<Attorney>,
        people: Vec<Person>,
    ) -> RecordSet {
        let mut will = WillData::new(document_type);
        will.poa = Some(PoaData {
            attorneys,
            act_jointly: true,
            restrictions: Some("No sale of the cottage".to_string()),
            effective_immediately: false,
            care_wishes: Some("Remain at home".to_string()),
        });
        RecordSet::new(will, people, Vec::new())
    }

    #[test]
    fn attorneys_fill_numbered_slots() {
        let one = Person::new("Pat", "One", Relation::Sibling);
        let two = Person::new("Lee", "Two", Relation::Friend);
        let records = poa_records(
            "poaProperty",
            vec![
                Attorney {
                    person_id: two.id,
                    role: AttorneyRole::Joint,
                },
                Attorney {
                    person_id: one.id,
                    role: AttorneyRole::Primary,
                },
            ],
            vec![one, two],
        );
        let data = map_poa_property(&records);

        assert_eq!(data.get("attorneyOne").unwrap()["fullName"], "Pat One");
        assert_eq!(data.get("attorneyTwo").unwrap()["fullName"], "Lee Two");
        assert_eq!(data.get("alternateAttorney").unwrap()["fullName"], "");
        assert_eq!(data.get_bool("actJointly"), Some(true));
        assert_eq!(data.rows("attorneys").len(), 2);
        assert!(!data.contains_key("careWishes"));
    }

    #[test]
    fn single_attorney_never_acts_jointly() {
        let only = Person::new("Sole", "Agent", Relation::Friend);
        let records = poa_records(
            "poaCare",
            vec![Attorney {
                person_id: only.id,
                role: AttorneyRole::Primary,
            }],
            vec![only],
        );
        let data = map_poa_care(&records);
        assert_eq!(data.get_bool("actJointly"), Some(false));
        assert_eq!(data.get_str("careWishes"), Some("Remain at home"));
    }

    #[test]
    fn dangling_attorney_is_placeholder() {
        let records = poa_records(
            "poaProperty",
            vec![Attorney {
                person_id: PersonId::new(),
                role: AttorneyRole::Primary,
            }],
            Vec::new(),
        );
        let data = map_poa_property(&records);
        assert_eq!(data.get("attorneyOne").unwrap()["fullName"], "");
    }
}
