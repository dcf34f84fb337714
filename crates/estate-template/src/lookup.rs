//! Person resolution for template rows

use estate_model::{Person, PersonId};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Denormalized person as the templates expect it
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPerson {
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub province: String,
    pub country: String,
    pub phone: String,
    pub relation: String,
}

impl ResolvedPerson {
    /// Placeholder used for dangling references: every field empty
    #[inline]
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Whether this is the placeholder
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.full_name.is_empty()
    }

    /// Template object with the renderer's field names
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "fullName": self.full_name,
            "firstName": self.first_name,
            "lastName": self.last_name,
            "city": self.city,
            "province": self.province,
            "country": self.country,
            "phone": self.phone,
            "relation": self.relation,
        })
    }
}

impl From<&Person> for ResolvedPerson {
    fn from(person: &Person) -> Self {
        Self {
            full_name: person.full_name(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            city: person.city.clone(),
            province: person.province.clone(),
            country: person.country.clone(),
            phone: person.phone.clone(),
            relation: person.relation.label().to_string(),
        }
    }
}

/// Id-indexed view over the people list
#[derive(Debug, Clone)]
pub struct PersonLookup<'a> {
    by_id: HashMap<PersonId, &'a Person>,
}

impl<'a> PersonLookup<'a> {
    /// Index a people list; on duplicate ids the first record wins
    #[must_use]
    pub fn new(people: &'a [Person]) -> Self {
        let mut by_id = HashMap::with_capacity(people.len());
        for person in people {
            by_id.entry(person.id).or_insert(person);
        }
        Self { by_id }
    }

    /// Raw record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&'a Person> {
        self.by_id.get(&id).copied()
    }

    /// Resolve an id; dangling ids yield the placeholder
    #[must_use]
    pub fn resolve(&self, id: PersonId) -> ResolvedPerson {
        match self.get(id) {
            Some(person) => ResolvedPerson::from(person),
            None => {
                tracing::debug!(person_id = %id, "dangling person reference");
                ResolvedPerson::placeholder()
            }
        }
    }

    /// Resolve an optional id; `None` yields the placeholder
    #[must_use]
    pub fn resolve_opt(&self, id: Option<PersonId>) -> ResolvedPerson {
        id.map_or_else(ResolvedPerson::placeholder, |id| self.resolve(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_model::Relation;

    #[test]
    fn resolves_known_people() {
        let people = vec![
            Person::new("Ada", "Lovelace", Relation::Friend).with_location("London", "", "UK"),
        ];
        let lookup = PersonLookup::new(&people);
        let resolved = lookup.resolve(people[0].id);
        assert_eq!(resolved.full_name, "Ada Lovelace");
        assert_eq!(resolved.relation, "Friend");
        assert_eq!(resolved.city, "London");
    }

    #[test]
    fn dangling_id_resolves_to_empty_name() {
        let lookup = PersonLookup::new(&[]);
        let resolved = lookup.resolve(PersonId::new());
        assert!(resolved.is_placeholder());
        assert_eq!(resolved.to_value()["fullName"], "");
        assert!(lookup.resolve_opt(None).is_placeholder());
    }
}
