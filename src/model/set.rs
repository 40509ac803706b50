//! Ordered in-memory collection of filter records.

use super::{FilterFields, FilterId, FilterKind, FilterRecord};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Insertion-ordered set of filters keyed by id.
///
/// All mutations keep the relative order of the untouched records, so the
/// list shown on the home view does not jump around after an edit or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    records: IndexMap<FilterId, FilterRecord>,
}

impl FilterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The filters a fresh session starts with.
    #[must_use]
    pub fn with_samples() -> Self {
        let samples = [
            FilterRecord::new(
                FilterId(1),
                FilterFields {
                    name: "Promociones".to_string(),
                    description: "Filtrar correos promocionales y ofertas".to_string(),
                    kind: FilterKind::Keyword,
                    criteria: "promoción, oferta, descuento".to_string(),
                    active: true,
                    auto_reply: false,
                    case_sensitive: None,
                },
            ),
            FilterRecord::new(
                FilterId(2),
                FilterFields {
                    name: "Trabajo importante".to_string(),
                    description: "Correos de jefe y gerencia".to_string(),
                    kind: FilterKind::Address,
                    criteria: "jefe@empresa.com, gerencia@empresa.com".to_string(),
                    active: true,
                    auto_reply: true,
                    case_sensitive: None,
                },
            ),
            FilterRecord::new(
                FilterId(3),
                FilterFields {
                    name: "Newsletter".to_string(),
                    description: "Boletines informativos".to_string(),
                    kind: FilterKind::Subject,
                    criteria: "newsletter, boletín".to_string(),
                    active: false,
                    auto_reply: false,
                    case_sensitive: None,
                },
            ),
        ];
        samples.into_iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: FilterId) -> bool {
        self.records.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: FilterId) -> Option<&FilterRecord> {
        self.records.get(&id)
    }

    /// Record at a display position.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&FilterRecord> {
        self.records.get_index(index).map(|(_, record)| record)
    }

    /// Display position of a record.
    #[must_use]
    pub fn position(&self, id: FilterId) -> Option<usize> {
        self.records.get_index_of(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = FilterId> + '_ {
        self.records.keys().copied()
    }

    /// Pick an id for a record created at `now`.
    ///
    /// Millisecond timestamps collide when two records are created within
    /// the same millisecond or the clock goes backwards, so the result is
    /// bumped past the largest id in the set.
    #[must_use]
    pub fn next_id(&self, now: DateTime<Utc>) -> FilterId {
        let stamp = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let floor = self
            .records
            .keys()
            .map(|id| id.0)
            .max()
            .map_or(0, |max| max.saturating_add(1));
        FilterId(stamp.max(floor))
    }

    /// Commit a draft as a new record at the end of the set.
    pub fn append(&mut self, fields: FilterFields, now: DateTime<Utc>) -> FilterId {
        let id = self.next_id(now);
        self.records.insert(id, FilterRecord::new(id, fields));
        id
    }

    /// Replace the record with the same id, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when no such record exists.
    pub fn replace(&mut self, record: FilterRecord) -> bool {
        match self.records.get_mut(&record.id) {
            Some(slot) => {
                *slot = FilterRecord::new(record.id, record.fields);
                true
            }
            None => false,
        }
    }

    /// Remove a record by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: FilterId) -> Option<FilterRecord> {
        self.records.shift_remove(&id)
    }
}

impl FromIterator<FilterRecord> for FilterSet {
    fn from_iter<I: IntoIterator<Item = FilterRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|record| (record.id, record)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterRecord;
    type IntoIter = indexmap::map::Values<'a, FilterId, FilterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().expect("valid timestamp")
    }

    fn draft(name: &str) -> FilterFields {
        FilterFields {
            name: name.to_string(),
            criteria: "x".to_string(),
            ..FilterFields::default()
        }
    }

    #[test]
    fn test_samples() {
        let set = FilterSet::with_samples();
        assert_eq!(set.len(), 3);
        let names: Vec<_> = set.iter().map(FilterRecord::name).collect();
        assert_eq!(names, vec!["Promociones", "Trabajo importante", "Newsletter"]);
        assert!(!set.get(FilterId(3)).expect("sample").is_active());
    }

    #[test]
    fn test_next_id_uses_timestamp() {
        let set = FilterSet::with_samples();
        assert_eq!(set.next_id(at(1_700_000_000_000)), FilterId(1_700_000_000_000));
    }

    #[test]
    fn test_next_id_bumps_on_collision() {
        let mut set = FilterSet::new();
        let now = at(5_000);
        let first = set.append(draft("a"), now);
        let second = set.append(draft("b"), now);
        assert_eq!(first, FilterId(5_000));
        assert_eq!(second, FilterId(5_001));

        // Clock going backwards still yields a fresh id
        let third = set.append(draft("c"), at(10));
        assert_eq!(third, FilterId(5_002));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut set = FilterSet::with_samples();
        let mut edited = set.get(FilterId(2)).cloned().expect("sample");
        edited.fields.name = "Jefatura".to_string();

        assert!(set.replace(edited));
        assert_eq!(set.position(FilterId(2)), Some(1));
        assert_eq!(set.get(FilterId(2)).map(FilterRecord::name), Some("Jefatura"));
    }

    #[test]
    fn test_replace_unknown_is_noop() {
        let mut set = FilterSet::with_samples();
        let before = set.clone();
        let stranger = FilterRecord::new(FilterId(99), draft("ghost"));
        assert!(!set.replace(stranger));
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut set = FilterSet::with_samples();
        let removed = set.remove(FilterId(1)).expect("present");
        assert_eq!(removed.name(), "Promociones");
        let ids: Vec<_> = set.ids().collect();
        assert_eq!(ids, vec![FilterId(2), FilterId(3)]);
        assert!(set.remove(FilterId(1)).is_none());
    }
}
