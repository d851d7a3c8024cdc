use crate::domain::model::InquiryRecord;

/// Append-only, insertion-ordered record of the session's inquiries.
#[derive(Debug, Default, Clone)]
pub struct InquiryStore {
    records: Vec<InquiryRecord>,
}

impl InquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its position.
    pub fn append(&mut self, record: InquiryRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn records(&self) -> &[InquiryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cost: f64) -> InquiryRecord {
        InquiryRecord {
            cost,
            cost_per_serving: cost,
            sandwich_inches: 3.0,
            servings: 1.0,
        }
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = InquiryStore::new();
        assert!(store.is_empty());

        assert_eq!(store.append(record(1.0)), 0);
        assert_eq!(store.append(record(2.0)), 1);
        assert_eq!(store.append(record(3.0)), 2);

        let costs: Vec<f64> = store.records().iter().map(|r| r.cost).collect();
        assert_eq!(costs, vec![1.0, 2.0, 3.0]);
        assert_eq!(store.len(), 3);
    }
}
