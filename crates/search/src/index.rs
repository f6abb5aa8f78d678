use data::dataset::Dataset;

/// At most this many suggestions per query.
pub const SUGGESTION_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub display_name: String,
}

/// Flat lookup from ZIP prefix or place name to records, for the fly-to
/// box. Built once per dataset; entries keep the dataset's layering
/// order so bigger places suggest first.
#[derive(Debug, Default)]
pub struct SearchIndex {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    id: String,
    name_lower: String,
    display_name: String,
}

impl SearchIndex {
    pub fn build(dataset: &Dataset) -> Self {
        let entries = dataset
            .records()
            .iter()
            .map(|r| Entry {
                id: r.id.clone(),
                name_lower: r.display_name.to_lowercase(),
                display_name: r.display_name.clone(),
            })
            .collect();
        Self { entries }
    }

    /// Typeahead suggestions. A short digit query matches id prefixes
    /// first, then name substrings fill the remaining slots; duplicates
    /// by id are dropped.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let mut out: Vec<Suggestion> = Vec::new();
        if is_zip_query(query) {
            for entry in &self.entries {
                if out.len() == SUGGESTION_LIMIT {
                    return out;
                }
                if entry.id.starts_with(query) {
                    out.push(entry.suggestion());
                }
            }
        }
        let needle = query.to_lowercase();
        for entry in &self.entries {
            if out.len() == SUGGESTION_LIMIT {
                break;
            }
            if entry.name_lower.contains(&needle) && !out.iter().any(|s| s.id == entry.id) {
                out.push(entry.suggestion());
            }
        }
        out
    }

    /// Resolves a committed query to a single record id: exact id match
    /// wins, then id prefix, then name substring.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        if let Some(entry) = self.entries.iter().find(|e| e.id == query) {
            return Some(&entry.id);
        }
        if is_zip_query(query) {
            if let Some(entry) = self.entries.iter().find(|e| e.id.starts_with(query)) {
                return Some(&entry.id);
            }
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name_lower.contains(&needle))
            .map(|e| e.id.as_str())
    }
}

impl Entry {
    fn suggestion(&self) -> Suggestion {
        Suggestion {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
        }
    }
}

fn is_zip_query(query: &str) -> bool {
    query.len() <= 5 && query.chars().all(|c| c.is_ascii_digit())
}
