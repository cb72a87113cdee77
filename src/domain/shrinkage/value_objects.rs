use std::fmt;

/// Non-empty, ordered set of branch (sucursal) identifiers
///
/// # Invariants
/// - Contains at least one identifier
/// - Every identifier is trimmed and non-empty
/// - Duplicates are dropped, first occurrence wins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchIds(Vec<String>);

impl BranchIds {
    /// Builds a branch set from individual identifiers
    ///
    /// # Example
    /// ```
    /// use merma_api::domain::shrinkage::BranchIds;
    ///
    /// let ids = BranchIds::new(vec!["S01".to_string(), "S02".to_string()]).expect("valid ids");
    /// assert_eq!(ids.as_slice(), &["S01", "S02"]);
    /// ```
    pub fn new<I, S>(ids: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            let id = id.as_ref().trim();
            if id.is_empty() {
                continue;
            }
            if !out.iter().any(|existing| existing == id) {
                out.push(id.to_string());
            }
        }

        if out.is_empty() {
            return Err("At least one branch identifier is required".to_string());
        }

        Ok(BranchIds(out))
    }

    /// Parses a comma separated list such as `"S01,S02"`
    pub fn parse(raw: &str) -> Result<Self, String> {
        Self::new(raw.split(','))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a successfully constructed value
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|existing| existing == id)
    }
}

impl fmt::Display for BranchIds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
