use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use super::Bucket;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PreferenceSetError {
    #[error("At least one option must be selected.")]
    Empty,
    #[error("'Any' cannot be combined with specific options.")]
    MixedWildcard,
}

/// The selected buckets on one filter axis.
///
/// Never empty, and either exactly `{ANY}` or only concrete buckets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreferenceSet<T: Bucket>(BTreeSet<T>);

impl<T: Bucket> PreferenceSet<T> {
    pub fn any() -> Self {
        Self(BTreeSet::from([T::ANY]))
    }

    pub fn parse(values: impl IntoIterator<Item = T>) -> Result<Self, PreferenceSetError> {
        let values: BTreeSet<T> = values.into_iter().collect();

        if values.is_empty() {
            return Err(PreferenceSetError::Empty);
        }
        if values.len() > 1 && values.contains(&T::ANY) {
            return Err(PreferenceSetError::MixedWildcard);
        }
        Ok(Self(values))
    }

    /// The next selection after the user clicks `value`.
    ///
    /// Picking `ANY` clears everything else, picking a concrete bucket drops
    /// `ANY`, and un-picking the last concrete bucket falls back to `ANY`.
    pub fn toggle(&self, value: T) -> Self {
        if value.is_any() {
            return Self::any();
        }

        let mut next = self.0.clone();
        if !next.remove(&value) {
            next.remove(&T::ANY);
            next.insert(value);
        }

        if next.is_empty() {
            Self::any()
        } else {
            Self(next)
        }
    }

    pub fn is_any(&self) -> bool {
        self.0.contains(&T::ANY)
    }

    pub fn contains(&self, value: T) -> bool {
        self.0.contains(&value)
    }

    /// Whether a listing in `bucket` passes this filter. A listing whose
    /// bucket is unknown only passes the wildcard.
    pub fn matches(&self, bucket: Option<T>) -> bool {
        self.is_any() || bucket.is_some_and(|b| self.contains(b))
    }

    /// Members in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a preference set cannot be emptied.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Bucket> Default for PreferenceSet<T> {
    fn default() -> Self {
        Self::any()
    }
}

impl<T: Bucket + Serialize> Serialize for PreferenceSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de, T> Deserialize<'de> for PreferenceSet<T>
where
    T: Bucket + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        PreferenceSet::parse(values).map_err(de::Error::custom)
    }
}
