use std::fmt::Debug;

/// A closed vocabulary of filter values that contains exactly one wildcard.
///
/// `ALL` lists every member in display order: the wildcard first, then the
/// concrete buckets ascending. `Ord` on implementors must agree with that order.
pub trait Bucket: Copy + Ord + Debug + 'static {
    const ANY: Self;
    const ALL: &'static [Self];

    /// Machine code used on the wire, e.g. `B5_PLUS`.
    fn code(&self) -> &'static str;

    /// Label shown next to a form option.
    fn label(&self) -> &'static str;

    /// Lower-case phrase used inside alert emails.
    fn phrase(&self) -> &'static str;

    fn is_any(&self) -> bool {
        *self == Self::ANY
    }

    fn parse(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.code() == code)
    }
}

/// Form label for a raw code. Unknown codes come back unchanged.
pub fn label_for_code<B: Bucket>(code: &str) -> String {
    match B::parse(code) {
        Some(bucket) => bucket.label().to_string(),
        None => code.to_string(),
    }
}

/// `(code, label)` pairs in display order, for rendering option lists.
pub fn options<B: Bucket>() -> Vec<(&'static str, &'static str)> {
    B::ALL.iter().map(|b| (b.code(), b.label())).collect()
}
