//! Protocol operations

/// The closed set of operations this dispatcher recognizes.
///
/// Derived from a request node's tag by exact, case-insensitive match on
/// the local name; tags matching nothing here are simply skipped by the
/// router rather than carried as a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    GetCapabilities,
    Transformable,
    Transform,
    DescribeTransformation,
}

impl OperationKind {
    pub const ALL: [OperationKind; 4] = [
        OperationKind::GetCapabilities,
        OperationKind::Transformable,
        OperationKind::Transform,
        OperationKind::DescribeTransformation,
    ];

    /// The canonical request tag for this operation.
    pub fn tag(&self) -> &'static str {
        match self {
            OperationKind::GetCapabilities => "GetCapabilities",
            OperationKind::Transformable => "Transformable",
            OperationKind::Transform => "Transform",
            OperationKind::DescribeTransformation => "DescribeTransformation",
        }
    }

    /// Match a tag (already stripped to its local name) against the
    /// known operations, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_matching_is_case_insensitive() {
        assert_eq!(
            OperationKind::from_tag("getcapabilities"),
            Some(OperationKind::GetCapabilities)
        );
        assert_eq!(
            OperationKind::from_tag("TRANSFORMABLE"),
            Some(OperationKind::Transformable)
        );
        assert_eq!(
            OperationKind::from_tag("Transform"),
            Some(OperationKind::Transform)
        );
        assert_eq!(
            OperationKind::from_tag("describetransformation"),
            Some(OperationKind::DescribeTransformation)
        );
    }

    #[test]
    fn test_unknown_tags_do_not_match() {
        assert_eq!(OperationKind::from_tag("Foo"), None);
        assert_eq!(OperationKind::from_tag(""), None);
        // "Transformable" must not match as a prefix.
        assert_eq!(OperationKind::from_tag("Transformable2"), None);
    }
}
