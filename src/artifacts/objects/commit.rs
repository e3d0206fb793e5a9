//! Git commit object
//!
//! History reconstruction only needs two headers out of a commit:
//! the first parent and the committer timestamp.
//!
//! ## Format
//!
//! After decompression:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::HistoryError;
use chrono::{DateTime, Utc};

const PARENT_HEADER: &str = "parent";
const COMMITTER_HEADER: &str = "committer";

/// Slim representation of a commit
///
/// Holds the commit's own ID, its first parent (absent for a root commit) and
/// the committer time. Merge commits keep only their first-listed parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    oid: ObjectId,
    parent: Option<ObjectId>,
    committed_at: DateTime<Utc>,
}

impl CommitRecord {
    pub fn new(oid: ObjectId, parent: Option<ObjectId>, committed_at: DateTime<Utc>) -> Self {
        CommitRecord {
            oid,
            parent,
            committed_at,
        }
    }

    /// Decode a decompressed commit object
    ///
    /// A leading loose object header is stripped when present; any object type
    /// other than `commit` is rejected. Header lines are scanned in any order
    /// up to the first empty line, which separates them from the message.
    pub fn decode(oid: ObjectId, raw: &[u8]) -> Result<Self, HistoryError> {
        let content = match ObjectType::split_header(raw) {
            Some((object_type, _, content)) => {
                if ObjectType::from_name(object_type) != Some(ObjectType::Commit) {
                    return Err(HistoryError::UnexpectedObjectType {
                        oid,
                        actual: object_type.to_string(),
                    });
                }
                content
            }
            None => raw,
        };

        let content = match String::from_utf8(content.to_vec()) {
            Ok(content) => content,
            Err(source) => return Err(HistoryError::DecodeError { oid, source }),
        };

        let mut parent = None;
        let mut committer = None;

        for line in content.lines().take_while(|line| !line.is_empty()) {
            let mut tokens = line.split_whitespace();

            match tokens.next() {
                Some(PARENT_HEADER) if parent.is_none() => {
                    parent = Some(ObjectId::try_parse(tokens.next().unwrap_or_default())?);
                }
                Some(COMMITTER_HEADER) if committer.is_none() => {
                    committer = Some(tokens.collect::<Vec<_>>());
                }
                _ => {}
            }
        }

        let Some(committer) = committer else {
            return Err(HistoryError::MalformedCommitter {
                oid,
                reason: "missing committer line".to_string(),
            });
        };

        let committed_at = match Self::parse_committer_timestamp(&committer) {
            Ok(committed_at) => committed_at,
            Err(reason) => return Err(HistoryError::MalformedCommitter { oid, reason }),
        };

        Ok(CommitRecord::new(oid, parent, committed_at))
    }

    /// The timestamp is the second-from-last token, right before the timezone
    fn parse_committer_timestamp(tokens: &[&str]) -> Result<DateTime<Utc>, String> {
        if tokens.len() < 2 {
            return Err("missing timestamp".to_string());
        }

        let raw_timestamp = tokens[tokens.len() - 2];
        let timestamp = raw_timestamp
            .parse::<i64>()
            .map_err(|_| format!("timestamp {raw_timestamp:?} is not an integer"))?;

        DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| format!("timestamp {timestamp} is out of range"))
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }

    /// Committer time as Unix epoch seconds
    pub fn committer_timestamp(&self) -> i64 {
        self.committed_at.timestamp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const COMMIT_OID: &str = "1111111111111111111111111111111111111111";
    const PARENT_OID: &str = "2222222222222222222222222222222222222222";
    const OTHER_PARENT_OID: &str = "3333333333333333333333333333333333333333";
    const TREE_OID: &str = "4444444444444444444444444444444444444444";

    fn oid(hex: &str) -> ObjectId {
        ObjectId::try_parse(hex).unwrap()
    }

    fn with_header(content: &str) -> Vec<u8> {
        let mut raw = format!("commit {}\0", content.len()).into_bytes();
        raw.extend_from_slice(content.as_bytes());
        raw
    }

    fn commit_body(parents: &[&str], timestamp: i64) -> String {
        let mut lines = vec![format!("tree {TREE_OID}")];
        lines.extend(parents.iter().map(|parent| format!("parent {parent}")));
        lines.push(format!("author Jane Doe <jane@example.com> {timestamp} +0200"));
        lines.push(format!("committer Jane Doe <jane@example.com> {timestamp} +0200"));
        lines.push(String::new());
        lines.push("Add a feature".to_string());
        lines.join("\n")
    }

    #[test]
    fn decode_commit_with_single_parent() {
        let raw = with_header(&commit_body(&[PARENT_OID], 1616564023));

        let record = CommitRecord::decode(oid(COMMIT_OID), &raw).unwrap();

        assert_eq!(record.oid(), &oid(COMMIT_OID));
        assert_eq!(record.parent(), Some(&oid(PARENT_OID)));
        assert_eq!(record.committer_timestamp(), 1616564023);
    }

    #[test]
    fn decode_root_commit_has_no_parent() {
        let raw = with_header(&commit_body(&[], 100));

        let record = CommitRecord::decode(oid(COMMIT_OID), &raw).unwrap();

        assert_eq!(record.parent(), None);
    }

    #[test]
    fn decode_merge_commit_keeps_first_parent() {
        let raw = with_header(&commit_body(&[PARENT_OID, OTHER_PARENT_OID], 100));

        let record = CommitRecord::decode(oid(COMMIT_OID), &raw).unwrap();

        assert_eq!(record.parent(), Some(&oid(PARENT_OID)));
    }

    #[test]
    fn decode_accepts_headerless_content() {
        let body = commit_body(&[PARENT_OID], 200);

        let record = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes()).unwrap();

        assert_eq!(record.committer_timestamp(), 200);
    }

    #[test]
    fn decode_accepts_headers_in_any_order() {
        let body = format!(
            "committer Jane Doe <jane@example.com> 300 +0000\nparent {PARENT_OID}\ntree {TREE_OID}\n"
        );

        let record = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes()).unwrap();

        assert_eq!(record.parent(), Some(&oid(PARENT_OID)));
        assert_eq!(record.committer_timestamp(), 300);
    }

    #[test]
    fn decode_ignores_parent_lines_in_the_message() {
        let body = format!(
            "tree {TREE_OID}\ncommitter Jane Doe <jane@example.com> 300 +0000\n\nparent {PARENT_OID}\n"
        );

        let record = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes()).unwrap();

        assert_eq!(record.parent(), None);
    }

    #[test]
    fn decode_fails_without_committer_line() {
        let body = format!("tree {TREE_OID}\nparent {PARENT_OID}\n\nmessage\n");

        let result = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes());

        assert!(matches!(
            result,
            Err(HistoryError::MalformedCommitter { .. })
        ));
    }

    #[test]
    fn decode_fails_on_non_numeric_timestamp() {
        let body = format!("tree {TREE_OID}\ncommitter Jane <jane@example.com> yesterday +0000\n");

        let result = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes());

        assert!(matches!(
            result,
            Err(HistoryError::MalformedCommitter { .. })
        ));
    }

    #[test]
    fn decode_fails_on_committer_without_timestamp() {
        let body = format!("tree {TREE_OID}\ncommitter\n");

        let result = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes());

        assert!(matches!(
            result,
            Err(HistoryError::MalformedCommitter { .. })
        ));
    }

    #[test]
    fn decode_fails_on_invalid_utf8() {
        let mut raw = b"commit 4\0".to_vec();
        raw.extend_from_slice(&[0xff, 0xfe, 0xfd, 0x0a]);

        let result = CommitRecord::decode(oid(COMMIT_OID), &raw);

        assert!(matches!(result, Err(HistoryError::DecodeError { .. })));
    }

    #[test]
    fn decode_fails_on_malformed_parent_hash() {
        let body = "parent abc\ncommitter Jane <jane@example.com> 1 +0000\n";

        let result = CommitRecord::decode(oid(COMMIT_OID), body.as_bytes());

        assert!(matches!(result, Err(HistoryError::InvalidHash { .. })));
    }

    #[test]
    fn decode_rejects_non_commit_objects() {
        let raw = b"blob 5\0hello".to_vec();

        let result = CommitRecord::decode(oid(COMMIT_OID), &raw);

        assert!(matches!(
            result,
            Err(HistoryError::UnexpectedObjectType { ref actual, .. }) if actual == "blob"
        ));
    }

    #[test]
    fn decode_rejects_unknown_object_type() {
        let raw = b"note 5\0hello".to_vec();

        let result = CommitRecord::decode(oid(COMMIT_OID), &raw);

        assert!(matches!(
            result,
            Err(HistoryError::UnexpectedObjectType { ref actual, .. }) if actual == "note"
        ));
    }

    proptest! {
        #[test]
        fn decoding_is_deterministic(
            timestamp in 0i64..4_000_000_000,
            has_parent in any::<bool>()
        ) {
            let parents = if has_parent { vec![PARENT_OID] } else { vec![] };
            let raw = with_header(&commit_body(&parents, timestamp));

            let first = CommitRecord::decode(oid(COMMIT_OID), &raw).unwrap();
            let second = CommitRecord::decode(oid(COMMIT_OID), &raw).unwrap();

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.committer_timestamp(), timestamp);
        }
    }
}
