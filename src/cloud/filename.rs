//! Label and object id extraction from object file names.
//!
//! A name such as `label_1_object_2.txt` is split on `_`, `.` and space
//! (empty tokens dropped). Token 1 is the label and token 3 the object id.

use log::debug;

use super::{Label, ObjectId};

const NAME_DELIMITERS: [char; 3] = ['_', '.', ' '];
const LABEL_TOKEN: usize = 1;
const OBJECT_TOKEN: usize = 3;

/// Identifiers parsed from one file name, before any defaulting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileIds {
    pub label: Option<Label>,
    pub object_id: Option<ObjectId>,
}

impl FileIds {
    /// The label, or zero when it could not be parsed.
    pub fn label_or_default(&self) -> Label {
        self.label.unwrap_or_default()
    }

    /// The object id, or zero when it could not be parsed.
    pub fn object_id_or_default(&self) -> ObjectId {
        self.object_id.unwrap_or_default()
    }

    /// Number of identifiers that fell back to zero.
    pub fn fallback_count(&self) -> usize {
        usize::from(self.label.is_none()) + usize::from(self.object_id.is_none())
    }
}

/// Splits a file name into its non-empty tokens.
pub fn tokenize_file_name(name: &str) -> Vec<&str> {
    name.split(&NAME_DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .collect()
}

/// Parses the label and object id out of a file name.
///
/// Missing or non-integer tokens yield `None`; no diagnostic is emitted.
pub fn parse_file_ids(name: &str) -> FileIds {
    let tokens = tokenize_file_name(name);
    debug!("{name}: tokens {tokens:?}");

    FileIds {
        label: parse_int_token(&tokens, LABEL_TOKEN).map(Label::new),
        object_id: parse_int_token(&tokens, OBJECT_TOKEN).map(ObjectId::new),
    }
}

fn parse_int_token(tokens: &[&str], index: usize) -> Option<i64> {
    tokens.get(index)?.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_name() {
        let ids = parse_file_ids("label_1_object_2.txt");
        assert_eq!(ids.label, Some(Label(1)));
        assert_eq!(ids.object_id, Some(ObjectId(2)));
        assert_eq!(ids.fallback_count(), 0);
    }

    #[test]
    fn mixed_delimiters_and_repeats_are_collapsed() {
        assert_eq!(
            tokenize_file_name("cls 7.._obj__12.pts"),
            vec!["cls", "7", "obj", "12", "pts"]
        );
        let ids = parse_file_ids("cls 7.._obj__12.pts");
        assert_eq!(ids.label_or_default(), Label(7));
        assert_eq!(ids.object_id_or_default(), ObjectId(12));
    }

    #[test]
    fn non_integer_tokens_default_to_zero() {
        let ids = parse_file_ids("label_one_object_2.txt");
        assert_eq!(ids.label, None);
        assert_eq!(ids.label_or_default(), Label(0));
        assert_eq!(ids.object_id_or_default(), ObjectId(2));
        assert_eq!(ids.fallback_count(), 1);
    }

    #[test]
    fn short_names_default_both_ids() {
        let ids = parse_file_ids("points.txt");
        assert_eq!(ids, FileIds::default());
        assert_eq!(ids.fallback_count(), 2);
    }

    #[test]
    fn signed_integers_are_accepted() {
        let ids = parse_file_ids("l_-4_o_+9");
        assert_eq!(ids.label, Some(Label(-4)));
        assert_eq!(ids.object_id, Some(ObjectId(9)));
    }
}
