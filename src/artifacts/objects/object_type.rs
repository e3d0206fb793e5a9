//! Loose object header
//!
//! A decompressed loose object starts with `<type> <size>\0`, followed by the
//! object content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
    Tag,
}

impl ObjectType {
    /// Map a header type name to its object type; unknown names give `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blob" => Some(ObjectType::Blob),
            "tree" => Some(ObjectType::Tree),
            "commit" => Some(ObjectType::Commit),
            "tag" => Some(ObjectType::Tag),
            _ => None,
        }
    }

    /// Split a loose object into its header and its content
    ///
    /// Returns the type name, the declared content size and the content, or
    /// `None` when the data does not start with a well-formed header, i.e. an
    /// ASCII `<word> <decimal size>` terminated by a NUL byte.
    pub fn split_header(data: &[u8]) -> Option<(&str, usize, &[u8])> {
        let nul = data.iter().position(|&b| b == b'\0')?;
        let header = std::str::from_utf8(&data[..nul]).ok()?;
        let (object_type, size) = header.split_once(' ')?;

        if object_type.is_empty()
            || !object_type.chars().all(|c| c.is_ascii_lowercase())
            || size.is_empty()
            || !size.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        let size = size.parse::<usize>().ok()?;

        Some((object_type, size, &data[nul + 1..]))
    }
}
