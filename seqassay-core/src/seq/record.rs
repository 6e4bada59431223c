/// A sequence record as extracted from a file, before normalization and
/// validation. The sequence text is kept raw; the analysis entry points
/// normalize and validate it against the inferred or declared type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: String,
}

impl RawRecord {
    pub fn new(id: impl Into<Box<str>>, seq: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq: seq.into(),
        }
    }

    pub fn with_desc(mut self, desc: impl Into<Box<str>>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &str {
        &self.seq
    }
}
