use std::{fmt, io};

/// A piece of rendered markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fragments in document order. Append-only; rendered and written once.
#[derive(Clone, Debug, Default)]
pub struct Document {
    fragments: Vec<Fragment>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) -> &mut Self {
        self.fragments.push(fragment);
        self
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn render(&self) -> String {
        let len = self.fragments.iter().map(|f| f.as_str().len()).sum();
        let mut out = String::with_capacity(len);
        for fragment in &self.fragments {
            out.push_str(fragment.as_str());
        }
        out
    }

    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()
    }
}

impl FromIterator<Fragment> for Document {
    fn from_iter<T: IntoIterator<Item = Fragment>>(iter: T) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
