use crate::data_structs::Record;

/// A forward-only producer of records.
///
/// Records are expected in non-decreasing `(chromosome, start)` order; the
/// window engine checks this only when asked to. Exhaustion is signalled with
/// `Ok(None)`, failures of the underlying reader with `Err`.
pub trait RecordSource {
    fn next_record(&mut self) -> anyhow::Result<Option<Record>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &mut S {
    fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        (**self).next_record()
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        (**self).next_record()
    }
}

/// Adapts any iterator of records into a [`RecordSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Record>,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(records: T) -> Self {
        Self {
            inner: records.into_iter(),
        }
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I> RecordSource for IterSource<I>
where
    I: Iterator<Item = Record>,
{
    fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        Ok(self.inner.next())
    }
}

/// Adapts an iterator of fallible records, e.g. a reader wrapped in a
/// `map`, into a [`RecordSource`].
#[derive(Debug, Clone)]
pub struct TryIterSource<I> {
    inner: I,
}

impl<I, E> TryIterSource<I>
where
    I: Iterator<Item = Result<Record, E>>,
    E: Into<anyhow::Error>,
{
    pub fn new<T: IntoIterator<IntoIter = I>>(records: T) -> Self {
        Self {
            inner: records.into_iter(),
        }
    }
}

impl<I, E> RecordSource for TryIterSource<I>
where
    I: Iterator<Item = Result<Record, E>>,
    E: Into<anyhow::Error>,
{
    fn next_record(&mut self) -> anyhow::Result<Option<Record>> {
        self.inner.next().transpose().map_err(Into::into)
    }
}
