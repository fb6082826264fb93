/// Accumulates parse errors so one expansion reports all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> ErrorSet {
        ErrorSet::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Returns the value of `res`, or records its error and returns `None`.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        match res {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Combines the recorded errors into one, spans intact.
    pub(crate) fn finish(self) -> syn::Result<()> {
        match self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
